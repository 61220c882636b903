pub mod api_route;
pub mod app;
pub mod default_route;
