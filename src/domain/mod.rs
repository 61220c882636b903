pub mod entities;
pub mod keywords;
pub mod page_text;
pub mod page_url;
pub mod product;
pub mod structured_data;

pub use entities::*;
pub use keywords::*;
pub use page_text::{clean_document_text, clean_page_text};
pub use page_url::*;
pub use product::*;
pub use structured_data::*;
