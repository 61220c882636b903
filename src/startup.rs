use std::net::TcpListener;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    configuration::Settings,
    routes::{api_route, app::index_route, default_route},
    services::{OpenaiClient, PageFetcher, ProductExtractor},
};

pub fn build_extractor(configuration: &Settings) -> Result<ProductExtractor, reqwest::Error> {
    let fetcher = PageFetcher::new(&configuration.scraper)?;

    let recognizer = match configuration.api_keys.openai {
        Some(ref api_key) if !api_key.trim().is_empty() => {
            log::info!("NER enabled with model {}", configuration.ner.model);
            Some(OpenaiClient::new(api_key.clone(), &configuration.ner))
        }
        _ => {
            log::warn!("No Openai api key configured, NER extraction is disabled");
            None
        }
    };

    Ok(ProductExtractor::new(
        fetcher,
        recognizer,
        configuration.extraction.clone(),
    ))
}

pub fn run(
    listener: TcpListener,
    extractor: ProductExtractor,
    max_body_bytes: usize,
) -> Result<Server, std::io::Error> {
    let extractor = web::Data::new(extractor);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .send_wildcard()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(index_route::index)
            .service(index_route::extract)
            .service(index_route::extract_content)
            .service(default_route::health_check)
            .service(
                web::scope("/api")
                    .service(api_route::extract_from_url)
                    .service(api_route::extract_from_content),
            )
            .app_data(extractor.clone())
            .app_data(web::FormConfig::default().limit(max_body_bytes))
            .app_data(
                web::JsonConfig::default()
                    .limit(max_body_bytes)
                    .error_handler(api_route::json_error_handler),
            )
            .app_data(web::QueryConfig::default().error_handler(api_route::query_error_handler))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
