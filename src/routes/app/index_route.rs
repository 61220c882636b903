use actix_web::{get, post, web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::{
    domain::ExtractionReport,
    services::{ExtractionError, ProductExtractor},
};

#[derive(Template, Default)]
#[template(path = "index.html")]
struct IndexTemplate {
    url: String,
    content: String,
    products: Option<Vec<String>>,
    products_count: usize,
    error: Option<String>,
}

impl IndexTemplate {
    fn from_result(
        url: String,
        content: String,
        result: Result<ExtractionReport, ExtractionError>,
    ) -> Self {
        match result {
            Ok(report) => IndexTemplate {
                url,
                content,
                products: Some(report.products),
                products_count: report.products_count,
                error: None,
            },
            Err(e) => IndexTemplate {
                url,
                content,
                products: Some(vec![]),
                products_count: 0,
                error: Some(e.to_string()),
            },
        }
    }

    fn into_response(self) -> HttpResponse {
        match self.render() {
            Ok(body) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(body),
            Err(e) => {
                log::error!("Failed to render index page: {:?}", e);
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}

#[derive(Deserialize)]
struct ExtractForm {
    url: String,
}

#[derive(Deserialize)]
struct ExtractContentForm {
    content: String,
}

#[get("/")]
pub async fn index() -> HttpResponse {
    IndexTemplate::default().into_response()
}

#[post("/extract")]
pub async fn extract(
    extractor: web::Data<ProductExtractor>,
    form: web::Form<ExtractForm>,
) -> HttpResponse {
    let url = form.into_inner().url;
    let result = extractor.extract_from_url(&url).await;

    IndexTemplate::from_result(url, String::new(), result).into_response()
}

#[post("/extract/content")]
pub async fn extract_content(
    extractor: web::Data<ProductExtractor>,
    form: web::Form<ExtractContentForm>,
) -> HttpResponse {
    let content = form.into_inner().content;
    let result = extractor.extract_from_content(&content, "pasted content").await;

    IndexTemplate::from_result(String::new(), content, result).into_response()
}
