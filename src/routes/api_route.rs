use actix_web::{
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    get,
    http::StatusCode,
    post, web, HttpRequest, HttpResponse, ResponseError,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    domain::{ExtractionMethod, ExtractionReport},
    services::{ExtractionError, ProductExtractor},
};

const INLINE_SOURCE: &str = "inline";

#[derive(Deserialize)]
struct ExtractQuery {
    url: String,
}

#[derive(Deserialize)]
struct ExtractContentBody {
    content: String,
    source: Option<String>,
}

#[derive(Serialize)]
struct ExtractResponse {
    success: bool,
    url: String,
    products_count: usize,
    products: Vec<String>,
    methods_used: Vec<ExtractionMethod>,
}

impl From<ExtractionReport> for ExtractResponse {
    fn from(report: ExtractionReport) -> Self {
        ExtractResponse {
            success: true,
            url: report.source,
            products_count: report.products_count,
            products: report.products,
            methods_used: report.methods_used,
        }
    }
}

impl ResponseError for ExtractionError {
    fn status_code(&self) -> StatusCode {
        match self {
            ExtractionError::InvalidUrl(_) | ExtractionError::EmptyContent => {
                StatusCode::BAD_REQUEST
            }
            ExtractionError::Fetch(_) => StatusCode::BAD_GATEWAY,
            ExtractionError::NoPageData => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error_body(self.status_code(), self.to_string())
    }
}

fn error_body(status: StatusCode, message: String) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "success": false,
        "error": message,
    }))
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = error_body(StatusCode::BAD_REQUEST, err.to_string());
    InternalError::from_response(err, response).into()
}

/// Oversized bodies keep their 413, everything else is a 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = error_body(err.status_code(), err.to_string());
    InternalError::from_response(err, response).into()
}

#[get("/extract")]
pub async fn extract_from_url(
    extractor: web::Data<ProductExtractor>,
    query: web::Query<ExtractQuery>,
) -> Result<HttpResponse, ExtractionError> {
    let report = extractor.extract_from_url(&query.url).await?;

    Ok(HttpResponse::Ok().json(ExtractResponse::from(report)))
}

#[post("/extract")]
pub async fn extract_from_content(
    extractor: web::Data<ProductExtractor>,
    body: web::Json<ExtractContentBody>,
) -> Result<HttpResponse, ExtractionError> {
    let source = body.source.as_deref().unwrap_or(INLINE_SOURCE);
    let report = extractor.extract_from_content(&body.content, source).await?;

    Ok(HttpResponse::Ok().json(ExtractResponse::from(report)))
}
