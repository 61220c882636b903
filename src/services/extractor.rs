use scraper::Html;
use thiserror::Error;

use crate::{
    configuration::ExtractionSettings,
    domain::{
        analyze_text_with_keywords, clean_document_text, filter_entities, ner_window,
        rank_products, structured_document_products, ExtractionMethod, ExtractionReport, PageUrl,
    },
};

use super::{OpenaiClient, PageFetcher};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("{0}")]
    InvalidUrl(String),
    #[error("No page content was submitted")]
    EmptyContent,
    #[error("Failed to fetch the page: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Could not get any data from the page")]
    NoPageData,
}

/// Everything a single HTML document offers to the extractors.
#[derive(Debug, Default, PartialEq)]
pub struct PageContent {
    pub text: Option<String>,
    pub structured: Vec<String>,
}

impl PageContent {
    pub fn analyze(html: &str) -> Self {
        let document = Html::parse_document(html);

        PageContent {
            text: clean_document_text(&document),
            structured: structured_document_products(&document),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.structured.is_empty()
    }
}

pub struct ProductExtractor {
    fetcher: PageFetcher,
    recognizer: Option<OpenaiClient>,
    settings: ExtractionSettings,
}

impl ProductExtractor {
    pub fn new(
        fetcher: PageFetcher,
        recognizer: Option<OpenaiClient>,
        settings: ExtractionSettings,
    ) -> Self {
        ProductExtractor {
            fetcher,
            recognizer,
            settings,
        }
    }

    pub async fn extract_from_url(&self, raw_url: &str) -> Result<ExtractionReport, ExtractionError> {
        let url = PageUrl::parse(raw_url).map_err(ExtractionError::InvalidUrl)?;

        let html = self.fetcher.fetch(&url).await.map_err(|e| {
            log::error!("Network error while fetching {}: {:?}", url, e);
            ExtractionError::Fetch(e)
        })?;

        self.extract_from_page(raw_url.trim().to_string(), PageContent::analyze(&html))
            .await
    }

    pub async fn extract_from_content(
        &self,
        content: &str,
        source: &str,
    ) -> Result<ExtractionReport, ExtractionError> {
        if content.trim().is_empty() {
            return Err(ExtractionError::EmptyContent);
        }

        self.extract_from_page(source.to_string(), PageContent::analyze(content))
            .await
    }

    pub async fn extract_from_page(
        &self,
        source: String,
        page: PageContent,
    ) -> Result<ExtractionReport, ExtractionError> {
        if page.is_empty() {
            log::error!("No text or structured data found on {}", source);
            return Err(ExtractionError::NoPageData);
        }

        let mut methods_used = vec![];
        let mut candidates = vec![];

        if !page.structured.is_empty() {
            log::info!("{} structured data names on {}", page.structured.len(), source);
            methods_used.push(ExtractionMethod::StructuredData);
            candidates.extend(page.structured);
        }

        if let Some(ref text) = page.text {
            if let Some(ref recognizer) = self.recognizer {
                methods_used.push(ExtractionMethod::NerModel);
                candidates.extend(self.recognize_products(recognizer, text).await);
            }

            let keyword_products = analyze_text_with_keywords(text);
            log::info!("{} keyword matches on {}", keyword_products.len(), source);
            methods_used.push(ExtractionMethod::KeywordAnalysis);
            candidates.extend(keyword_products);
        }

        let (products, products_count) = rank_products(candidates, self.settings.max_products);
        log::info!(
            "Extracted {} unique products from {}, returning {}",
            products_count,
            source,
            products.len()
        );

        Ok(ExtractionReport {
            source,
            products,
            products_count,
            methods_used,
        })
    }

    async fn recognize_products(&self, recognizer: &OpenaiClient, text: &str) -> Vec<String> {
        let window = ner_window(text, self.settings.ner_char_limit);

        match recognizer.recognize_entities(window).await {
            Ok(entities) => filter_entities(entities, self.settings.ner_min_score),
            Err(e) => {
                log::error!("NER processing error: {:?}", e);
                vec![]
            }
        }
    }
}
