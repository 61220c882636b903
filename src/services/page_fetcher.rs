use std::time::Duration;

use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client,
};

use crate::{configuration::ScraperSettings, domain::PageUrl};

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(settings: &ScraperSettings) -> Result<Self, reqwest::Error> {
        let user_agent = match settings.user_agent {
            Some(ref user_agent) => user_agent.clone(),
            None => fake_user_agent::get_rua().to_string(),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
        headers.insert(header::UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .cookie_store(true)
            .gzip(true)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(PageFetcher { client })
    }

    pub async fn fetch(&self, url: &PageUrl) -> Result<String, reqwest::Error> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await?
            .error_for_status()?;

        log::info!("Fetched {} with status {}", url, response.status());

        response.text().await
    }
}
