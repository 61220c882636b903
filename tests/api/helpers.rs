use std::net::TcpListener;

use furniture_extractor::{
    configuration::{
        ApiKeys, ApplicationSettings, ExtractionSettings, NerSettings, ScraperSettings, Settings,
    },
    startup::{build_extractor, run},
};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const SOFA_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Kivik Sofa Collection | Oak Home</title>
    <meta property="og:title" content="Kivik Sofa Collection">
    <script type="application/ld+json">
      {
        "@context": "https://schema.org",
        "@type": "ItemList",
        "itemListElement": [
          {"@type": "ListItem", "position": 1, "name": "Kivik Three-Seat Sofa"},
          {"@type": "ListItem", "position": 2, "name": "Kivik Corner Sofa"}
        ]
      }
    </script>
  </head>
  <body>
    <nav>Home Sofas Beds</nav>
    <h1>Kivik Sofa Collection</h1>
    <p>The Kivik corner sofa has deep seats. Order today!</p>
    <footer>Oak Home 2024</footer>
  </body>
</html>"#;

pub const MAX_BODY_BYTES: usize = 64 * 1024;

pub const EMPTY_PAGE: &str = "<html><body><script>track()</script></body></html>";

pub struct TestApp {
    pub address: String,
    pub page_server: MockServer,
    pub openai_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub fn page_url(&self, page: &str) -> String {
        format!("{}{}", self.page_server.uri(), page)
    }

    pub async fn serve_page(&self, page: &str, html: &'static str) {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html"))
            .mount(&self.page_server)
            .await;
    }

    pub async fn serve_model_reply(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "created": 1_700_000_000,
                "model": "gpt-4o-mini",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": content},
                    "finish_reason": "stop"
                }]
            })))
            .expect(1)
            .mount(&self.openai_server)
            .await;
    }

    pub async fn get_api_extract(&self, url: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/extract", self.address))
            .query(&[("url", url)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_api_extract(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/extract", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_extract_form(&self, url: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/extract", self.address))
            .form(&[("url", url)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_content_form(&self, content: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/extract/content", self.address))
            .form(&[("content", content)])
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn(false).await
}

pub async fn spawn_app_with_ner() -> TestApp {
    spawn(true).await
}

async fn spawn(ner_enabled: bool) -> TestApp {
    let page_server = MockServer::start().await;
    let openai_server = MockServer::start().await;

    let configuration = Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            max_body_bytes: MAX_BODY_BYTES,
        },
        scraper: ScraperSettings {
            timeout_secs: 5,
            user_agent: Some("furniture-extractor-tests".to_string()),
        },
        extraction: ExtractionSettings {
            max_products: 20,
            ner_char_limit: 2000,
            ner_min_score: 0.5,
        },
        ner: NerSettings {
            model: "gpt-4o-mini".to_string(),
            api_base: Some(openai_server.uri()),
            max_tokens: 200,
        },
        api_keys: ApiKeys {
            openai: ner_enabled.then(|| "test-key".to_string()),
        },
    };

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let extractor = build_extractor(&configuration).expect("Failed to build extractor.");
    let server = run(
        listener,
        extractor,
        configuration.application.max_body_bytes,
    )
    .expect("Failed to start server.");
    tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        page_server,
        openai_server,
        api_client: reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap(),
    }
}
