use crate::helpers::{spawn_app, EMPTY_PAGE, MAX_BODY_BYTES, SOFA_PAGE};

#[tokio::test]
async fn index_shows_both_forms() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(&app.address)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"action="/extract""#));
    assert!(html.contains(r#"action="/extract/content""#));
    assert!(!html.contains("<ol>"));
}

#[tokio::test]
async fn extract_form_lists_products() {
    let app = spawn_app().await;
    app.serve_page("/sofas", SOFA_PAGE).await;

    let response = app.post_extract_form(&app.page_url("/sofas")).await;

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("Found 8 products"));
    assert!(html.contains("<li>Kivik Corner Sofa</li>"));
    assert!(html.contains("<li>Kivik Three-Seat Sofa</li>"));
}

#[tokio::test]
async fn extract_form_shows_errors_on_the_page() {
    let app = spawn_app().await;

    let response = app.post_extract_form("not a url").await;

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("URL must start with http"));
    assert!(html.contains(r#"value="not a url""#));
}

#[tokio::test]
async fn content_form_extracts_pasted_html() {
    let app = spawn_app().await;

    let response = app
        .post_content_form(r#"<h1>Poäng armchair</h1><p>Birch veneer.</p>"#)
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("<li>Poäng armchair Birch veneer</li>"));
    assert!(html.contains("<li>armchair</li>"));
}

#[tokio::test]
async fn extract_form_shows_fetch_failures_on_the_page() {
    let app = spawn_app().await;

    let response = app.post_extract_form(&app.page_url("/missing")).await;

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("Failed to fetch the page"));
    assert!(!html.contains("<ol>"));
}

#[tokio::test]
async fn extract_form_shows_pages_without_data() {
    let app = spawn_app().await;
    app.serve_page("/blank", EMPTY_PAGE).await;

    let response = app.post_extract_form(&app.page_url("/blank")).await;

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("Could not get any data from the page"));
}

#[tokio::test]
async fn oversized_content_form_is_rejected() {
    let app = spawn_app().await;
    let content = "<p>Kivik sofa.</p>".repeat(MAX_BODY_BYTES / 16);

    let response = app.post_content_form(&content).await;

    assert_eq!(response.status().as_u16(), 413);
}
