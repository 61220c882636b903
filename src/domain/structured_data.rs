use itertools::Itertools;
use scraper::{Html, Selector};
use serde_json::Value;

const PRODUCT_TYPES: [&str; 2] = ["Product", "IndividualProduct"];
const LIST_TYPES: [&str; 2] = ["ItemList", "BreadcrumbList"];
const DESCRIPTION_KEYWORDS: [&str; 7] = ["chair", "table", "sofa", "bed", "диван", "стол", "кровать"];
const MIN_TITLE_LEN: usize = 5;

/// Product names declared by the page itself: JSON-LD blocks first, then meta tags.
pub fn extract_structured_products(html: &str) -> Vec<String> {
    structured_document_products(&Html::parse_document(html))
}

pub fn structured_document_products(document: &Html) -> Vec<String> {
    let mut products = names_from_json_ld_scripts(document);
    products.extend(names_from_meta_tags(document));

    products.into_iter().unique().collect()
}

fn names_from_json_ld_scripts(document: &Html) -> Vec<String> {
    let script_selector = Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();

    document
        .select(&script_selector)
        .filter_map(|script| {
            let content: String = script.text().collect();
            match serde_json::from_str::<Value>(&content) {
                Ok(data) => Some(data),
                Err(e) => {
                    log::error!("Skipping invalid JSON-LD block: {:?}", e);
                    None
                }
            }
        })
        .filter_map(|data| match data {
            Value::Array(mut items) => match items.is_empty() {
                true => None,
                false => Some(items.swap_remove(0)),
            },
            other => Some(other),
        })
        .flat_map(|data| names_from_json_ld(&data))
        .collect()
}

/// Walks a JSON-LD value collecting product, item list and breadcrumb names.
pub fn names_from_json_ld(data: &Value) -> Vec<String> {
    let mut products = vec![];

    match data {
        Value::Object(object) => {
            if has_type(data, &PRODUCT_TYPES) {
                if let Some(name) = object.get("name").filter(|name| is_truthy(name)) {
                    products.extend(render_name(name));
                }
            } else if has_type(data, &LIST_TYPES) {
                if let Some(Value::Array(items)) = object.get("itemListElement") {
                    products.extend(
                        items
                            .iter()
                            .filter_map(|item| item.as_object()?.get("name"))
                            .filter_map(render_name),
                    );
                }
            }

            for value in object.values() {
                if value.is_object() || value.is_array() {
                    products.extend(names_from_json_ld(value));
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                products.extend(names_from_json_ld(item));
            }
        }
        _ => {}
    }

    products
}

fn has_type(data: &Value, types: &[&str]) -> bool {
    match data.get("@type") {
        Some(Value::String(t)) => types.contains(&t.as_str()),
        Some(Value::Array(ts)) => ts
            .iter()
            .filter_map(Value::as_str)
            .any(|t| types.contains(&t)),
        _ => false,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn render_name(name: &Value) -> Option<String> {
    match name {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn names_from_meta_tags(document: &Html) -> Vec<String> {
    let og_title_selector = Selector::parse(r#"meta[property="og:title"]"#).unwrap();
    let twitter_title_selector = Selector::parse(r#"meta[name="twitter:title"]"#).unwrap();
    let description_selector = Selector::parse(r#"meta[name="description"]"#).unwrap();
    let title_selector = Selector::parse("title").unwrap();

    let meta_content = |selector: &Selector| {
        document
            .select(selector)
            .next()
            .and_then(|tag| tag.value().attr("content"))
            .filter(|content| !content.is_empty())
            .map(|content| content.to_string())
    };

    let mut products = vec![];

    if let Some(content) = meta_content(&og_title_selector) {
        products.push(content);
    }

    if let Some(content) = meta_content(&twitter_title_selector) {
        products.push(content);
    }

    if let Some(content) = meta_content(&description_selector) {
        let lowercase = content.to_lowercase();
        if DESCRIPTION_KEYWORDS.iter().any(|k| lowercase.contains(k)) {
            products.push(content);
        }
    }

    if let Some(title) = document.select(&title_selector).next() {
        let title: String = title.text().collect();
        let title = title.trim();
        if title.chars().count() > MIN_TITLE_LEN {
            products.push(title.to_string());
        }
    }

    products
}
