use itertools::Itertools;
use scraper::{Html, Node};

/// Subtrees whose text never reaches the extractors.
const SKIPPED_TAGS: [&str; 7] = [
    "script", "style", "noscript", "header", "footer", "nav", "aside",
];

/// Visible text of an HTML document, normalised for the extractors.
///
/// Returns `None` when the page carries no visible text at all.
pub fn clean_page_text(html: &str) -> Option<String> {
    clean_document_text(&Html::parse_document(html))
}

pub fn clean_document_text(document: &Html) -> Option<String> {
    let text = collapse_whitespace(&visible_text(document));
    let text: String = text
        .chars()
        .map(|c| match is_word_char(c) || c.is_whitespace() || ".,!?$-".contains(c) {
            true => c,
            false => ' ',
        })
        .collect();

    match text.trim().is_empty() {
        true => None,
        false => Some(text),
    }
}

fn visible_text(document: &Html) -> String {
    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some((node, text)),
            _ => None,
        })
        .filter(|(node, _)| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| SKIPPED_TAGS.contains(&element.name()))
            })
        })
        .map(|(_, text)| text.trim())
        .filter(|text| !text.is_empty())
        .join(" ")
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().join(" ")
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub(crate) fn is_all_digits(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_numeric())
}
