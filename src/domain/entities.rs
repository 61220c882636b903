use serde::Deserialize;

use super::page_text::{is_all_digits, is_word_char};

const PRODUCT_ENTITY_GROUPS: [&str; 3] = ["ORG", "PRODUCT", "MISC"];
const MIN_WORD_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecognizedEntity {
    pub word: String,
    pub entity_group: String,
    #[serde(default)]
    pub score: f32,
}

/// The leading part of `text` handed to the model, at most `limit` chars.
pub fn ner_window(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Keeps confident organisation, product and misc entities as product name candidates.
pub fn filter_entities(entities: Vec<RecognizedEntity>, min_score: f32) -> Vec<String> {
    entities
        .into_iter()
        .filter(|entity| entity.score > min_score)
        .filter(|entity| PRODUCT_ENTITY_GROUPS.contains(&entity.entity_group.as_str()))
        .filter_map(|entity| {
            let word = entity.word.trim();
            if word.chars().count() < MIN_WORD_LEN || is_all_digits(word) {
                return None;
            }

            let clean_word: String = word
                .chars()
                .filter(|&c| is_word_char(c) || c.is_whitespace() || c == '-')
                .collect();

            match clean_word.chars().count() >= MIN_WORD_LEN {
                true => Some(clean_word),
                false => None,
            }
        })
        .collect()
}
