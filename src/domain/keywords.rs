use super::page_text::{collapse_whitespace, is_all_digits, is_word_char};

pub const FURNITURE_KEYWORDS: &[&str] = &[
    // English
    "sofa", "chair", "table", "bed", "desk", "lamp", "mirror", "cabinet",
    "shelf", "ottoman", "bench", "stool", "dresser", "nightstand", "bookcase",
    "wardrobe", "dining", "living", "bedroom", "office", "kitchen", "bathroom",
    "outdoor", "light", "lighting", "pendant", "ceiling", "wall", "floor",
    "mattress", "pillow", "cushion", "throw", "rug", "curtain", "blind",
    "furniture", "collection", "series", "set", "armchair", "recliner",
    "sectional", "loveseat", "console", "coffee", "side", "accents",
    // Russian
    "диван", "стул", "стол", "кровать", "кресло", "лампа", "зеркало", "шкаф",
    "полка", "пуф", "скамья", "табурет", "комод", "тумба", "стеллаж", "гардероб",
    "столовая", "гостиная", "спальня", "офис", "кухня", "ванная", "уличная",
    "свет", "освещение", "подвесной", "потолочный", "настенный", "напольный",
    "матрас", "подушка", "ковер", "штора", "жалюзи", "мебель",
    "коллекция", "серия", "комплект", "раскладушка", "угловой",
];

const MIN_KEYWORD_LEN: usize = 3;
const MIN_SENTENCE_LEN: usize = 10;
const MAX_SENTENCE_LEN: usize = 150;
const MIN_WORD_LEN: usize = 4;

fn contains_keyword(lowercase: &str) -> bool {
    FURNITURE_KEYWORDS
        .iter()
        .filter(|keyword| keyword.chars().count() >= MIN_KEYWORD_LEN)
        .any(|keyword| lowercase.contains(keyword))
}

/// Sentences and single words of `text` that mention furniture.
///
/// Sentences come first in document order, followed by matching words.
pub fn analyze_text_with_keywords(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let sentences = text
        .split(|c: char| matches!(c, '.' | '!' | '?'))
        .filter(|sentence| contains_keyword(&sentence.to_lowercase()))
        .map(collapse_whitespace)
        .filter(|sentence| {
            (MIN_SENTENCE_LEN..=MAX_SENTENCE_LEN).contains(&sentence.chars().count())
        });

    let words = text
        .split(|c: char| !is_word_char(c))
        .filter(|word| contains_keyword(&word.to_lowercase()))
        .filter(|word| word.chars().count() >= MIN_WORD_LEN && !is_all_digits(word))
        .map(|word| word.to_string());

    sentences.chain(words).collect()
}
