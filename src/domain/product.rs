use itertools::Itertools;
use serde::Serialize;

const MIN_PRODUCT_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    StructuredData,
    NerModel,
    KeywordAnalysis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionReport {
    pub source: String,
    pub products: Vec<String>,
    pub products_count: usize,
    pub methods_used: Vec<ExtractionMethod>,
}

/// Deduplicates candidates and orders them longest first, longer names
/// tending to be the more specific products.
///
/// Returns at most `max` products together with the number of unique candidates.
pub fn rank_products<I>(candidates: I, max: usize) -> (Vec<String>, usize)
where
    I: IntoIterator<Item = String>,
{
    let mut products: Vec<String> = candidates
        .into_iter()
        .map(|candidate| candidate.trim().to_string())
        .filter(|candidate| candidate.chars().count() >= MIN_PRODUCT_LEN)
        .unique()
        .collect();

    products.sort_by_key(|product| std::cmp::Reverse(product.chars().count()));

    let total = products.len();
    products.truncate(max);

    (products, total)
}
