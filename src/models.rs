use serde::{Deserialize, Serialize};

/// A single hit as it arrives from the upstream metasearch engine.
/// Upstream engines are sloppy about optional fields, so everything except
/// `url` falls back to a default when missing.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RawResult {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub score: Option<f64>,
}

/// The raw metasearch response handed to the crawl pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RawResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub results: Vec<RawResult>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// A result after filtering, optional scraping and merging.
///
/// `text` and `raw_content` are empty strings unless scraping was requested
/// and succeeded for this url. They are always present in the serialized
/// output, never absent fields.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    pub content: String,
    pub score: f64,
    pub text: String,
    pub raw_content: String,
}

/// Final augmented response returned to the caller. `results` keeps the
/// filter order; it is never re-sorted by score.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AugmentedResponse {
    pub query: String,
    pub follow_up_questions: Option<Vec<String>>,
    pub answer: Option<String>,
    pub images: Vec<String>,
    pub results: Vec<SearchResult>,
    pub response_time: f64,
    pub request_id: String,
}
