use serde::Deserialize;

use crate::models::RawResponse;
use crate::pipeline::CrawlParams;

/// Body of `POST /api/crawl`: the raw metasearch response plus any of the
/// crawl knobs. Absent knobs fall back to the service defaults.
#[derive(Debug, Deserialize)]
pub struct CrawlRequest {
    #[serde(flatten)]
    pub response: RawResponse,
    pub max_results: Option<usize>,
    pub content_length: Option<usize>,
    pub page_no: Option<u32>,
    pub scrape_content: Option<bool>,
    pub include_raw_content: Option<bool>,
    pub timeout: Option<u64>,
}

impl CrawlRequest {
    pub fn params(&self, defaults: &CrawlParams) -> CrawlParams {
        CrawlParams {
            max_results: self.max_results.unwrap_or(defaults.max_results),
            content_length: self.content_length.unwrap_or(defaults.content_length),
            page_no: self.page_no.unwrap_or(defaults.page_no),
            scrape_content: self.scrape_content.unwrap_or(defaults.scrape_content),
            include_raw_content: self
                .include_raw_content
                .unwrap_or(defaults.include_raw_content),
            timeout: self.timeout.unwrap_or(defaults.timeout),
        }
        .clamped()
    }
}

#[derive(Debug, Deserialize)]
pub struct WaitParams {
    /// Seconds to wait: absent means wait indefinitely, 0 means check once.
    pub timeout: Option<f64>,
}
