use thiserror::Error;

/// Why a single page fetch produced no content. These never escape the
/// scraper; they are logged and the url is merged back with empty text.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("non-success status: {0}")]
    Status(reqwest::StatusCode),

    #[error("timed out after {0}s")]
    Timeout(u64),
}
