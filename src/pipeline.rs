use nanoid::nanoid;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::Config;
use crate::filter::filter_results;
use crate::merger::merge_results;
use crate::models::{AugmentedResponse, RawResponse};
use crate::scraper::ContentScraper;

/// Caller-supplied knobs for one crawl. Out-of-range values are clamped by
/// `clamped`, never rejected.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CrawlParams {
    /// How many hits to keep, clamped to 1..=50.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Character cap for extracted text, clamped to 100..=5000.
    #[serde(default = "default_content_length")]
    pub content_length: usize,
    /// Upstream result page, minimum 1. Carried for the search request that
    /// produced the raw response; the pipeline itself does not paginate.
    #[serde(default = "default_page_no")]
    pub page_no: u32,
    #[serde(default)]
    pub scrape_content: bool,
    #[serde(default)]
    pub include_raw_content: bool,
    /// Per-fetch timeout in whole seconds, minimum 1.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_max_results() -> usize {
    10
}

fn default_content_length() -> usize {
    2500
}

fn default_page_no() -> u32 {
    1
}

fn default_timeout() -> u64 {
    10
}

impl Default for CrawlParams {
    fn default() -> CrawlParams {
        CrawlParams {
            max_results: default_max_results(),
            content_length: default_content_length(),
            page_no: default_page_no(),
            scrape_content: false,
            include_raw_content: false,
            timeout: default_timeout(),
        }
    }
}

impl CrawlParams {
    /// Service-level defaults from configuration; per-request values still
    /// override these.
    pub fn from_config(config: &Config) -> CrawlParams {
        CrawlParams {
            max_results: config.max_results,
            content_length: config.content_length,
            timeout: config.timeout_secs,
            ..CrawlParams::default()
        }
    }

    pub fn clamped(mut self) -> CrawlParams {
        self.max_results = self.max_results.clamp(1, 50);
        self.content_length = self.content_length.clamp(100, 5000);
        self.page_no = self.page_no.max(1);
        self.timeout = self.timeout.max(1);
        self
    }
}

/// Runs filter -> scrape -> merge and packages the timed, uniquely
/// identified response.
pub struct CrawlPipeline {
    scraper: ContentScraper,
}

impl CrawlPipeline {
    pub fn new(scraper: ContentScraper) -> CrawlPipeline {
        CrawlPipeline { scraper }
    }

    /// Augment a raw metasearch response. Per-url fetch failures degrade to
    /// empty text; only a pipeline-level fault propagates to the caller.
    pub async fn crawl(
        &self,
        raw: RawResponse,
        params: &CrawlParams,
    ) -> anyhow::Result<AugmentedResponse> {
        let start = Instant::now();
        let request_id = nanoid!();
        let params = params.clone().clamped();

        let accepted = filter_results(&raw.results, params.max_results);

        let scraped = if params.scrape_content && !accepted.is_empty() {
            let urls: Vec<String> = accepted.iter().map(|r| r.url.clone()).collect();
            tracing::debug!("scraping {} urls for request {request_id}", urls.len());
            Some(
                self.scraper
                    .scrape_all(
                        &urls,
                        params.content_length,
                        params.include_raw_content,
                        params.timeout,
                    )
                    .await,
            )
        } else {
            None
        };

        let results = merge_results(&accepted, scraped.as_ref());

        Ok(AugmentedResponse {
            query: raw.query,
            follow_up_questions: None,
            answer: None,
            images: raw.images,
            results,
            response_time: start.elapsed().as_secs_f64(),
            request_id,
        })
    }
}
