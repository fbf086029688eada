use std::collections::HashMap;

use crate::models::{RawResult, SearchResult};
use crate::scraper::PageContent;

/// Rank-based stand-in used when the upstream engine supplied no score:
/// 0.9 for the first result, stepping down 0.05 per rank, floored at 0.
/// Not a relevance measure, just a decreasing heuristic.
pub fn fallback_score(index: usize) -> f64 {
    (0.9 - 0.05 * index as f64).max(0.0)
}

/// Join scraped page content back onto the filtered hits by url. Hits keep
/// their filter order. When scraping was off or a fetch produced nothing,
/// `text` and `raw_content` come out as empty strings.
pub fn merge_results(
    accepted: &[RawResult],
    scraped: Option<&HashMap<String, PageContent>>,
) -> Vec<SearchResult> {
    accepted
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let (text, raw_content) = scraped
                .and_then(|contents| contents.get(&r.url))
                .map(|c| (c.text.clone(), c.raw.clone()))
                .unwrap_or_default();
            SearchResult {
                url: r.url.clone(),
                title: r.title.clone(),
                content: r.content.clone(),
                score: r.score.unwrap_or_else(|| fallback_score(i)),
                text,
                raw_content,
            }
        })
        .collect()
}
