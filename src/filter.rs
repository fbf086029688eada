use crate::models::RawResult;

/// Select the first `max_results` hits that carry a usable url, preserving
/// input order. Hits without a url cannot be merged later, so they are
/// dropped here.
pub fn filter_results(results: &[RawResult], max_results: usize) -> Vec<RawResult> {
    results
        .iter()
        .filter(|r| !r.url.is_empty())
        .take(max_results)
        .cloned()
        .collect()
}
