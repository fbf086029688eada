use reqwest::Client;
use scraper::{ElementRef, Html};
use std::collections::HashMap;
use std::time::Duration;

use crate::config::Config;
use crate::error::ScrapeError;

/// Elements whose subtrees never hold readable page content. Kept as policy
/// data so the exclusion list can be tested and changed without touching the
/// extraction walk.
pub const EXCLUDED_TAGS: &[&str] = &["script", "style", "nav", "header", "footer", "aside"];

/// Marker appended when extracted text is cut at `content_length`.
pub const ELLIPSIS: &str = "...";

/// What a successful fetch produced for one url. `raw` is the unprocessed
/// page source and stays empty unless raw content was requested.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub text: String,
    pub raw: String,
}

/// Fetches candidate pages concurrently and reduces them to readable text.
///
/// One `reqwest::Client` is shared by all fan-out tasks; its pool is safe for
/// concurrent use, each task only owns its own url and result slot.
pub struct ContentScraper {
    client: Client,
}

impl ContentScraper {
    pub fn new(config: &Config) -> anyhow::Result<ContentScraper> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(ContentScraper { client })
    }

    /// Fan-out/fan-in over all accepted urls. Every url gets its own task so
    /// one slow or failing page never delays the rest; total wall time is
    /// bounded by the single per-request timeout, not by urls × timeout.
    ///
    /// Returns only the urls that produced content. Failures are logged and
    /// dropped; the merger fills in empty text for them.
    pub async fn scrape_all(
        &self,
        urls: &[String],
        content_length: usize,
        include_raw_content: bool,
        timeout_secs: u64,
    ) -> HashMap<String, PageContent> {
        let tasks: Vec<_> = urls
            .iter()
            .cloned()
            .map(|url| {
                let client = self.client.clone();
                tokio::spawn(async move {
                    match fetch_page(&client, &url, content_length, include_raw_content, timeout_secs)
                        .await
                    {
                        Ok(content) => Some((url, content)),
                        Err(e) => {
                            tracing::debug!("no content for {url}: {e}");
                            None
                        }
                    }
                })
            })
            .collect();

        futures::future::join_all(tasks)
            .await
            .into_iter()
            .filter_map(|joined| joined.ok().flatten())
            .collect()
    }
}

async fn fetch_page(
    client: &Client,
    url: &str,
    content_length: usize,
    include_raw_content: bool,
    timeout_secs: u64,
) -> Result<PageContent, ScrapeError> {
    let response = client
        .get(url)
        .timeout(Duration::from_secs(timeout_secs))
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ScrapeError::Timeout(timeout_secs)
            } else {
                ScrapeError::Request(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status(status));
    }

    let html = response.text().await?;
    let text = truncate_text(&extract_text(&html), content_length);
    let raw = if include_raw_content { html } else { String::new() };
    Ok(PageContent { text, raw })
}

/// Visible text of the page, excluded subtrees removed, individual text
/// nodes trimmed and joined by single spaces.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts = Vec::new();
    collect_text(document.root_element(), &mut parts);
    parts.join(" ")
}

fn collect_text(element: ElementRef, parts: &mut Vec<String>) {
    if EXCLUDED_TAGS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        } else if let Some(el) = ElementRef::wrap(child) {
            collect_text(el, parts);
        }
    }
}

/// Cut to `max_chars` characters and append the ellipsis marker; text at or
/// under the limit passes through untouched. Counts chars, not bytes, so a
/// multi-byte boundary can never panic the cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let mut out: String = text.chars().take(max_chars).collect();
        out.push_str(ELLIPSIS);
        out
    } else {
        text.to_string()
    }
}
