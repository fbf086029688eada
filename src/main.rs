use std::sync::Arc;

use forage::api::{self, AppState};
use forage::config::Config;
use forage::pipeline::{CrawlParams, CrawlPipeline};
use forage::queue::FlipFlopQueue;
use forage::scraper::ContentScraper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let config = Config::from_env();
    let scraper = ContentScraper::new(&config)?;

    let state = AppState {
        pipeline: Arc::new(CrawlPipeline::new(scraper)),
        defaults: CrawlParams::from_config(&config),
        queue: Arc::new(FlipFlopQueue::new()),
    };
    let router = api::create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
