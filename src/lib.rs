pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod merger;
pub mod models;
pub mod pipeline;
pub mod queue;
pub mod scraper;
