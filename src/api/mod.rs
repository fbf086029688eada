use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::pipeline::{CrawlParams, CrawlPipeline};
use crate::queue::ResponseQueue;

pub mod handlers;
pub mod models;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<CrawlPipeline>,
    pub defaults: CrawlParams,
    pub queue: Arc<dyn ResponseQueue>,
}

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/crawl", post(handlers::crawl_handler))
        .route(
            "/api/sessions/:session_id/responses",
            post(handlers::push_response_handler),
        )
        .route(
            "/api/sessions/:session_id/response",
            get(handlers::wait_for_response_handler),
        )
        .route(
            "/api/sessions/:session_id",
            delete(handlers::clear_session_handler),
        )
        .with_state(state)
        .layer(cors)
}
