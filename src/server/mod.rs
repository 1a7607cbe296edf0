//! HTTP service serving a decorated copy of an upstream ICS feed.
//!
//! Every request fetches the upstream feed and rewrites it, clients and proxies
//! are expected to cache the response according to its `Cache-Control` header.

mod config;
pub use config::{Config, FileConfig};

mod error;
pub use error::FeedError;

mod upstream;
pub use upstream::{FeedSource, HttpFeed};

pub mod routes;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::Rewriter;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn FeedSource>,
    pub rewriter: Arc<Rewriter>,
    /// Seconds downstream caches may keep the feed.
    pub cache_max_age: u64,
}

impl AppState {
    pub fn new(source: Arc<dyn FeedSource>, rewriter: Rewriter, cache_max_age: u64) -> Self {
        AppState {
            source,
            rewriter: Arc::new(rewriter),
            cache_max_age,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .fallback(routes::calendar)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(config: Config) -> Result<(), FeedError> {
    let source = HttpFeed::new(config.feed_url.clone())?;
    let state = AppState::new(
        Arc::new(source),
        Rewriter::new(config.options),
        config.cache_max_age,
    );

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, upstream = %config.feed_url.host_str().unwrap_or_default(), "serving feed");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
