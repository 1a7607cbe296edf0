use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::server::config::FEED_URL_VAR;
use crate::types::UnknownCategory;

/// Errors of the feed service.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error(
        "{} is not set. Export it (or add it to .env) with the private ICS feed URL, \
         or set `feed_url` in the config file.",
        FEED_URL_VAR
    )]
    MissingFeedUrl,
    #[error("invalid feed url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid bind address: {0}")]
    InvalidBind(#[from] std::net::AddrParseError),
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
    #[error("invalid config file: {0}")]
    ConfigFile(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Failed to fetch upstream feed: {0}")]
    Upstream(u16),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl FeedError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FeedError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(%status, "{self}");
        let body = match &self {
            Self::Upstream(_) => self.to_string(),
            _ => format!("Error: {self}"),
        };
        (status, [(header::CONTENT_TYPE, "text/plain")], body).into_response()
    }
}
