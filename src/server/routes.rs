use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::server::{AppState, FeedError};

pub const CALENDAR_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// Fetch the upstream feed and serve it with decorated titles.
pub async fn calendar(State(state): State<AppState>) -> Result<Response, FeedError> {
    let ics = state.source.fetch().await?;
    let body = state.rewriter.rewrite(&ics);

    Ok((
        [
            (header::CONTENT_TYPE, CALENDAR_CONTENT_TYPE.to_owned()),
            (
                header::CACHE_CONTROL,
                format!("public, max-age={}", state.cache_max_age),
            ),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_owned()),
        ],
        body,
    )
        .into_response())
}

pub async fn health() -> &'static str {
    "ok"
}
