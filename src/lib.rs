//! Community help board: members post offers of help, requests for help and
//! shared resources, and browse each category most-recent-first.
pub mod adapters;
pub mod bootstrap;
pub mod common;
pub mod config;
pub mod database;
pub mod dependencies;
pub mod domain;
pub mod routes;
pub mod services;

use axum::{
    http::{
        header::{InvalidHeaderName, InvalidHeaderValue, CONTENT_TYPE},
        HeaderName, HeaderValue, Method,
    },
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{bootstrap::AppState, config::Config, routes::create_routes};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid CORS origin: {0}")]
    Origin(#[from] InvalidHeaderValue),
    #[error("invalid context header name: {0}")]
    HeaderName(#[from] InvalidHeaderName),
}

/// API routes wrapped in the CORS and request tracing layers.
///
/// Browsers preflight every call because of the context headers, so those are
/// listed in `access-control-allow-headers` next to `content-type`.
pub fn app(state: AppState, config: &Config) -> Result<Router, AppError> {
    let origins = config
        .allow_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    let allowed_headers = [
        CONTENT_TYPE,
        config.context_headers.scope.parse::<HeaderName>()?,
        config.context_headers.username.parse::<HeaderName>()?,
    ];

    Ok(create_routes(state)
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(allowed_headers),
        )
        .layer(TraceLayer::new_for_http()))
}
