//! Error types for pivdocs.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::render;

/// Failure to build a [`SiteConfig`](crate::config::SiteConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`SiteConfig`](crate::config::SiteConfig).
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An environment variable holds a value we cannot use.
    #[error("invalid value {value:?} for {var}: expected {expected}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Errors surfaced while serving a request.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("no page at {path}")]
    NotFound { path: String },

    /// The OS entropy source failed while minting a nonce.
    #[error("entropy source unavailable: {0}")]
    Entropy(String),

    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        match self {
            SiteError::NotFound { path } => {
                tracing::debug!("Not found: {}", path);
                match render::not_found_page(&path) {
                    Ok(page) => (StatusCode::NOT_FOUND, Html(page)).into_response(),
                    Err(err) => {
                        tracing::error!("Failed to render 404 page: {}", err);
                        (StatusCode::NOT_FOUND, "Page not found").into_response()
                    }
                }
            }
            other => {
                // Full detail stays in the log; clients get a generic body.
                tracing::error!("Internal error: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
