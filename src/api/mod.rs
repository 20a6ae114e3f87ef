mod handlers;
mod middleware;

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;

pub use middleware::{security_headers, CspNonce, SecurityPolicy, NONCE_BYTES, NONCE_HEADER};

/// Shared, read-only state handed to every handler.
#[derive(Clone, Debug)]
pub struct SiteState {
    pub config: Arc<SiteConfig>,
}

/// Every route the site serves, for `pivdocs routes` and the docs.
pub const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/", "landing page"),
    ("GET", "/manual", "manual index"),
    ("GET", "/manual/{slug}", "manual section"),
    ("GET", "/variant/{action}", "switch design variant (next, prev or a variant name)"),
    ("GET", "/assets/site.css", "stylesheet"),
    ("GET", "/robots.txt", "crawler rules"),
    ("GET", "/sitemap.xml", "sitemap"),
    ("GET", "/health", "health check"),
];

pub fn create_router(config: SiteConfig) -> Router {
    let policy = SecurityPolicy::from_config(&config);
    let state = SiteState {
        config: Arc::new(config),
    };

    Router::new()
        // Pages
        .route("/", get(handlers::home))
        .route("/manual", get(handlers::manual_index))
        .route("/manual/{slug}", get(handlers::manual_section))
        // Design variant
        .route("/variant/{action}", get(handlers::switch_variant))
        // Assets
        .route("/assets/site.css", get(handlers::stylesheet))
        .route("/robots.txt", get(handlers::robots))
        .route("/sitemap.xml", get(handlers::sitemap))
        // Health
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(from_fn_with_state(policy, security_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
