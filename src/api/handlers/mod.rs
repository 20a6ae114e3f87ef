use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Json,
};
use chrono::Datelike;
use serde::Deserialize;

use super::{middleware::CspNonce, SiteState};
use crate::error::SiteError;
use crate::models::ManualSection;
use crate::render::{self, assets, PageContext};
use crate::ui::{
    variant_cookie, variant_from_cookie_header, DesignVariant, MenuState, SwitcherAction,
    VariantSwitcher,
};

// ============================================================
// Request state
// ============================================================

/// UI toggles accepted on every page (the no-JS path).
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// One-off variant override for this render.
    pub variant: Option<String>,
    /// `open` renders the switcher modal expanded.
    pub switcher: Option<String>,
    /// `open` renders the mobile menu expanded.
    pub menu: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VariantQuery {
    pub return_to: Option<String>,
}

/// The variant chosen by this visitor: cookie first, then the site default.
fn cookie_variant(state: &SiteState, headers: &HeaderMap) -> DesignVariant {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(variant_from_cookie_header)
        .unwrap_or(state.config.default_variant)
}

fn page_context(
    state: &SiteState,
    nonce: CspNonce,
    uri: &Uri,
    headers: &HeaderMap,
    query: &PageQuery,
) -> PageContext {
    let current = query
        .variant
        .as_deref()
        .and_then(DesignVariant::from_slug)
        .unwrap_or_else(|| cookie_variant(state, headers));

    PageContext {
        path: uri.path().to_string(),
        nonce,
        switcher: VariantSwitcher::new(current)
            .with_modal_open(query.switcher.as_deref() == Some("open")),
        menu: MenuState::from_query(query.menu.as_deref()),
        year: chrono::Utc::now().year(),
    }
}

/// Only same-site absolute paths are valid redirect targets.
pub fn safe_return_to(target: Option<&str>) -> &str {
    match target {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && path.chars().all(|c| c.is_ascii_graphic() && c != '\\') =>
        {
            path
        }
        _ => "/",
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Pages
// ============================================================

pub async fn home(
    State(state): State<SiteState>,
    Extension(nonce): Extension<CspNonce>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, SiteError> {
    let ctx = page_context(&state, nonce, &uri, &headers, &query);
    Ok(Html(render::home_page(&ctx)?))
}

pub async fn manual_index(
    State(state): State<SiteState>,
    Extension(nonce): Extension<CspNonce>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, SiteError> {
    let ctx = page_context(&state, nonce, &uri, &headers, &query);
    Ok(Html(render::manual_index_page(&ctx)?))
}

pub async fn manual_section(
    State(state): State<SiteState>,
    Extension(nonce): Extension<CspNonce>,
    Path(slug): Path<String>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, SiteError> {
    let section = ManualSection::find(&slug).ok_or_else(|| SiteError::NotFound {
        path: uri.path().to_string(),
    })?;
    let ctx = page_context(&state, nonce, &uri, &headers, &query);
    Ok(Html(render::manual_section_page(&ctx, section)?))
}

pub async fn not_found(uri: Uri) -> SiteError {
    SiteError::NotFound {
        path: uri.path().to_string(),
    }
}

// ============================================================
// Design variant
// ============================================================

/// Apply a switcher action, remember the result for the browser session,
/// and send the visitor back where they came from.
pub async fn switch_variant(
    State(state): State<SiteState>,
    Path(action): Path<String>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<VariantQuery>,
) -> Result<Response, SiteError> {
    let action = SwitcherAction::parse(&action).ok_or_else(|| SiteError::NotFound {
        path: uri.path().to_string(),
    })?;

    let mut switcher = VariantSwitcher::new(cookie_variant(&state, &headers));
    let before = switcher.current;
    if switcher.apply(action) {
        tracing::debug!(
            "Design variant {} -> {}",
            before.slug(),
            switcher.current.slug()
        );
    }

    let target = safe_return_to(query.return_to.as_deref());
    Ok((
        [(header::SET_COOKIE, variant_cookie(switcher.current))],
        Redirect::to(target),
    )
        .into_response())
}

// ============================================================
// Assets and crawler files
// ============================================================

pub async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        assets::SITE_CSS,
    )
}

pub async fn robots(State(state): State<SiteState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        assets::robots_txt(&state.config.site_url),
    )
}

pub async fn sitemap(State(state): State<SiteState>) -> Result<Response, SiteError> {
    let xml = assets::sitemap_xml(&state.config.site_url)?;
    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
        .into_response())
}
