//! HTML rendering with askama templates from `templates/`.
//!
//! Every page template extends `base.html`, which reads the navigation
//! shell from a [`Shell`] field. Page structs add only their own content.
//! Autoescaping covers every value except the generated `<style>` and
//! `<script>` bodies, which are built from static tables.

pub mod assets;
mod home;
mod manual;
mod shell;

pub use home::home_page;
pub use manual::{manual_index_page, manual_section_page};
pub use shell::{NavLink, Shell, VariantLink};

use askama::Template;

use crate::api::CspNonce;
use crate::error::SiteError;
use crate::models::PRODUCT_NAME;
use crate::ui::{MenuState, VariantSwitcher};

/// Everything a page render needs to know about the request.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Request path, without query string.
    pub path: String,
    pub nonce: CspNonce,
    pub switcher: VariantSwitcher,
    pub menu: MenuState,
    /// Copyright year shown in the footer.
    pub year: i32,
}

/// Standalone 404 page. Carries no inline script or style, so it needs no
/// nonce and can be produced from an error.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate<'a> {
    pub path: &'a str,
    pub product: &'static str,
    pub stylesheet: &'static str,
}

pub fn not_found_page(path: &str) -> Result<String, SiteError> {
    let template = NotFoundTemplate {
        path,
        product: PRODUCT_NAME,
        stylesheet: assets::STYLESHEET_PATH,
    };
    Ok(template.render()?)
}
