//! Landing page. Sections live in `templates/home.html`; each one reads
//! its own content table.

use askama::Template;

use super::{PageContext, Shell};
use crate::error::SiteError;
use crate::models::{
    Author, FeatureCard, WorkflowStep, AUTHORS, CITATION, FEATURE_CARDS, PRODUCT_NAME,
    SITE_TAGLINE, WORKFLOW_STEPS,
};
use crate::ui::motion::Reveal;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shell: Shell,
    pub tagline: &'static str,
    pub features: &'static [FeatureCard],
    pub steps: &'static [WorkflowStep],
    pub authors: &'static [Author],
    pub citation: &'static str,
}

impl HomeTemplate {
    /// `data-reveal` step of the `index`-th element in a section.
    fn reveal(&self, index: impl std::borrow::Borrow<usize>) -> u32 {
        Reveal::staggered(*index.borrow()).step
    }
}

pub fn home_page(ctx: &PageContext) -> Result<String, SiteError> {
    let template = HomeTemplate {
        shell: Shell::new(ctx, PRODUCT_NAME),
        tagline: SITE_TAGLINE,
        features: FEATURE_CARDS,
        steps: WORKFLOW_STEPS,
        authors: AUTHORS,
        citation: CITATION,
    };
    Ok(template.render()?)
}
