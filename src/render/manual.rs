//! Manual viewer: an index page and one sub-page per section.

use askama::Template;

use super::{PageContext, Shell};
use crate::error::SiteError;
use crate::models::{ManualSection, MANUAL_SECTIONS};

#[derive(Template)]
#[template(path = "manual/index.html")]
pub struct ManualIndexTemplate {
    pub shell: Shell,
    pub sections: &'static [ManualSection],
}

/// One section, with the sidebar listing every section and only the
/// current one expanded to its topics.
#[derive(Template)]
#[template(path = "manual/section.html")]
pub struct ManualSectionTemplate {
    pub shell: Shell,
    pub sections: &'static [ManualSection],
    pub section: &'static ManualSection,
}

pub fn manual_index_page(ctx: &PageContext) -> Result<String, SiteError> {
    let template = ManualIndexTemplate {
        shell: Shell::new(ctx, "Manual"),
        sections: MANUAL_SECTIONS,
    };
    Ok(template.render()?)
}

pub fn manual_section_page(
    ctx: &PageContext,
    section: &'static ManualSection,
) -> Result<String, SiteError> {
    let template = ManualSectionTemplate {
        shell: Shell::new(ctx, section.title),
        sections: MANUAL_SECTIONS,
        section,
    };
    Ok(template.render()?)
}
