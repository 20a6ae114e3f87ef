//! The navigation shell shared by every page: head, header menu, variant
//! switcher modal and footer. Rendered by `templates/base.html`.

use super::{assets, PageContext};
use crate::models::{FooterColumn, FOOTER_COLUMNS, NAV_ENTRIES, PRODUCT_NAME, SITE_DESCRIPTION};
use crate::ui::{DesignVariant, SwitcherAction};

/// A header menu entry as rendered for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub current: bool,
    pub external: bool,
}

/// A link in the switcher modal that applies an action and comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantLink {
    pub index: usize,
    pub label: &'static str,
    pub tagline: &'static str,
    pub href: String,
    pub current: bool,
}

impl VariantLink {
    fn new(variant: DesignVariant, action: SwitcherAction, path: &str, current: bool) -> Self {
        Self {
            index: variant.index(),
            label: variant.label(),
            tagline: variant.tagline(),
            href: format!(
                "/variant/{}?return_to={}",
                action.segment().unwrap_or("next"),
                path
            ),
            current,
        }
    }
}

/// Template fields read by `base.html`.
#[derive(Debug, Clone)]
pub struct Shell {
    pub title: String,
    pub description: &'static str,
    pub product: &'static str,
    pub stylesheet: &'static str,
    pub path: String,
    pub nonce: String,
    pub variant: &'static str,
    pub variant_label: &'static str,
    pub menu_open: bool,
    /// No-JS link flipping the menu state.
    pub menu_href: String,
    pub modal_open: bool,
    pub nav: Vec<NavLink>,
    pub variants: Vec<VariantLink>,
    pub prev: VariantLink,
    pub next: VariantLink,
    pub footer: &'static [FooterColumn],
    pub year: i32,
    /// Body of the nonce-stamped `<style>` block.
    pub style: String,
    /// Body of the nonce-stamped `<script>` block.
    pub script: String,
}

impl Shell {
    pub fn new(ctx: &PageContext, title: &str) -> Self {
        let current = ctx.switcher.current;
        let path = ctx.path.as_str();

        let title = if title == PRODUCT_NAME {
            PRODUCT_NAME.to_string()
        } else {
            format!("{} · {}", title, PRODUCT_NAME)
        };

        let menu_href = if ctx.menu.toggled().is_open() {
            format!("{}?menu=open", path)
        } else {
            path.to_string()
        };

        let nav = NAV_ENTRIES
            .iter()
            .map(|entry| NavLink {
                label: entry.label,
                href: entry.href,
                current: entry.is_active(path),
                external: entry.external,
            })
            .collect();

        let variants = DesignVariant::ALL
            .iter()
            .map(|&v| VariantLink::new(v, SwitcherAction::Select(v), path, v == current))
            .collect();

        Self {
            title,
            description: SITE_DESCRIPTION,
            product: PRODUCT_NAME,
            stylesheet: assets::STYLESHEET_PATH,
            path: path.to_string(),
            nonce: ctx.nonce.as_str().to_string(),
            variant: current.slug(),
            variant_label: current.label(),
            menu_open: ctx.menu.is_open(),
            menu_href,
            modal_open: ctx.switcher.modal_open,
            nav,
            variants,
            prev: VariantLink::new(current.prev(), SwitcherAction::Prev, path, false),
            next: VariantLink::new(current.next(), SwitcherAction::Next, path, false),
            footer: FOOTER_COLUMNS,
            year: ctx.year,
            style: assets::variant_style(current),
            script: assets::client_script(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CspNonce;
    use crate::render::manual_index_page;
    use crate::ui::{MenuState, VariantSwitcher};

    fn ctx(path: &str) -> PageContext {
        PageContext {
            path: path.to_string(),
            nonce: CspNonce::generate().unwrap(),
            switcher: VariantSwitcher::new(DesignVariant::Blueprint),
            menu: MenuState::Closed,
            year: 2026,
        }
    }

    #[test]
    fn inline_tags_carry_the_nonce() {
        let ctx = ctx("/manual");
        let html = manual_index_page(&ctx).unwrap();
        let attr = format!("nonce=\"{}\"", ctx.nonce.as_str());
        assert_eq!(html.matches(&attr).count(), 2);
        assert!(html.contains("<style nonce="));
        assert!(html.contains("<script nonce="));
    }

    #[test]
    fn no_inline_style_attributes() {
        let html = manual_index_page(&ctx("/manual")).unwrap();
        assert!(!html.contains(" style=\""));
    }

    #[test]
    fn style_and_script_bodies_are_not_escaped() {
        let html = manual_index_page(&ctx("/manual")).unwrap();
        assert!(html.contains("[data-reveal=\"0\"]"));
        assert!(html.contains("var config = {\""));
    }

    #[test]
    fn current_nav_entry_is_marked() {
        let shell = Shell::new(&ctx("/manual/analysis"), "Manual");
        let manual = shell.nav.iter().find(|l| l.label == "Manual").unwrap();
        assert!(manual.current);
        assert_eq!(shell.nav.iter().filter(|l| l.current).count(), 1);
    }

    #[test]
    fn switcher_links_cycle_around_current() {
        let shell = Shell::new(&ctx("/manual"), "Manual");
        assert_eq!(shell.prev.label, "Aurora");
        assert_eq!(shell.prev.href, "/variant/prev?return_to=/manual");
        assert_eq!(shell.next.label, "Paper");
        assert_eq!(shell.variant, "blueprint");
        assert_eq!(shell.variants.iter().filter(|v| v.current).count(), 1);
        assert_eq!(shell.variants[3].href, "/variant/midnight?return_to=/manual");
    }

    #[test]
    fn menu_link_flips_state() {
        let mut c = ctx("/manual");
        assert_eq!(Shell::new(&c, "Manual").menu_href, "/manual?menu=open");
        c.menu = MenuState::Open;
        let shell = Shell::new(&c, "Manual");
        assert!(shell.menu_open);
        assert_eq!(shell.menu_href, "/manual");
    }

    #[test]
    fn title_is_suffixed_with_product() {
        assert_eq!(Shell::new(&ctx("/"), PRODUCT_NAME).title, PRODUCT_NAME);
        assert_eq!(
            Shell::new(&ctx("/manual"), "Manual").title,
            format!("Manual · {}", PRODUCT_NAME)
        );
    }

    #[test]
    fn modal_hidden_unless_open() {
        let hidden = "aria-labelledby=\"variant-switcher-title\" hidden>";
        let mut c = ctx("/manual");
        assert!(manual_index_page(&c).unwrap().contains(hidden));
        c.switcher.modal_open = true;
        assert!(!manual_index_page(&c).unwrap().contains(hidden));
    }

    #[test]
    fn request_path_is_escaped() {
        let html = manual_index_page(&ctx("/manual\"><b>")).unwrap();
        assert!(!html.contains("\"><b>"));
        assert!(html.contains("&quot;&gt;&lt;b&gt;"));
    }

    #[test]
    fn footer_shows_year() {
        assert!(manual_index_page(&ctx("/manual")).unwrap().contains("© 2026"));
    }
}
