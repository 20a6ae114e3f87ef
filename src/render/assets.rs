//! Stylesheet, inline style/script blocks and crawler files.

use askama::Template;
use serde_json::{json, Map, Value};

use crate::error::SiteError;
use crate::models::MANUAL_SECTIONS;
use crate::ui::{motion, DesignVariant, SwitcherAction};

pub const STYLESHEET_PATH: &str = "/assets/site.css";

pub const SITE_CSS: &str = r#":root{--radius:14px;--font:system-ui,-apple-system,"Segoe UI",sans-serif;}
*{box-sizing:border-box;}
body{margin:0;font-family:var(--font);background:var(--bg);color:var(--text);line-height:1.6;}
a{color:var(--accent);}
kbd{font-family:ui-monospace,monospace;border:1px solid var(--muted);border-radius:4px;padding:0 .3em;}
.skip-link{position:absolute;left:-999px;}
.skip-link:focus{left:1rem;top:1rem;}
.site-header{display:flex;align-items:center;gap:1.5rem;padding:1rem 2rem;background:var(--surface);}
.brand{font-weight:700;font-size:1.25rem;text-decoration:none;color:var(--text);}
.site-header nav ul{display:flex;gap:1rem;list-style:none;margin:0;padding:0;}
.site-header nav a[aria-current="page"]{font-weight:700;text-decoration:underline;}
.menu-toggle{display:none;}
.variant-open{margin-left:auto;}
main{max-width:72rem;margin:0 auto;padding:2rem;}
.hero{padding:6rem 0 4rem;}
.hero h1{font-size:clamp(2.2rem,5vw,3.6rem);margin:0 0 1rem;background:linear-gradient(90deg,var(--accent),var(--accent-alt));-webkit-background-clip:text;background-clip:text;color:transparent;}
.hero .lead{font-size:1.25rem;color:var(--muted);max-width:40rem;}
.cta{display:inline-block;padding:.75rem 1.5rem;border-radius:var(--radius);background:var(--accent);color:var(--surface);text-decoration:none;font-weight:600;}
.cta.secondary{background:transparent;color:var(--accent);border:2px solid var(--accent);}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(16rem,1fr));gap:1.5rem;}
.card{background:var(--surface);border-radius:var(--radius);padding:1.5rem;}
.card .icon{font-size:2rem;color:var(--accent-alt);}
.workflow ol{counter-reset:step;list-style:none;padding:0;}
.workflow li{counter-increment:step;padding:1rem 0 1rem 3.5rem;position:relative;}
.workflow li::before{content:counter(step);position:absolute;left:0;width:2.5rem;height:2.5rem;border-radius:50%;background:var(--accent);color:var(--surface);display:grid;place-items:center;}
.avatar{width:3.5rem;height:3.5rem;border-radius:50%;display:grid;place-items:center;background:var(--accent-alt);color:var(--surface);font-weight:700;}
.citation blockquote{border-left:4px solid var(--accent);margin:0;padding:.5rem 1rem;background:var(--surface);}
.manual{display:grid;grid-template-columns:16rem 1fr;gap:2rem;}
.manual-nav ul{list-style:none;padding-left:0;}
.manual-nav ul ul{padding-left:1rem;font-size:.9rem;}
.manual-nav a[aria-current="page"]{font-weight:700;}
.manual-pager{display:flex;justify-content:space-between;margin-top:3rem;}
.variant-switcher{position:fixed;inset:10vh 0 auto;margin:0 auto;max-width:28rem;background:var(--surface);border-radius:var(--radius);padding:1.5rem;box-shadow:0 20px 60px rgba(0,0,0,.35);}
.variant-switcher[hidden]{display:none;}
.variant-switcher ol{list-style:none;padding:0;}
.variant-switcher a[aria-current="true"]{font-weight:700;}
.variant-switcher small{display:block;color:var(--muted);}
.site-footer{background:var(--surface);padding:2rem;margin-top:4rem;}
.footer-columns{display:flex;flex-wrap:wrap;gap:3rem;}
.footer-columns h2{font-size:1rem;}
.footer-columns ul{list-style:none;padding:0;}
.copyright{color:var(--muted);font-size:.875rem;}
.not-found main{text-align:center;padding-top:20vh;}
@keyframes reveal{from{opacity:0;transform:translateY(16px);}to{opacity:1;transform:none;}}
@media (max-width:48rem){
.menu-toggle{display:inline;}
#site-menu[data-open="false"]{display:none;}
.site-header{flex-wrap:wrap;}
.site-header nav ul{flex-direction:column;}
.manual{grid-template-columns:1fr;}
}
"#;

/// Inline style block: palette of the selected variant plus reveal timing.
pub fn variant_style(variant: DesignVariant) -> String {
    let p = variant.palette();
    let mut css = format!(
        ":root{{--bg:{};--surface:{};--text:{};--muted:{};--accent:{};--accent-alt:{};}}\n",
        p.background, p.surface, p.text, p.muted, p.accent, p.accent_alt
    );
    css.push_str(&motion::reveal_rules());
    css
}

/// Key bindings in the form the browser script consumes: key to either a
/// `/variant/{segment}` target or a local modal command.
pub fn binding_table() -> Map<String, Value> {
    SwitcherAction::bindings()
        .into_iter()
        .map(|(key, action)| {
            let command = match action {
                SwitcherAction::ToggleModal => "toggle",
                SwitcherAction::CloseModal => "close",
                other => other.segment().unwrap_or("next"),
            };
            (key, Value::String(command.to_string()))
        })
        .collect()
}

const SCRIPT_BODY: &str = r#"(function () {
  var modal = document.getElementById("variant-switcher");
  var menu = document.getElementById("site-menu");
  var menuToggle = document.getElementById("menu-toggle");
  var opener = document.getElementById("variant-open");
  function go(segment) {
    var back = encodeURIComponent(window.location.pathname);
    window.location.assign("/variant/" + segment + "?return_to=" + back);
  }
  if (menu && menuToggle) {
    menuToggle.addEventListener("click", function (event) {
      event.preventDefault();
      var open = menu.getAttribute("data-open") !== "true";
      menu.setAttribute("data-open", String(open));
      menuToggle.setAttribute("aria-expanded", String(open));
    });
  }
  if (modal && opener) {
    opener.addEventListener("click", function (event) {
      event.preventDefault();
      modal.hidden = !modal.hidden;
    });
  }
  document.addEventListener("keydown", function (event) {
    if (event.ctrlKey || event.metaKey || event.altKey) return;
    var target = event.target;
    var typing = target && (target.isContentEditable ||
      /^(INPUT|TEXTAREA|SELECT)$/.test(target.tagName));
    if (typing) return;
    var command = config.bindings[event.key];
    if (!command) return;
    event.preventDefault();
    if (command === "toggle") {
      if (modal) modal.hidden = !modal.hidden;
    } else if (command === "close") {
      if (modal) modal.hidden = true;
    } else {
      go(command);
    }
  });
})();
"#;

/// Inline script for the variant switcher and mobile menu.
pub fn client_script(current: DesignVariant) -> String {
    let config = json!({
        "current": current.slug(),
        "bindings": binding_table(),
    });
    // A JSON string can legally contain "</", which would end the element.
    let config = config.to_string().replace("</", "<\\/");
    format!("var config = {};\n{}", config, SCRIPT_BODY)
}

pub fn robots_txt(site_url: &str) -> String {
    format!("User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n", site_url)
}

/// Every page route, for the sitemap.
pub fn page_paths() -> Vec<String> {
    let mut paths = vec!["/".to_string(), "/manual".to_string()];
    paths.extend(MANUAL_SECTIONS.iter().map(|s| s.href()));
    paths
}

#[derive(Template)]
#[template(path = "sitemap.xml")]
struct SitemapTemplate<'a> {
    site_url: &'a str,
    paths: Vec<String>,
}

pub fn sitemap_xml(site_url: &str) -> Result<String, SiteError> {
    let template = SitemapTemplate {
        site_url,
        paths: page_paths(),
    };
    Ok(template.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_style_sets_palette() {
        let css = variant_style(DesignVariant::Midnight);
        assert!(css.contains("--bg:#0d1117"));
        assert!(css.contains("[data-reveal=\"0\"]"));
    }

    #[test]
    fn binding_table_routes_cycle_keys_to_server() {
        let table = binding_table();
        assert_eq!(table.get("]"), Some(&Value::String("next".into())));
        assert_eq!(table.get("["), Some(&Value::String("prev".into())));
        assert_eq!(table.get("4"), Some(&Value::String("midnight".into())));
        assert_eq!(table.get("v"), Some(&Value::String("toggle".into())));
        assert_eq!(table.get("Escape"), Some(&Value::String("close".into())));
    }

    #[test]
    fn client_script_embeds_config() {
        let script = client_script(DesignVariant::Paper);
        assert!(script.starts_with("var config = {"));
        assert!(script.contains("\"current\":\"paper\""));
        assert!(!script.contains("</"));
    }

    #[test]
    fn sitemap_lists_every_manual_section() {
        let xml = sitemap_xml("https://piv.example.org").unwrap();
        for section in MANUAL_SECTIONS {
            assert!(xml.contains(&format!(
                "<loc>https://piv.example.org/manual/{}</loc>",
                section.slug
            )));
        }
        assert!(xml.contains("<loc>https://piv.example.org/</loc>"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        let robots = robots_txt("https://piv.example.org");
        assert!(robots.contains("Sitemap: https://piv.example.org/sitemap.xml"));
    }
}
