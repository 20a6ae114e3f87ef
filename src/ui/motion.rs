//! Reveal animation timing for landing-page sections.
//!
//! Elements fade in one after another. Because the CSP forbids inline
//! `style=` attributes, each element carries a `data-reveal="<step>"`
//! attribute and the matching `animation-delay` rules are emitted once into
//! the nonce-stamped style block by [`reveal_rules`].

pub const BASE_DELAY_MS: u32 = 80;
pub const STEP_MS: u32 = 90;
pub const MAX_DELAY_MS: u32 = 800;
pub const DURATION_MS: u32 = 600;

/// Highest stagger step that still produces a distinct delay.
pub const MAX_STEP: u32 = (MAX_DELAY_MS - BASE_DELAY_MS) / STEP_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub step: u32,
}

impl Reveal {
    /// Reveal for the `index`-th element of a group.
    pub fn staggered(index: usize) -> Self {
        let step = u32::try_from(index).unwrap_or(u32::MAX).min(MAX_STEP);
        Self { step }
    }

    pub fn delay_ms(&self) -> u32 {
        (BASE_DELAY_MS + self.step * STEP_MS).min(MAX_DELAY_MS)
    }

    /// Attribute to splice into an opening tag.
    pub fn attr(&self) -> String {
        format!(r#"data-reveal="{}""#, self.step)
    }
}

/// CSS rules mapping every `data-reveal` step to its delay.
pub fn reveal_rules() -> String {
    let mut css = format!(
        "[data-reveal]{{animation:reveal {}ms ease-out both;}}\n",
        DURATION_MS
    );
    for step in 0..=MAX_STEP {
        let reveal = Reveal { step };
        css.push_str(&format!(
            "[data-reveal=\"{}\"]{{animation-delay:{}ms;}}\n",
            step,
            reveal.delay_ms()
        ));
    }
    css.push_str("@media (prefers-reduced-motion: reduce){[data-reveal]{animation:none;}}\n");
    css
}
