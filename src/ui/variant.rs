use serde::{Deserialize, Serialize};

/// Name of the session cookie carrying the selected variant.
pub const VARIANT_COOKIE: &str = "pivdocs_variant";

/// One of the four visual designs of the site.
///
/// The order of [`DesignVariant::ALL`] is the cycling order used by the
/// keyboard shortcuts; cycling wraps at both ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DesignVariant {
    #[default]
    Aurora,
    Blueprint,
    Paper,
    Midnight,
}

impl DesignVariant {
    pub const ALL: [DesignVariant; 4] = [
        Self::Aurora,
        Self::Blueprint,
        Self::Paper,
        Self::Midnight,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Aurora => "aurora",
            Self::Blueprint => "blueprint",
            Self::Paper => "paper",
            Self::Midnight => "midnight",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aurora" => Some(Self::Aurora),
            "blueprint" => Some(Self::Blueprint),
            "paper" => Some(Self::Paper),
            "midnight" => Some(Self::Midnight),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Aurora => "Aurora",
            Self::Blueprint => "Blueprint",
            Self::Paper => "Paper",
            Self::Midnight => "Midnight",
        }
    }

    /// Short description shown in the switcher modal.
    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Aurora => "Gradient flow fields on a light canvas",
            Self::Blueprint => "Technical drawing, grid lines and cyan ink",
            Self::Paper => "Print-like typography for long reading",
            Self::Midnight => "Dark theme tuned for the lab at night",
        }
    }

    /// 1-based position, which is also the digit shortcut selecting it.
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|v| v == self)
            .map(|i| i + 1)
            .unwrap_or(1)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn next(&self) -> Self {
        let i = self.index() % Self::ALL.len();
        Self::ALL[i]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        let i = (self.index() - 1 + len - 1) % len;
        Self::ALL[i]
    }

    /// CSS custom properties applied to `:root` for this variant.
    pub fn palette(&self) -> Palette {
        match self {
            Self::Aurora => Palette {
                background: "#f7f9fc",
                surface: "#ffffff",
                text: "#14213d",
                muted: "#5c677d",
                accent: "#3a86ff",
                accent_alt: "#8338ec",
            },
            Self::Blueprint => Palette {
                background: "#0b3d91",
                surface: "#0f4aa8",
                text: "#e6f1ff",
                muted: "#a9c6f5",
                accent: "#5ce1e6",
                accent_alt: "#ffffff",
            },
            Self::Paper => Palette {
                background: "#fbf8f1",
                surface: "#ffffff",
                text: "#222222",
                muted: "#6b6b6b",
                accent: "#b5543c",
                accent_alt: "#2d6a4f",
            },
            Self::Midnight => Palette {
                background: "#0d1117",
                surface: "#161b22",
                text: "#e6edf3",
                muted: "#8b949e",
                accent: "#f78166",
                accent_alt: "#7ee787",
            },
        }
    }
}

/// Colour tokens for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub accent_alt: &'static str,
}

/// Something the visitor asked the switcher to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitcherAction {
    Next,
    Prev,
    Select(DesignVariant),
    ToggleModal,
    CloseModal,
}

impl SwitcherAction {
    /// Map a `KeyboardEvent.key` value to an action.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "]" | "ArrowRight" => Some(Self::Next),
            "[" | "ArrowLeft" => Some(Self::Prev),
            "v" | "V" => Some(Self::ToggleModal),
            "Escape" => Some(Self::CloseModal),
            "1" | "2" | "3" | "4" => key
                .parse::<usize>()
                .ok()
                .and_then(DesignVariant::from_index)
                .map(Self::Select),
            _ => None,
        }
    }

    /// Parse the `{action}` segment of `/variant/{action}`.
    ///
    /// Only actions that change the variant have a URL form.
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "next" => Some(Self::Next),
            "prev" => Some(Self::Prev),
            slug => DesignVariant::from_slug(slug).map(Self::Select),
        }
    }

    /// URL segment understood by [`SwitcherAction::parse`], if any.
    pub fn segment(&self) -> Option<&'static str> {
        match self {
            Self::Next => Some("next"),
            Self::Prev => Some("prev"),
            Self::Select(v) => Some(v.slug()),
            Self::ToggleModal | Self::CloseModal => None,
        }
    }

    /// Every key the browser script listens for, with its action.
    pub fn bindings() -> Vec<(String, Self)> {
        const KEYS: [&str; 7] = ["]", "ArrowRight", "[", "ArrowLeft", "v", "V", "Escape"];
        let mut keys: Vec<(String, Self)> = KEYS
            .iter()
            .filter_map(|k| Self::from_key(k).map(|a| (k.to_string(), a)))
            .collect();

        for variant in DesignVariant::ALL {
            keys.push((variant.index().to_string(), Self::Select(variant)));
        }

        keys
    }
}

/// The switcher as seen by one page render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VariantSwitcher {
    pub current: DesignVariant,
    pub modal_open: bool,
}

impl VariantSwitcher {
    pub fn new(current: DesignVariant) -> Self {
        Self {
            current,
            modal_open: false,
        }
    }

    pub fn with_modal_open(mut self, open: bool) -> Self {
        self.modal_open = open;
        self
    }

    /// Apply an action. Returns true if the selected variant changed.
    ///
    /// Any variant change also closes the modal.
    pub fn apply(&mut self, action: SwitcherAction) -> bool {
        let before = self.current;
        match action {
            SwitcherAction::Next => self.current = self.current.next(),
            SwitcherAction::Prev => self.current = self.current.prev(),
            SwitcherAction::Select(v) => self.current = v,
            SwitcherAction::ToggleModal => {
                self.modal_open = !self.modal_open;
                return false;
            }
            SwitcherAction::CloseModal => {
                self.modal_open = false;
                return false;
            }
        }
        self.modal_open = false;
        before != self.current
    }
}

/// Pull the variant out of a raw `Cookie` header value.
pub fn variant_from_cookie_header(header: &str) -> Option<DesignVariant> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == VARIANT_COOKIE)
        .and_then(|(_, value)| DesignVariant::from_slug(value))
}

/// `Set-Cookie` value for a selected variant. No `Max-Age`: it lasts for
/// the browser session only.
pub fn variant_cookie(variant: DesignVariant) -> String {
    format!("{}={}; Path=/; SameSite=Lax", VARIANT_COOKIE, variant.slug())
}
