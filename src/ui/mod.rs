//! Per-visitor UI state.
//!
//! Nothing here is persisted server-side. The selected [`DesignVariant`]
//! travels in a browser-session cookie; menu and modal state come from the
//! query string on no-JS renders and are toggled client-side otherwise.

pub mod motion;
mod variant;

pub use variant::*;

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("open") => Self::Open,
            _ => Self::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}
