//! Site content.
//!
//! # Core Concepts
//!
//! All copy lives in `'static` tables so that every page is a pure function
//! of the tables plus the visitor's UI state.
//!
//! - [`NavEntry`] / [`FooterColumn`]: the navigation shell.
//! - [`FeatureCard`], [`WorkflowStep`], [`Author`]: landing-page sections.
//! - [`ManualSection`] / [`ManualTopic`]: the manual, one sub-page per section.

mod landing;
mod manual;
mod nav;

pub use landing::*;
pub use manual::*;
pub use nav::*;

/// Product name used in titles and copy.
pub const PRODUCT_NAME: &str = "PIVkit";

pub const SITE_TAGLINE: &str = "Particle Image Velocimetry, from raw frames to vector fields";

pub const SITE_DESCRIPTION: &str = "PIVkit is an open analysis package for Particle Image \
Velocimetry. This site hosts the project overview and the user manual.";
