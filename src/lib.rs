//! Website and manual server for the PIV analysis toolkit.
//!
//! Every page is rendered on the server from static content tables in
//! [`models`]. The [`api`] module wires routes and the security-header
//! middleware; [`render`] turns content into HTML; [`ui`] holds the small
//! pieces of per-visitor UI state (design variant, menu, animation timing).

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod ui;
