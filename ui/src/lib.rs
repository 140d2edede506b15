//! Shared UI crate for Folio: content, page logic and every component of the
//! portfolio page. The platform crates only launch [`views::Home`].

use dioxus::prelude::*;

pub mod components;
pub mod content;
pub mod core;
pub mod i18n;
pub mod sections;
pub mod views;

/// Unified theme stylesheet. Web links it as an asset; desktop inlines the
/// same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
#[path = "tests/i18n_completeness.rs"]
mod i18n_completeness;
