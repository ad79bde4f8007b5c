//! Shared UI crate for Tourstats. Data model, selection logic and views live here;
//! the platform crates only launch them.

pub mod core;
pub mod i18n;
pub mod stats;
pub mod views;

pub mod components {
    // Localized application header with locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

use dioxus::prelude::*;

/// Shared theme stylesheet; desktop inlines the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
