//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::Settings;
use crate::core::favorites::Favorites;
use crate::core::state::App;

/// Creates a test App with default settings, no favorites, and a 1-day streak.
pub fn test_app() -> App {
    App::new(Settings::default(), Favorites::default(), 1)
}
