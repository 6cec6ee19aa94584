//! # Application State
//!
//! Core business state for Lumina. This module contains domain logic only -
//! no TUI-specific types. Presentation state (list cursors, overlay
//! selection) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen            // 3-way screen switch
//! ├── verse: Option<Verse>      // currently displayed verse
//! ├── is_loading: bool          // a fetch is in flight
//! ├── error: Option<String>     // fetch failure, shown with retry hint
//! ├── fetch_generation: u64     // stale-result discard (last-write-wins)
//! ├── favorites: Favorites      // saved verses, newest first
//! ├── streak: u32               // consecutive-day visits, incl. today
//! ├── settings: Settings        // resolved user preferences
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::Settings;
use crate::core::favorites::Favorites;
use crate::fetch::Verse;

/// The three screens. There is no navigation stack; exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Favorites,
    Settings,
}

impl Screen {
    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Favorites => "Favorites",
            Screen::Settings => "Settings",
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub verse: Option<Verse>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Incremented on every fetch request. Results carrying an older
    /// generation are discarded, so the last write wins at the host.
    pub fetch_generation: u64,
    pub favorites: Favorites,
    pub streak: u32,
    pub settings: Settings,
    pub status_message: String,
}

impl App {
    pub fn new(settings: Settings, favorites: Favorites, streak: u32) -> Self {
        Self {
            screen: Screen::Home,
            verse: None,
            is_loading: false,
            error: None,
            fetch_generation: 0,
            favorites,
            streak,
            settings,
            status_message: String::from("Welcome to Lumina"),
        }
    }

    /// True when the displayed verse is currently saved as a favorite.
    pub fn current_is_favorite(&self) -> bool {
        self.verse
            .as_ref()
            .map(|v| self.favorites.contains(v))
            .unwrap_or(false)
    }
}

/// Share formatting for the current verse.
pub fn share_text(verse: &Verse) -> String {
    format!("\"{}\"\n\n— {}\n\n(from Lumina)", verse.text, verse.reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.screen, Screen::Home);
        assert!(app.verse.is_none());
        assert!(!app.is_loading);
        assert_eq!(app.fetch_generation, 0);
        assert_eq!(app.status_message, "Welcome to Lumina");
    }

    #[test]
    fn test_share_text_format() {
        let verse = Verse {
            text: "Jesus wept.".to_string(),
            reference: "John 11:35".to_string(),
        };
        assert_eq!(
            share_text(&verse),
            "\"Jesus wept.\"\n\n— John 11:35\n\n(from Lumina)"
        );
    }

    #[test]
    fn test_current_is_favorite_without_verse() {
        let app = test_app();
        assert!(!app.current_is_favorite());
    }
}
