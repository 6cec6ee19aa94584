//! # Actions
//!
//! Everything that can happen in Lumina becomes an `Action`.
//! User presses `r`? That's `Action::RequestFetch`.
//! A fetch task finishes? That's `Action::FetchCompleted { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the host must do.
//! No side effects here. I/O happens at the edges.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state
//! and the returned effect.

use log::debug;

use crate::core::state::{App, Screen, share_text};
use crate::fetch::Verse;

/// Everything that can happen in the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SwitchScreen(Screen),
    /// Startup, manual refresh, or a translation change: all the same fetch.
    RequestFetch,
    /// A background fetch finished. Stale generations are discarded.
    FetchCompleted {
        generation: u64,
        result: Result<Verse, String>,
    },
    ToggleFavorite,
    DeleteFavorite(String),
    Share,
    CycleTranslation,
    CycleTheme,
    ToggleWordDefinitions,
    ToggleReminder,
    /// Adjust the reminder time by whole minutes (wraps around midnight).
    ShiftReminderTime(i32),
    ToggleMusic,
    CycleTrack,
    /// The host's player failed; the feature disables itself.
    MusicUnavailable,
    Quit,
}

/// I/O the host must perform after an `update()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Spawn a background fetch tagged with this generation.
    SpawnFetch { generation: u64 },
    SaveFavorites,
    SaveSettings,
    /// Start or stop playback to match `settings.music_*`, then persist.
    ApplyMusic,
    /// Write the share text somewhere the user can reach it.
    Share(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::SwitchScreen(screen) => {
            app.screen = screen;
            Effect::None
        }

        Action::RequestFetch => {
            if app.is_loading {
                // The host disables refresh while a fetch is in flight
                return Effect::None;
            }
            app.is_loading = true;
            app.error = None;
            app.fetch_generation += 1;
            Effect::SpawnFetch {
                generation: app.fetch_generation,
            }
        }

        Action::FetchCompleted { generation, result } => {
            if generation != app.fetch_generation {
                debug!(
                    "Discarding stale fetch result (generation {} != {})",
                    generation, app.fetch_generation
                );
                return Effect::None;
            }
            app.is_loading = false;
            match result {
                Ok(verse) => {
                    app.status_message = verse.reference.clone();
                    app.verse = Some(verse);
                    app.error = None;
                }
                Err(message) => {
                    app.error = Some(message);
                }
            }
            Effect::None
        }

        Action::ToggleFavorite => {
            let Some(verse) = app.verse.clone() else {
                return Effect::None;
            };
            let added = app.favorites.toggle(&verse);
            app.status_message = if added {
                format!("Saved {}", verse.reference)
            } else {
                format!("Removed {}", verse.reference)
            };
            Effect::SaveFavorites
        }

        Action::DeleteFavorite(id) => {
            app.favorites.delete(&id);
            app.status_message = String::from("Favorite deleted");
            Effect::SaveFavorites
        }

        Action::Share => match app.verse.as_ref() {
            Some(verse) => Effect::Share(share_text(verse)),
            None => Effect::None,
        },

        Action::CycleTranslation => {
            app.settings.translation = app.settings.translation.next();
            app.status_message = format!(
                "Translation: {}",
                app.settings.translation.label()
            );
            Effect::SaveSettings
        }

        Action::CycleTheme => {
            app.settings.theme = app.settings.theme.next();
            app.status_message = format!("Theme: {}", app.settings.theme.label());
            Effect::SaveSettings
        }

        Action::ToggleWordDefinitions => {
            app.settings.word_definitions = !app.settings.word_definitions;
            app.status_message = if app.settings.word_definitions {
                String::from("Word definitions on")
            } else {
                String::from("Word definitions off")
            };
            Effect::SaveSettings
        }

        Action::ToggleReminder => {
            app.settings.reminder_enabled = !app.settings.reminder_enabled;
            app.status_message = if app.settings.reminder_enabled {
                format!("Daily verse reminder at {}", app.settings.reminder_time)
            } else {
                String::from("Daily reminders off")
            };
            Effect::SaveSettings
        }

        Action::ShiftReminderTime(minutes) => {
            app.settings.reminder_time = app.settings.reminder_time.shifted_by(minutes);
            app.status_message = format!("Reminder time: {}", app.settings.reminder_time);
            Effect::SaveSettings
        }

        Action::ToggleMusic => {
            app.settings.music_enabled = !app.settings.music_enabled;
            app.status_message = if app.settings.music_enabled {
                format!("Music: {}", app.settings.music_track.label())
            } else {
                String::from("Music off")
            };
            Effect::ApplyMusic
        }

        Action::CycleTrack => {
            app.settings.music_track = app.settings.music_track.next();
            app.status_message = format!("Track: {}", app.settings.music_track.label());
            Effect::ApplyMusic
        }

        Action::MusicUnavailable => {
            // Prior toggle state is not restored silently elsewhere; the
            // feature visibly disables itself, matching the degrade policy.
            app.settings.music_enabled = false;
            app.status_message = String::from("Music unavailable");
            Effect::SaveSettings
        }

        Action::Quit => Effect::Quit,
    }
}
