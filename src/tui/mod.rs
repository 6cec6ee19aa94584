//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the three
//! screens, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! never imports from here, so the same reducer could drive a different
//! front end.
//!
//! ## Redraw strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 250ms per poll and redraws after any event,
//!   background action, or resize.

mod event;
mod ui;

use std::path::PathBuf;
use std::sync::{Arc, mpsc};

use chrono::Local;
use log::{info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::config::{self, Settings};
use crate::core::favorites;
use crate::core::lexicon;
use crate::core::playback::{LogOnlyPlayer, MusicPlayer};
use crate::core::reminder::next_occurrence;
use crate::core::state::{App, Screen};
use crate::core::streak::{self, StreakRecord, update_streak};
use crate::fetch::{BibleApiSource, LabsBibleSource, VerseFetcher};
use crate::tui::event::{TuiEvent, poll_event_timeout};
use crate::tui::ui::draw_ui;

/// Number of rows on the Settings screen.
pub const SETTINGS_ROWS: usize = 7;

/// Presentation-only state: list cursors and the word overlay. Kept out of
/// core::App so the reducer stays UI-agnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct TuiState {
    pub favorites_index: usize,
    pub settings_index: usize,
    /// `Some(i)` when the definition popup is open, selecting word `i`.
    pub word_overlay: Option<usize>,
}

/// Run the TUI event loop until the user quits.
pub async fn run(settings: Settings) -> std::io::Result<()> {
    let data_dir = config::data_dir().unwrap_or_else(|| PathBuf::from("."));

    let favorites = favorites::load(&data_dir);

    // Streak bookkeeping happens once, at app open
    let record = streak::load_record(&data_dir);
    let streak = update_streak(
        Local::now().date_naive(),
        record.last_visit,
        record.current_streak,
    );
    if streak.should_persist {
        let record = StreakRecord {
            last_visit: Some(streak.last_visit),
            current_streak: streak.streak,
        };
        if let Err(e) = streak::save_record(&data_dir, &record) {
            warn!("Failed to save streak: {}", e);
        }
    }
    info!("Current streak: {} day(s)", streak.streak);

    let mut app = App::new(settings, favorites, streak.streak);
    let mut tui = TuiState::default();
    let mut player = LogOnlyPlayer;

    let fetcher = Arc::new(VerseFetcher::new(
        Box::new(BibleApiSource::new(None)),
        Box::new(LabsBibleSource::new(None)),
    ));

    // Background tasks send their results here as actions
    let (action_tx, action_rx) = mpsc::channel::<Action>();

    let mut terminal = ratatui::init();

    let mut next_reminder = app
        .settings
        .reminder_enabled
        .then(|| next_occurrence(Local::now().naive_local(), app.settings.reminder_time));
    let mut spinner_frame: usize = 0;
    let mut quit = false;

    // Fetch the first verse immediately
    process_action(
        Action::RequestFetch,
        &mut app,
        &mut tui,
        &mut player,
        &data_dir,
        &fetcher,
        &action_tx,
        &mut quit,
    );

    while !quit {
        if app.is_loading {
            spinner_frame = spinner_frame.wrapping_add(1);
        }
        terminal.draw(|frame| draw_ui(frame, &app, &tui, spinner_frame))?;

        // Drain background actions first so results render promptly
        while let Ok(action) = action_rx.try_recv() {
            process_action(
                action,
                &mut app,
                &mut tui,
                &mut player,
                &data_dir,
                &fetcher,
                &action_tx,
                &mut quit,
            );
        }

        if let Some(at) = next_reminder
            && Local::now().naive_local() >= at
        {
            app.status_message = String::from("Time for your daily verse 🔔");
            next_reminder = Some(next_occurrence(Local::now().naive_local(), app.settings.reminder_time));
        }

        let timeout = if app.is_loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(250)
        };
        if let Some(tui_event) = poll_event_timeout(timeout)
            && let Some(action) = translate_event(tui_event, &app, &mut tui)
        {
            let refetch = action == Action::CycleTranslation;
            process_action(
                action,
                &mut app,
                &mut tui,
                &mut player,
                &data_dir,
                &fetcher,
                &action_tx,
                &mut quit,
            );
            // A translation change refreshes the verse in the new translation
            if refetch {
                process_action(
                    Action::RequestFetch,
                    &mut app,
                    &mut tui,
                    &mut player,
                    &data_dir,
                    &fetcher,
                    &action_tx,
                    &mut quit,
                );
            }
            // Reminder toggles and time shifts reschedule the next fire
            next_reminder = app.settings.reminder_enabled.then(|| {
                next_occurrence(Local::now().naive_local(), app.settings.reminder_time)
            });
        }
    }

    ratatui::restore();
    Ok(())
}

// ============================================================================
// Event translation
// ============================================================================

/// Map a key event to an action, given the current screen and overlay state.
/// Cursor movement and overlay toggling mutate `tui` directly and return
/// `None`; they are presentation, not domain changes.
fn translate_event(tui_event: TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    // The overlay captures navigation keys while open
    if let Some(selected) = tui.word_overlay {
        match tui_event {
            TuiEvent::Escape | TuiEvent::WordLookup => {
                tui.word_overlay = None;
                return None;
            }
            TuiEvent::Left => {
                tui.word_overlay = Some(selected.saturating_sub(1));
                return None;
            }
            TuiEvent::Right => {
                let count = overlay_word_count(app);
                if count > 0 {
                    tui.word_overlay = Some((selected + 1).min(count - 1));
                }
                return None;
            }
            TuiEvent::Quit | TuiEvent::ForceQuit => return Some(Action::Quit),
            _ => return None,
        }
    }

    match tui_event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::GoHome => Some(Action::SwitchScreen(Screen::Home)),
        TuiEvent::GoFavorites => Some(Action::SwitchScreen(Screen::Favorites)),
        TuiEvent::GoSettings => Some(Action::SwitchScreen(Screen::Settings)),
        TuiEvent::NextScreen => Some(Action::SwitchScreen(match app.screen {
            Screen::Home => Screen::Favorites,
            Screen::Favorites => Screen::Settings,
            Screen::Settings => Screen::Home,
        })),
        TuiEvent::Refresh => Some(Action::RequestFetch),
        TuiEvent::ToggleFavorite => Some(Action::ToggleFavorite),
        TuiEvent::Share => Some(Action::Share),
        TuiEvent::WordLookup => {
            if app.settings.word_definitions && overlay_word_count(app) > 0 {
                tui.word_overlay = Some(0);
            }
            None
        }
        TuiEvent::Delete => {
            if app.screen == Screen::Favorites {
                let id = app.favorites.verses.get(tui.favorites_index)?.id.clone();
                tui.favorites_index = tui.favorites_index.saturating_sub(1);
                return Some(Action::DeleteFavorite(id));
            }
            None
        }
        TuiEvent::CursorUp => {
            match app.screen {
                Screen::Favorites => {
                    tui.favorites_index = tui.favorites_index.saturating_sub(1);
                }
                Screen::Settings => {
                    tui.settings_index = tui.settings_index.saturating_sub(1);
                }
                Screen::Home => {}
            }
            None
        }
        TuiEvent::CursorDown => {
            match app.screen {
                Screen::Favorites => {
                    if tui.favorites_index + 1 < app.favorites.len() {
                        tui.favorites_index += 1;
                    }
                }
                Screen::Settings => {
                    if tui.settings_index + 1 < SETTINGS_ROWS {
                        tui.settings_index += 1;
                    }
                }
                Screen::Home => {}
            }
            None
        }
        TuiEvent::Activate | TuiEvent::Right => {
            if app.screen == Screen::Settings {
                settings_row_action(tui.settings_index, 1)
            } else {
                None
            }
        }
        TuiEvent::Left => {
            if app.screen == Screen::Settings {
                settings_row_action(tui.settings_index, -1)
            } else {
                None
            }
        }
        TuiEvent::Escape | TuiEvent::Resize => None,
    }
}

fn overlay_word_count(app: &App) -> usize {
    app.verse
        .as_ref()
        .map(|v| lexicon::words_with_definitions(&v.text).len())
        .unwrap_or(0)
}

/// The action a Settings row produces when activated. `direction` only
/// matters for the reminder-time row, which shifts in 15 minute steps.
fn settings_row_action(row: usize, direction: i32) -> Option<Action> {
    match row {
        0 => Some(Action::CycleTranslation),
        1 => Some(Action::CycleTheme),
        2 => Some(Action::ToggleWordDefinitions),
        3 => Some(Action::ToggleReminder),
        4 => Some(Action::ShiftReminderTime(15 * direction)),
        5 => Some(Action::ToggleMusic),
        6 => Some(Action::CycleTrack),
        _ => None,
    }
}

// ============================================================================
// Action processing and effects
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn process_action(
    action: Action,
    app: &mut App,
    tui: &mut TuiState,
    player: &mut LogOnlyPlayer,
    data_dir: &std::path::Path,
    fetcher: &Arc<VerseFetcher>,
    action_tx: &mpsc::Sender<Action>,
    quit: &mut bool,
) {
    let effect = update(app, action);
    match effect {
        Effect::None => {}

        Effect::Quit => *quit = true,

        Effect::SpawnFetch { generation } => {
            let fetcher = Arc::clone(fetcher);
            let translation = app.settings.translation;
            let tx = action_tx.clone();
            tokio::spawn(async move {
                let result = fetcher
                    .fetch_verse(translation)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::FetchCompleted { generation, result });
            });
        }

        Effect::SaveFavorites => {
            // Keep the cursor on a valid row after a delete
            if !app.favorites.is_empty() && tui.favorites_index >= app.favorites.len() {
                tui.favorites_index = app.favorites.len() - 1;
            }
            if let Err(e) = favorites::save(data_dir, &app.favorites) {
                warn!("Failed to save favorites: {}", e);
                app.status_message = String::from("Could not save favorites");
            }
        }

        Effect::SaveSettings => config::save_settings(&app.settings),

        Effect::ApplyMusic => {
            if app.settings.music_enabled {
                if let Err(e) = player.play(app.settings.music_track) {
                    warn!("Playback failed: {}", e);
                    process_action(
                        Action::MusicUnavailable,
                        app,
                        tui,
                        player,
                        data_dir,
                        fetcher,
                        action_tx,
                        quit,
                    );
                    return;
                }
            } else {
                player.stop();
            }
            config::save_settings(&app.settings);
        }

        Effect::Share(text) => {
            let path = data_dir.join("share.txt");
            match std::fs::write(&path, text) {
                Ok(()) => {
                    app.status_message = format!("Share text written to {}", path.display());
                }
                Err(e) => {
                    warn!("Failed to write share text: {}", e);
                    app.status_message = String::from("Share failed");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::Verse;
    use crate::test_support::test_app;

    #[test]
    fn test_tab_cycles_screens() {
        let app = test_app();
        let mut tui = TuiState::default();
        assert_eq!(
            translate_event(TuiEvent::NextScreen, &app, &mut tui),
            Some(Action::SwitchScreen(Screen::Favorites))
        );
    }

    #[test]
    fn test_word_lookup_opens_overlay_only_with_known_words() {
        let mut app = test_app();
        let mut tui = TuiState::default();

        app.verse = Some(Verse {
            text: "nothing matches here".to_string(),
            reference: "X 1:1".to_string(),
        });
        translate_event(TuiEvent::WordLookup, &app, &mut tui);
        assert!(tui.word_overlay.is_none());

        app.verse = Some(Verse {
            text: "The grace of God".to_string(),
            reference: "X 1:2".to_string(),
        });
        translate_event(TuiEvent::WordLookup, &app, &mut tui);
        assert_eq!(tui.word_overlay, Some(0));
    }

    #[test]
    fn test_word_lookup_respects_setting() {
        let mut app = test_app();
        app.settings.word_definitions = false;
        app.verse = Some(Verse {
            text: "The grace of God".to_string(),
            reference: "X 1:1".to_string(),
        });
        let mut tui = TuiState::default();
        translate_event(TuiEvent::WordLookup, &app, &mut tui);
        assert!(tui.word_overlay.is_none());
    }

    #[test]
    fn test_overlay_captures_navigation() {
        let mut app = test_app();
        app.verse = Some(Verse {
            text: "The grace of God and the love of the Lord".to_string(),
            reference: "X 1:1".to_string(),
        });
        let mut tui = TuiState {
            word_overlay: Some(0),
            ..Default::default()
        };

        assert_eq!(translate_event(TuiEvent::Right, &app, &mut tui), None);
        assert_eq!(tui.word_overlay, Some(1));
        assert_eq!(translate_event(TuiEvent::Left, &app, &mut tui), None);
        assert_eq!(tui.word_overlay, Some(0));
        assert_eq!(translate_event(TuiEvent::Escape, &app, &mut tui), None);
        assert!(tui.word_overlay.is_none());
    }

    #[test]
    fn test_delete_targets_selected_favorite() {
        let mut app = test_app();
        app.screen = Screen::Favorites;
        for (text, reference) in [("a", "A 1:1"), ("b", "B 2:2")] {
            app.verse = Some(Verse {
                text: text.to_string(),
                reference: reference.to_string(),
            });
            update(&mut app, Action::ToggleFavorite);
        }
        // Newest first: index 0 is "b"
        let mut tui = TuiState {
            favorites_index: 1,
            ..Default::default()
        };
        let expected = app.favorites.verses[1].id.clone();
        match translate_event(TuiEvent::Delete, &app, &mut tui) {
            Some(Action::DeleteFavorite(id)) => assert_eq!(id, expected),
            other => panic!("Expected DeleteFavorite, got {:?}", other),
        }
    }

    #[test]
    fn test_settings_rows_map_to_actions() {
        assert_eq!(settings_row_action(0, 1), Some(Action::CycleTranslation));
        assert_eq!(settings_row_action(4, -1), Some(Action::ShiftReminderTime(-15)));
        assert_eq!(settings_row_action(6, 1), Some(Action::CycleTrack));
        assert_eq!(settings_row_action(SETTINGS_ROWS, 1), None);
    }

    #[test]
    fn test_cursor_down_clamps_to_settings_rows() {
        let mut app = test_app();
        app.screen = Screen::Settings;
        let mut tui = TuiState {
            settings_index: SETTINGS_ROWS - 1,
            ..Default::default()
        };
        translate_event(TuiEvent::CursorDown, &app, &mut tui);
        assert_eq!(tui.settings_index, SETTINGS_ROWS - 1);
    }
}
