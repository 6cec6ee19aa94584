use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C always quits
    GoHome,
    GoFavorites,
    GoSettings,
    NextScreen, // Tab cycles screens
    Refresh,    // r: new verse (the mobile app's shake maps here too)
    ToggleFavorite,
    Share,
    WordLookup, // w: open/close the definition overlay
    Delete,     // d: delete selected favorite
    CursorUp,
    CursorDown,
    Left,
    Right,
    Activate, // Enter/Space: toggle or cycle the selected setting
    Escape,
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap_or(false) {
        match event::read() {
            Ok(Event::Key(key_event)) => {
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                    (_, KeyCode::Char('1')) => Some(TuiEvent::GoHome),
                    (_, KeyCode::Char('2')) => Some(TuiEvent::GoFavorites),
                    (_, KeyCode::Char('3')) => Some(TuiEvent::GoSettings),
                    (_, KeyCode::Tab) => Some(TuiEvent::NextScreen),
                    (_, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
                    (_, KeyCode::Char('f')) => Some(TuiEvent::ToggleFavorite),
                    (_, KeyCode::Char('y')) => Some(TuiEvent::Share),
                    (_, KeyCode::Char('w')) => Some(TuiEvent::WordLookup),
                    (_, KeyCode::Char('d')) => Some(TuiEvent::Delete),
                    (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::Left | KeyCode::Char('h')) => Some(TuiEvent::Left),
                    (_, KeyCode::Right | KeyCode::Char('l')) => Some(TuiEvent::Right),
                    (_, KeyCode::Enter | KeyCode::Char(' ')) => Some(TuiEvent::Activate),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    _ => None,
                }
            }
            Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
