use crate::core::lexicon;
use crate::core::state::{App, Screen};
use crate::tui::{SETTINGS_ROWS, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [header_area, main_area, status_area] = layout.areas(frame.area());

    let accent = theme_color(app);

    draw_header(frame, header_area, app, accent);

    match app.screen {
        Screen::Home => draw_home(frame, main_area, app, accent, spinner_frame),
        Screen::Favorites => draw_favorites(frame, main_area, app, tui, accent),
        Screen::Settings => draw_settings(frame, main_area, app, tui, accent),
    }

    draw_status_bar(frame, status_area, app);

    if tui.word_overlay.is_some() {
        draw_word_overlay(frame, frame.area(), app, tui, accent);
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(Span::styled(
        app.status_message.as_str(),
        Style::default().add_modifier(Modifier::DIM),
    ));
    frame.render_widget(line, area);
}

fn theme_color(app: &App) -> Color {
    let (r, g, b) = app.settings.theme.rgb();
    Color::Rgb(r, g, b)
}

// ============================================================================
// Header
// ============================================================================

fn draw_header(frame: &mut Frame, area: Rect, app: &App, accent: Color) {
    let tabs = [Screen::Home, Screen::Favorites, Screen::Settings]
        .iter()
        .map(|screen| {
            let style = if *screen == app.screen {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            Span::styled(format!(" {} ", screen.label()), style)
        });

    let mut spans = vec![Span::styled(
        "Lumina",
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw(" │"));
    spans.extend(tabs);
    spans.push(Span::raw("│ "));
    // Streak badge, always visible
    spans.push(Span::styled(
        format!("🔥 {} day streak", app.streak),
        Style::default().fg(Color::Yellow),
    ));

    frame.render_widget(Line::from(spans), area);
}

// ============================================================================
// Home
// ============================================================================

fn draw_home(frame: &mut Frame, area: Rect, app: &App, accent: Color, spinner_frame: usize) {
    let block = Block::bordered()
        .title(" Verse of the Moment ")
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.is_loading {
        let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        let loading = Paragraph::new(format!("{spinner} Fetching a verse..."))
            .alignment(Alignment::Center);
        frame.render_widget(loading, centered_line(inner));
        return;
    }

    if let Some(error_msg) = &app.error {
        draw_error_view(frame, inner, error_msg);
        return;
    }

    let Some(verse) = &app.verse else {
        let empty = Paragraph::new("Press r for a verse").alignment(Alignment::Center);
        frame.render_widget(empty, centered_line(inner));
        return;
    };

    let wrap_width = inner.width.saturating_sub(4).max(20) as usize;
    let mut lines: Vec<Line> = vec![Line::default()];
    for wrapped in textwrap::wrap(&verse.text, wrap_width) {
        lines.push(Line::from(format!("“{}”", wrapped)).alignment(Alignment::Center));
    }
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            format!("— {}", verse.reference),
            Style::default().fg(accent).add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::default());

    let favorite_marker = if app.current_is_favorite() {
        Span::styled("♥ favorited", Style::default().fg(Color::Red))
    } else {
        Span::styled("♡ f to favorite", Style::default().add_modifier(Modifier::DIM))
    };
    lines.push(Line::from(favorite_marker).alignment(Alignment::Center));

    if app.settings.word_definitions
        && !lexicon::words_with_definitions(&verse.text).is_empty()
    {
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "w to explore key words",
                Style::default().add_modifier(Modifier::DIM),
            ))
            .alignment(Alignment::Center),
        );
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Could not load a verse",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(error_msg.to_string()).alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            "Press r to retry",
            Style::default().add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn centered_line(area: Rect) -> Rect {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Min(0), Length(1), Min(0)]);
    let [_, middle, _] = layout.areas(area);
    middle
}

// ============================================================================
// Favorites
// ============================================================================

fn draw_favorites(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState, accent: Color) {
    let block = Block::bordered()
        .title(format!(" Favorites ({}) ", app.favorites.len()))
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.favorites.is_empty() {
        let empty = Paragraph::new("No favorites yet. Press f on a verse you love.")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(empty, centered_line(inner));
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, saved) in app.favorites.verses.iter().enumerate() {
        let selected = i == tui.favorites_index;
        let marker = if selected { "▸ " } else { "  " };
        let style = if selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, saved.reference),
            style,
        )));
        if selected {
            let wrap_width = inner.width.saturating_sub(6).max(20) as usize;
            for wrapped in textwrap::wrap(&saved.text, wrap_width) {
                lines.push(Line::from(Span::styled(
                    format!("    {}", wrapped),
                    Style::default().add_modifier(Modifier::DIM),
                )));
            }
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  ↑/↓ select · d delete",
        Style::default().add_modifier(Modifier::DIM),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Settings
// ============================================================================

fn draw_settings(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState, accent: Color) {
    let block = Block::bordered()
        .title(" Settings ")
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let s = &app.settings;
    let rows: [(&str, String); SETTINGS_ROWS] = [
        ("Translation", s.translation.label().to_string()),
        ("Theme", format!("{} ({})", s.theme.label(), s.theme.hex())),
        ("Word definitions", on_off(s.word_definitions)),
        ("Daily reminder", on_off(s.reminder_enabled)),
        ("Reminder time", s.reminder_time.to_string()),
        ("Background music", on_off(s.music_enabled)),
        ("Track", s.music_track.label().to_string()),
    ];

    let mut lines: Vec<Line> = vec![Line::default()];
    for (i, (name, value)) in rows.iter().enumerate() {
        let selected = i == tui.settings_index;
        let marker = if selected { "▸ " } else { "  " };
        let name_style = if selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<18}", marker, name), name_style),
            Span::raw(value.clone()),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  ↑/↓ select · Enter/←/→ change",
        Style::default().add_modifier(Modifier::DIM),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn on_off(value: bool) -> String {
    if value { "On".to_string() } else { "Off".to_string() }
}

// ============================================================================
// Word definition overlay
// ============================================================================

fn draw_word_overlay(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState, accent: Color) {
    let Some(selected) = tui.word_overlay else {
        return;
    };
    let Some(verse) = &app.verse else {
        return;
    };
    let definitions = lexicon::words_with_definitions(&verse.text);
    if definitions.is_empty() {
        return;
    }
    let selected = selected.min(definitions.len() - 1);
    let def = definitions[selected];

    let popup = popup_area(area, 60, 14);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(format!(" Key Words ({}/{}) ", selected + 1, definitions.len()))
        .border_style(Style::default().fg(accent));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let wrap_width = inner.width.saturating_sub(2).max(20) as usize;
    let mut lines: Vec<Line> = Vec::new();

    // Word chips across the top
    let chips: Vec<Span> = definitions
        .iter()
        .enumerate()
        .flat_map(|(i, d)| {
            let style = if i == selected {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            [Span::styled(d.word, style), Span::raw("  ")]
        })
        .collect();
    lines.push(Line::from(chips));
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::styled(def.word, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("  {} ({})", def.original, def.transliteration)),
    ]));
    lines.push(Line::from(Span::styled(
        format!("Strong's {}", def.strongs_number),
        Style::default().add_modifier(Modifier::DIM),
    )));
    lines.push(Line::default());
    for wrapped in textwrap::wrap(def.definition, wrap_width) {
        lines.push(Line::from(wrapped.to_string()));
    }
    if let Some(etymology) = def.etymology {
        lines.push(Line::default());
        for wrapped in textwrap::wrap(etymology, wrap_width) {
            lines.push(Line::from(Span::styled(
                wrapped.to_string(),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "←/→ word · Esc close",
        Style::default().add_modifier(Modifier::DIM),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// A centered popup with a fixed percentage width and fixed height.
fn popup_area(area: Rect, percent_x: u16, height: u16) -> Rect {
    use Constraint::{Fill, Length, Percentage};
    let [_, middle, _] =
        Layout::vertical([Fill(1), Length(height), Fill(1)]).areas(area);
    let [_, center, _] =
        Layout::horizontal([Fill(1), Percentage(percent_x), Fill(1)]).areas(middle);
    center
}
