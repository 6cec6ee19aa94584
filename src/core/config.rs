//! # Configuration
//!
//! Settings live at `~/.lumina/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Override hierarchy: defaults → config file → env vars → CLI flags.
//!
//! Unlike read-only config schemes, settings changed from the Settings
//! screen are written back to the same file.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::playback::TrackId;
use crate::core::reminder::ReminderTime;
use crate::fetch::Translation;

// ============================================================================
// Theme
// ============================================================================

/// The fixed eight-color palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Teal,
    Ocean,
    Purple,
    Forest,
    Sunset,
    Navy,
    Plum,
    Sage,
}

impl Theme {
    pub fn hex(self) -> &'static str {
        match self {
            Theme::Teal => "#4a7c7e",
            Theme::Ocean => "#2c3e50",
            Theme::Purple => "#6c5ce7",
            Theme::Forest => "#27ae60",
            Theme::Sunset => "#e17055",
            Theme::Navy => "#34495e",
            Theme::Plum => "#8e44ad",
            Theme::Sage => "#7d8a7f",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Teal => "Teal",
            Theme::Ocean => "Ocean",
            Theme::Purple => "Purple",
            Theme::Forest => "Forest",
            Theme::Sunset => "Sunset",
            Theme::Navy => "Navy",
            Theme::Plum => "Plum",
            Theme::Sage => "Sage",
        }
    }

    /// Cycles to the next palette color (wraps around).
    pub fn next(self) -> Theme {
        match self {
            Theme::Teal => Theme::Ocean,
            Theme::Ocean => Theme::Purple,
            Theme::Purple => Theme::Forest,
            Theme::Forest => Theme::Sunset,
            Theme::Sunset => Theme::Navy,
            Theme::Navy => Theme::Plum,
            Theme::Plum => Theme::Sage,
            Theme::Sage => Theme::Teal,
        }
    }

    /// The hex value split into RGB components.
    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let parse = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
        (parse(&hex[0..2]), parse(&hex[2..4]), parse(&hex[4..6]))
    }
}

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LuminaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub reminder: ReminderConfig,
    #[serde(default)]
    pub music: MusicConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub translation: Option<Translation>,
    pub theme: Option<Theme>,
    pub word_definitions: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReminderConfig {
    pub enabled: Option<bool>,
    /// Wall-clock time as "HH:MM".
    pub time: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MusicConfig {
    pub enabled: Option<bool>,
    pub track: Option<TrackId>,
}

// ============================================================================
// Resolved Settings (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub translation: Translation,
    pub theme: Theme,
    pub word_definitions: bool,
    pub reminder_enabled: bool,
    pub reminder_time: ReminderTime,
    pub music_enabled: bool,
    pub music_track: TrackId,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            translation: Translation::default(),
            theme: Theme::default(),
            word_definitions: true,
            reminder_enabled: false,
            reminder_time: ReminderTime::default(),
            music_enabled: false,
            music_track: TrackId::default(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Paths
// ============================================================================

/// Returns `~/.lumina`, where config and data files live.
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lumina"))
}

/// Returns the path to `~/.lumina/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("config.toml"))
}

// ============================================================================
// Loading
// ============================================================================

/// Load config from `~/.lumina/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LuminaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LuminaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LuminaConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LuminaConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: LuminaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Lumina Configuration
# All settings are optional; defaults are used for anything not specified.
# Settings changed from the in-app Settings screen are saved back here.

# [general]
# translation = "kjv"          # "kjv", "web", "asv", "bbe"
# theme = "teal"               # "teal", "ocean", "purple", "forest",
#                              # "sunset", "navy", "plum", "sage"
# word_definitions = true      # Key biblical terms with Hebrew/Greek meanings

# [reminder]
# enabled = false
# time = "08:00"               # Daily verse reminder, 24h clock

# [music]
# enabled = false
# track = "sp1"                # "sp1" (Spiritual Piano), "swl1" (Soft Worship),
#                              # "zs1" (Zen Strings)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve final settings by collapsing: defaults → config file → env vars →
/// CLI. `cli_translation` comes from the `--translation` flag (None = not
/// specified).
pub fn resolve(config: &LuminaConfig, cli_translation: Option<Translation>) -> Settings {
    let defaults = Settings::default();

    // Translation: CLI → env → config → default
    let translation = cli_translation
        .or_else(|| {
            std::env::var("LUMINA_TRANSLATION")
                .ok()
                .and_then(|v| parse_translation(&v))
        })
        .or(config.general.translation)
        .unwrap_or(defaults.translation);

    // Reminder time: malformed strings fall back to the default rather than
    // failing resolution
    let reminder_time = config
        .reminder
        .time
        .as_deref()
        .and_then(|s| match s.parse::<ReminderTime>() {
            Ok(t) => Some(t),
            Err(e) => {
                warn!("Ignoring {e}");
                None
            }
        })
        .unwrap_or(defaults.reminder_time);

    Settings {
        translation,
        theme: config.general.theme.unwrap_or(defaults.theme),
        word_definitions: config
            .general
            .word_definitions
            .unwrap_or(defaults.word_definitions),
        reminder_enabled: config.reminder.enabled.unwrap_or(defaults.reminder_enabled),
        reminder_time,
        music_enabled: config.music.enabled.unwrap_or(defaults.music_enabled),
        music_track: config.music.track.unwrap_or(defaults.music_track),
    }
}

fn parse_translation(value: &str) -> Option<Translation> {
    match value.to_lowercase().as_str() {
        "kjv" => Some(Translation::Kjv),
        "web" => Some(Translation::Web),
        "asv" => Some(Translation::Asv),
        "bbe" => Some(Translation::Bbe),
        other => {
            warn!("Unknown translation '{}', ignoring", other);
            None
        }
    }
}

// ============================================================================
// Write-back
// ============================================================================

/// Persists the current settings to the config file. Every field is written
/// explicitly so the file always reflects the full state of the Settings
/// screen. Failures are logged; settings keep working in-memory.
pub fn save_settings(settings: &Settings) {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, settings not saved");
        return;
    };

    let config = LuminaConfig {
        general: GeneralConfig {
            translation: Some(settings.translation),
            theme: Some(settings.theme),
            word_definitions: Some(settings.word_definitions),
        },
        reminder: ReminderConfig {
            enabled: Some(settings.reminder_enabled),
            time: Some(settings.reminder_time.to_string()),
        },
        music: MusicConfig {
            enabled: Some(settings.music_enabled),
            track: Some(settings.music_track),
        },
    };

    let contents = match toml::to_string(&config) {
        Ok(s) => s,
        Err(e) => {
            warn!("Failed to serialize settings: {}", e);
            return;
        }
    };

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }

    let tmp_path = path.with_extension("toml.tmp");
    let result = fs::write(&tmp_path, contents).and_then(|_| fs::rename(&tmp_path, &path));
    match result {
        Ok(()) => debug!("Settings saved to {}", path.display()),
        Err(e) => warn!("Failed to save settings: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = LuminaConfig::default();
        assert!(config.general.translation.is_none());
        assert!(config.reminder.time.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = LuminaConfig::default();
        let settings = resolve(&config, None);
        assert_eq!(settings.translation, Translation::Kjv);
        assert_eq!(settings.theme, Theme::Teal);
        assert!(settings.word_definitions);
        assert!(!settings.reminder_enabled);
        assert_eq!(settings.reminder_time.to_string(), "08:00");
        assert!(!settings.music_enabled);
        assert_eq!(settings.music_track, TrackId::Sp1);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = LuminaConfig {
            general: GeneralConfig {
                translation: Some(Translation::Web),
                theme: Some(Theme::Plum),
                word_definitions: Some(false),
            },
            reminder: ReminderConfig {
                enabled: Some(true),
                time: Some("21:30".to_string()),
            },
            music: MusicConfig {
                enabled: Some(true),
                track: Some(TrackId::Zs1),
            },
        };
        let settings = resolve(&config, None);
        assert_eq!(settings.translation, Translation::Web);
        assert_eq!(settings.theme, Theme::Plum);
        assert!(!settings.word_definitions);
        assert!(settings.reminder_enabled);
        assert_eq!(settings.reminder_time.to_string(), "21:30");
        assert!(settings.music_enabled);
        assert_eq!(settings.music_track, TrackId::Zs1);
    }

    #[test]
    fn test_resolve_cli_translation_wins() {
        let config = LuminaConfig {
            general: GeneralConfig {
                translation: Some(Translation::Web),
                ..Default::default()
            },
            ..Default::default()
        };
        let settings = resolve(&config, Some(Translation::Bbe));
        assert_eq!(settings.translation, Translation::Bbe);
    }

    #[test]
    fn test_resolve_malformed_reminder_time_falls_back() {
        let config = LuminaConfig {
            reminder: ReminderConfig {
                enabled: Some(true),
                time: Some("25:99".to_string()),
            },
            ..Default::default()
        };
        let settings = resolve(&config, None);
        assert_eq!(settings.reminder_time, ReminderTime::default());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[general]
theme = "forest"
"#;
        let config: LuminaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(Theme::Forest));
        assert!(config.general.translation.is_none());
        assert!(config.music.enabled.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
translation = "asv"
theme = "navy"
word_definitions = false

[reminder]
enabled = true
time = "07:15"

[music]
enabled = true
track = "swl1"
"#;
        let config: LuminaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.translation, Some(Translation::Asv));
        assert_eq!(config.general.theme, Some(Theme::Navy));
        assert_eq!(config.reminder.time.as_deref(), Some("07:15"));
        assert_eq!(config.music.track, Some(TrackId::Swl1));
    }

    #[test]
    fn test_theme_rgb_values() {
        assert_eq!(Theme::Teal.rgb(), (0x4a, 0x7c, 0x7e));
        assert_eq!(Theme::Sunset.rgb(), (0xe1, 0x70, 0x55));
    }

    #[test]
    fn test_theme_cycle_covers_palette() {
        let mut theme = Theme::Teal;
        let mut seen = vec![theme];
        for _ in 0..7 {
            theme = theme.next();
            assert!(!seen.contains(&theme));
            seen.push(theme);
        }
        assert_eq!(theme.next(), Theme::Teal);
    }
}
