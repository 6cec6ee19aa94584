//! # Background Music
//!
//! Track ids are opaque identifiers the host maps to bundled audio assets.
//! Playback itself sits behind [`MusicPlayer`] so the core never touches an
//! audio device; a player failure disables the feature without crashing.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

/// The bundled track identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackId {
    #[default]
    Sp1,
    Swl1,
    Zs1,
}

impl TrackId {
    pub fn id(self) -> &'static str {
        match self {
            TrackId::Sp1 => "sp1",
            TrackId::Swl1 => "swl1",
            TrackId::Zs1 => "zs1",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrackId::Sp1 => "Spiritual Piano",
            TrackId::Swl1 => "Soft Worship",
            TrackId::Zs1 => "Zen Strings",
        }
    }

    /// Cycles to the next track (wraps around).
    pub fn next(self) -> TrackId {
        match self {
            TrackId::Sp1 => TrackId::Swl1,
            TrackId::Swl1 => TrackId::Zs1,
            TrackId::Zs1 => TrackId::Sp1,
        }
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug)]
pub struct PlaybackError(pub String);

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "playback error: {}", self.0)
    }
}

impl std::error::Error for PlaybackError {}

/// Host-provided audio backend. Looping and volume are the player's concern.
pub trait MusicPlayer: Send {
    fn play(&mut self, track: TrackId) -> Result<(), PlaybackError>;
    fn stop(&mut self);
}

/// A player that only logs. Used where no audio backend is wired in; the
/// toggle and track selection still persist, so a real backend picks them up.
#[derive(Default)]
pub struct LogOnlyPlayer;

impl MusicPlayer for LogOnlyPlayer {
    fn play(&mut self, track: TrackId) -> Result<(), PlaybackError> {
        info!("Music playback requested: {} ({})", track.label(), track);
        Ok(())
    }

    fn stop(&mut self) {
        info!("Music playback stopped");
    }
}
