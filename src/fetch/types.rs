use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized verse, regardless of which source produced it.
/// Both fields are populated from a single successful source; a fetch
/// either yields a complete `Verse` or fails entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub text: String,
    pub reference: String,
}

/// The fixed set of translations the primary source understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Translation {
    #[default]
    Kjv,
    Web,
    Asv,
    Bbe,
}

impl Translation {
    /// The query-parameter value the primary source expects.
    pub fn id(self) -> &'static str {
        match self {
            Translation::Kjv => "kjv",
            Translation::Web => "web",
            Translation::Asv => "asv",
            Translation::Bbe => "bbe",
        }
    }

    /// Human-readable name for the settings screen.
    pub fn label(self) -> &'static str {
        match self {
            Translation::Kjv => "King James",
            Translation::Web => "World English",
            Translation::Asv => "American Standard",
            Translation::Bbe => "Basic English",
        }
    }

    /// Cycles to the next translation (wraps around).
    pub fn next(self) -> Translation {
        match self {
            Translation::Kjv => Translation::Web,
            Translation::Web => Translation::Asv,
            Translation::Asv => Translation::Bbe,
            Translation::Bbe => Translation::Kjv,
        }
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What went wrong with a single source attempt.
#[derive(Debug, Clone)]
pub enum SourceError {
    /// Transport-level failure (timeout, DNS, connection refused).
    /// Timeouts are deliberately not distinguished from other transport errors.
    Network(String),
    /// The source answered with a non-success status.
    Status(u16),
    /// The payload did not match the source's documented shape.
    Parse(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Status(code) => write!(f, "HTTP {code}"),
            SourceError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Both sources failed. Carries each cause so the message can surface the
/// more specific primary error alongside the fallback's.
#[derive(Debug, Clone)]
pub struct FetchError {
    pub primary: SourceError,
    pub fallback: SourceError,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "both verse sources failed (primary: {}; fallback: {})",
            self.primary, self.fallback
        )
    }
}

impl std::error::Error for FetchError {}

/// Outcome of the primary step of the fetch pipeline. The fallback step
/// runs only on `PrimaryFailed`.
#[derive(Debug)]
pub enum PrimaryOutcome {
    PrimaryOk(Verse),
    PrimaryFailed(SourceError),
}
