//! # Verse Fetching
//!
//! One verse per invocation: the primary source is asked first, and on any
//! failure (transport, status, parse) the secondary source gets exactly one
//! attempt. Both payload shapes normalize into a single [`Verse`].

pub mod fetcher;
pub mod source;
pub mod sources;
pub mod types;

pub use fetcher::VerseFetcher;
pub use source::VerseSource;
pub use sources::bible_api::BibleApiSource;
pub use sources::labs_bible::LabsBibleSource;
pub use types::{FetchError, PrimaryOutcome, SourceError, Translation, Verse};
