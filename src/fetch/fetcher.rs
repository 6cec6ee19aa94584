//! The fetch pipeline: primary source first, then exactly one fallback
//! attempt. The steps are strictly sequential: the fallback is never
//! started while the primary is in flight, and never started at all when
//! the primary succeeds. No retries, no backoff, no explicit deadline.

use log::{info, warn};

use super::source::VerseSource;
use super::types::{FetchError, PrimaryOutcome, Translation, Verse};

pub struct VerseFetcher {
    primary: Box<dyn VerseSource>,
    fallback: Box<dyn VerseSource>,
}

impl VerseFetcher {
    pub fn new(primary: Box<dyn VerseSource>, fallback: Box<dyn VerseSource>) -> Self {
        Self { primary, fallback }
    }

    /// Runs the primary step, tagging the outcome so the caller decides
    /// whether the fallback step runs.
    async fn primary_step(&self, translation: Translation) -> PrimaryOutcome {
        match self.primary.random_verse(translation).await {
            Ok(verse) => PrimaryOutcome::PrimaryOk(verse),
            Err(e) => PrimaryOutcome::PrimaryFailed(e),
        }
    }

    /// Fetches one verse: primary, then a single fallback attempt.
    ///
    /// Empty verse text from either source passes through unchanged; only
    /// transport, status, and shape problems count as failures.
    pub async fn fetch_verse(&self, translation: Translation) -> Result<Verse, FetchError> {
        let primary_err = match self.primary_step(translation).await {
            PrimaryOutcome::PrimaryOk(verse) => {
                info!(
                    "Verse from {} ({}): {}",
                    self.primary.name(),
                    translation,
                    verse.reference
                );
                return Ok(verse);
            }
            PrimaryOutcome::PrimaryFailed(e) => {
                warn!("{} failed: {}, trying {}", self.primary.name(), e, self.fallback.name());
                e
            }
        };

        match self.fallback.random_verse(translation).await {
            Ok(verse) => {
                info!("Verse from {}: {}", self.fallback.name(), verse.reference);
                Ok(verse)
            }
            Err(fallback_err) => {
                warn!("{} failed: {}", self.fallback.name(), fallback_err);
                Err(FetchError {
                    primary: primary_err,
                    fallback: fallback_err,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::fetch::types::SourceError;

    /// A scripted source: returns a fixed result and counts invocations.
    struct ScriptedSource {
        name: &'static str,
        result: Result<Verse, SourceError>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn ok(name: &'static str, text: &str, reference: &str) -> Self {
            Self {
                name,
                result: Ok(Verse {
                    text: text.to_string(),
                    reference: reference.to_string(),
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(name: &'static str, err: SourceError) -> Self {
            Self {
                name,
                result: Err(err),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl VerseSource for ScriptedSource {
        fn name(&self) -> &str {
            self.name
        }

        async fn random_verse(&self, _translation: Translation) -> Result<Verse, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let fetcher = VerseFetcher::new(
            Box::new(ScriptedSource::ok("p", "In the beginning", "Genesis 1:1")),
            Box::new(ScriptedSource::failing(
                "f",
                SourceError::Network("should not be called".to_string()),
            )),
        );
        let verse = fetcher.fetch_verse(Translation::Kjv).await.unwrap();
        assert_eq!(verse.reference, "Genesis 1:1");
    }

    #[tokio::test]
    async fn test_fallback_used_when_primary_fails() {
        let fetcher = VerseFetcher::new(
            Box::new(ScriptedSource::failing("p", SourceError::Status(503))),
            Box::new(ScriptedSource::ok("f", "Jesus wept.", "John 11:35")),
        );
        let verse = fetcher.fetch_verse(Translation::Web).await.unwrap();
        assert_eq!(verse.reference, "John 11:35");
    }

    #[tokio::test]
    async fn test_both_failures_surface_primary_cause() {
        let fetcher = VerseFetcher::new(
            Box::new(ScriptedSource::failing("p", SourceError::Status(500))),
            Box::new(ScriptedSource::failing(
                "f",
                SourceError::Parse("bad json".to_string()),
            )),
        );
        let err = fetcher.fetch_verse(Translation::Kjv).await.unwrap_err();
        assert!(matches!(err.primary, SourceError::Status(500)));
        assert!(matches!(err.fallback, SourceError::Parse(_)));
    }

    #[tokio::test]
    async fn test_empty_text_is_not_an_error() {
        let fetcher = VerseFetcher::new(
            Box::new(ScriptedSource::ok("p", "", "Obadiah 1:1")),
            Box::new(ScriptedSource::failing(
                "f",
                SourceError::Network("unused".to_string()),
            )),
        );
        let verse = fetcher.fetch_verse(Translation::Kjv).await.unwrap();
        assert_eq!(verse.text, "");
        assert_eq!(verse.reference, "Obadiah 1:1");
    }
}
