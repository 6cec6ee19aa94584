use async_trait::async_trait;

use super::types::{SourceError, Translation, Verse};

/// A verse-providing endpoint. The two implementations differ in payload
/// shape and in whether they honor a translation; both normalize to `Verse`.
#[async_trait]
pub trait VerseSource: Send + Sync {
    /// Returns the name of the source (used in log lines).
    fn name(&self) -> &str;

    /// Fetches one random verse. `translation` may be ignored by sources
    /// that have no version concept.
    async fn random_verse(&self, translation: Translation) -> Result<Verse, SourceError>;
}
