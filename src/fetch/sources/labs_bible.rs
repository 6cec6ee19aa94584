//! Fallback verse source: labs.bible.org.
//!
//! Responds to `GET /api/?passage=random&type=json` with a JSON array whose
//! first element carries `text`, `bookname`, `chapter`, `verse`. It has no
//! translation concept, so the requested translation is ignored.

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

use crate::fetch::source::VerseSource;
use crate::fetch::types::{SourceError, Translation, Verse};

pub const DEFAULT_LABS_BIBLE_BASE_URL: &str = "https://labs.bible.org";

/// One element of the fallback payload array. All fields arrive as strings.
#[derive(Deserialize, Debug)]
struct LabsBiblePassage {
    text: String,
    bookname: String,
    chapter: String,
    verse: String,
}

pub struct LabsBibleSource {
    base_url: String,
    client: reqwest::Client,
}

impl LabsBibleSource {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_LABS_BIBLE_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl VerseSource for LabsBibleSource {
    fn name(&self) -> &str {
        "labs.bible.org"
    }

    async fn random_verse(&self, _translation: Translation) -> Result<Verse, SourceError> {
        let url = format!("{}/api/?passage=random&type=json", self.base_url);
        debug!("Fallback source request: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Fallback source returned HTTP {}", status.as_u16());
            return Err(SourceError::Status(status.as_u16()));
        }

        let payload: Vec<LabsBiblePassage> = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        let passage = payload
            .into_iter()
            .next()
            .ok_or_else(|| SourceError::Parse("empty passage array".to_string()))?;

        Ok(Verse {
            text: passage.text.trim().to_string(),
            reference: format!(
                "{} {}:{}",
                passage.bookname, passage.chapter, passage.verse
            ),
        })
    }
}
