//! Primary verse source: bible-api.com.
//!
//! Responds to `GET /?random=verse&translation=<id>` with a JSON object
//! carrying `text` and `reference` directly.

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

use crate::fetch::source::VerseSource;
use crate::fetch::types::{SourceError, Translation, Verse};

pub const DEFAULT_BIBLE_API_BASE_URL: &str = "https://bible-api.com";

/// The fields we need from the primary payload. The endpoint returns more
/// (a `verses` array, translation metadata); only the top-level pair matters.
#[derive(Deserialize, Debug)]
struct BibleApiPayload {
    text: String,
    reference: String,
}

pub struct BibleApiSource {
    base_url: String,
    client: reqwest::Client,
}

impl BibleApiSource {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BIBLE_API_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl VerseSource for BibleApiSource {
    fn name(&self) -> &str {
        "bible-api.com"
    }

    async fn random_verse(&self, translation: Translation) -> Result<Verse, SourceError> {
        let url = format!(
            "{}/?random=verse&translation={}",
            self.base_url,
            translation.id()
        );
        debug!("Primary source request: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Primary source returned HTTP {}", status.as_u16());
            return Err(SourceError::Status(status.as_u16()));
        }

        let payload: BibleApiPayload = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(Verse {
            text: payload.text.trim().to_string(),
            reference: payload.reference,
        })
    }
}
