//! # Favorites
//!
//! User-saved verses, kept most-recently-added first in a single JSON file
//! (`<data dir>/favorites.json`). Two verses are the same favorite when
//! their `(text, reference)` content matches; the generated `id` only
//! exists so the UI can delete a specific entry.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::fetch::Verse;

/// A verse the user chose to keep. Never mutated after creation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SavedVerse {
    pub id: String,
    pub text: String,
    pub reference: String,
    /// Unix seconds at save time.
    pub saved_at: i64,
}

impl SavedVerse {
    pub fn from_verse(verse: &Verse) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: verse.text.clone(),
            reference: verse.reference.clone(),
            saved_at: Utc::now().timestamp(),
        }
    }

    /// Content identity: the dedup key is (text, reference), not `id`.
    pub fn matches(&self, verse: &Verse) -> bool {
        self.text == verse.text && self.reference == verse.reference
    }
}

/// The ordered favorites list, most recently added first.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct Favorites {
    pub verses: Vec<SavedVerse>,
}

impl Favorites {
    pub fn contains(&self, verse: &Verse) -> bool {
        self.verses.iter().any(|fav| fav.matches(verse))
    }

    /// Adds the verse if absent by content, removes it if present.
    /// Returns true when the verse is a favorite after the call.
    pub fn toggle(&mut self, verse: &Verse) -> bool {
        if self.contains(verse) {
            self.verses.retain(|fav| !fav.matches(verse));
            false
        } else {
            self.verses.insert(0, SavedVerse::from_verse(verse));
            true
        }
    }

    /// Removes the favorite with the given id, if any.
    pub fn delete(&mut self, id: &str) {
        self.verses.retain(|fav| fav.id != id);
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

fn favorites_path(dir: &Path) -> PathBuf {
    dir.join("favorites.json")
}

/// Loads favorites from disk. A missing or unreadable file yields an empty
/// list; favorites degrade, they never crash the session.
pub fn load(dir: &Path) -> Favorites {
    let path = favorites_path(dir);
    if !path.exists() {
        return Favorites::default();
    }
    match fs::read_to_string(&path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(favorites) => favorites,
            Err(e) => {
                warn!("Malformed favorites file {}: {}", path.display(), e);
                Favorites::default()
            }
        },
        Err(e) => {
            warn!("Failed to read favorites {}: {}", path.display(), e);
            Favorites::default()
        }
    }
}

/// Atomically writes the favorites list.
pub fn save(dir: &Path, favorites: &Favorites) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let path = favorites_path(dir);
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(favorites)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, &path)?;
    debug!("Favorites saved: {} verses", favorites.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(text: &str, reference: &str) -> Verse {
        Verse {
            text: text.to_string(),
            reference: reference.to_string(),
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::default();
        let v = verse("Jesus wept.", "John 11:35");

        assert!(favorites.toggle(&v));
        assert!(favorites.contains(&v));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle(&v));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_newest_first_ordering() {
        let mut favorites = Favorites::default();
        favorites.toggle(&verse("first", "Gen 1:1"));
        favorites.toggle(&verse("second", "Gen 1:2"));
        assert_eq!(favorites.verses[0].text, "second");
        assert_eq!(favorites.verses[1].text, "first");
    }

    #[test]
    fn test_dedup_is_by_content_not_id() {
        let mut favorites = Favorites::default();
        let v = verse("Jesus wept.", "John 11:35");
        favorites.toggle(&v);
        // Same content toggled again removes it, even though a fresh
        // SavedVerse would have had a different id
        favorites.toggle(&v.clone());
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_same_text_different_reference_are_distinct() {
        let mut favorites = Favorites::default();
        favorites.toggle(&verse("Rejoice.", "Phil 4:4"));
        favorites.toggle(&verse("Rejoice.", "1 Thess 5:16"));
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn test_delete_by_id() {
        let mut favorites = Favorites::default();
        favorites.toggle(&verse("a", "A 1:1"));
        favorites.toggle(&verse("b", "B 1:1"));
        let id = favorites.verses[0].id.clone();
        favorites.delete(&id);
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.verses[0].text, "a");
    }

    #[test]
    fn test_round_trip() {
        let dir = std::env::temp_dir().join(format!("lumina-fav-{}", uuid::Uuid::new_v4()));
        let mut favorites = Favorites::default();
        favorites.toggle(&verse("Jesus wept.", "John 11:35"));
        save(&dir, &favorites).unwrap();
        let loaded = load(&dir);
        assert_eq!(loaded, favorites);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = std::env::temp_dir().join(format!("lumina-fav-{}", uuid::Uuid::new_v4()));
        assert!(load(&dir).is_empty());
    }
}
