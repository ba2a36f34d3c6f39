//! Core data models for jotter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::defaults;

/// A stored note with all fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Comma-separated free-form labels. No uniqueness or
    /// normalization is enforced beyond trimming on read.
    pub tags: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One row of the listing view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: i64,
    pub title: String,
    /// Leading slice of the content, at most [`defaults::PREVIEW_CHARS`]
    /// characters.
    pub preview: String,
    pub updated_at: DateTime<Utc>,
}

/// Candidate note fields as submitted by the editor form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteDraft {
    /// Carried by the form for round-tripping. Never used for row
    /// selection: saves always target the first existing row.
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: String,
}

impl NoteDraft {
    /// Apply the save-time input constraints: the title is trimmed,
    /// truncated, and replaced with the placeholder when empty;
    /// content and tags are truncated. Truncation counts characters,
    /// not bytes.
    pub fn normalize(mut self) -> Self {
        let title = self.title.trim();
        self.title = if title.is_empty() {
            defaults::DEFAULT_TITLE.to_string()
        } else {
            truncate_chars(title, defaults::TITLE_MAX_CHARS)
        };
        self.content = truncate_chars(&self.content, defaults::CONTENT_MAX_CHARS);
        self.tags = truncate_chars(self.tags.trim(), defaults::TAGS_MAX_CHARS);
        self
    }
}

/// Filter for the note listing. Both fields are ANDed when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Case-sensitive title substring.
    pub query: Option<String>,
    /// Substring of the comma-separated tags field.
    pub tag: Option<String>,
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}
