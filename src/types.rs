// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records the index is built from, and the numbers it reports back.
//!
//! A [`Document`] is whatever the site's file scan produced: an exercise sheet,
//! a PDF, a formula card. Only the textual fields (`title`, `description`,
//! `category`, `difficulty`, `tags`, `content`, plus `name`/`filename` for the
//! file-search bonus) are ever looked at. Everything else, including fields
//! this crate has never heard of, rides along untouched so the UI gets back
//! exactly what it handed in.
//!
//! # Invariants
//!
//! - **Document**: `id` is the primary key. An empty `id` means "no id": bulk
//!   loads skip such records and upserts reject them.
//! - **FullTextEntry**: `text == search_text(store[id])`, one entry per live id.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// DOCUMENT
// =============================================================================

/// One indexable record.
///
/// Field names follow the JSON the browser scripts produce (`camelCase`,
/// `type` for the file kind). Absent fields default to empty and are never an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Primary key. Numbers are accepted and stored in their decimal form.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Multi-valued; duplicates are harmless (buckets are sets).
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// File kind (`pdf`, `txt`, `image`, ...), used by the optional search filter.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Passed through as given: bytes from a listing, or any display string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract_snippet: Option<String>,
    /// Anything else the caller attached (icons, colors, dates...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// A bare record with just a primary key.
    pub fn new(id: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            ..Document::default()
        }
    }

    /// Whether the record can be indexed at all.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// What a result card shows: the title, else the file name, else the id.
    pub fn display_title(&self) -> &str {
        [&self.title, &self.name, &self.filename]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or(self.id.as_str())
    }

    /// `name` and `filename` that are actually set.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        [&self.name, &self.filename]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// JS callers sometimes hand over numeric ids; `null` means missing.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(s)) => s,
        Some(RawId::Int(n)) => n.to_string(),
        Some(RawId::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

/// `tags: null` is the same as no tags.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// DERIVED RECORDS
// =============================================================================

/// The concatenated, lowercased searchable text of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTextEntry {
    pub id: String,
    pub text: String,
}

/// What a bulk load reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    /// Records that made it into the store during this call.
    pub indexed_count: usize,
    /// Records dropped for lack of an id.
    pub skipped_count: usize,
    /// Store size after the call.
    #[serde(rename = "totalExercises")]
    pub total_documents: usize,
    pub duration_ms: u64,
}
