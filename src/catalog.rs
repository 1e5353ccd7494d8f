// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a repository file listing into indexable records.
//!
//! The site has no hand-written metadata: every exercise is a file whose
//! name carries the category and title, e.g. `geometrie-theoreme-de-pythagore.pdf`.
//!
//! | File name                            | category        | title                       |
//! |--------------------------------------|-----------------|-----------------------------|
//! | `geometrie-theoreme-de-pythagore.pdf`| `géométrie`     | `Theoreme De Pythagore`     |
//! | `pc-circuits.txt`                    | `physique-chimie` | `Circuits`                |
//! | `formulaire.pdf`                     | `général`       | `Formulaire`                |
//!
//! Fetching the listing is the caller's business; this module only reads the
//! JSON the contents API returns.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::types::Document;

/// Category given to files whose name has no `<category>-` prefix.
pub const DEFAULT_CATEGORY: &str = "général";

const STOP_WORDS: [&str; 8] = ["de", "des", "du", "et", "ou", "les", "la", "le"];

const CATEGORY_ALIASES: [(&str, &str); 7] = [
    ("geometrie", "géométrie"),
    ("algebre", "algèbre"),
    ("analyse", "analyse"),
    ("physique", "physique-chimie"),
    ("pc", "physique-chimie"),
    ("math", "mathématiques"),
    ("maths", "mathématiques"),
];

// =============================================================================
// FILE KINDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    #[serde(rename = "txt")]
    Text,
    Image,
    Other,
}

impl FileKind {
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_lowercase().as_str() {
            "pdf" => FileKind::Pdf,
            "txt" | "md" | "rtf" => FileKind::Text,
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg" => FileKind::Image,
            _ => FileKind::Other,
        }
    }

    /// Kind of a file name, judged by the text after its last dot.
    pub fn of_file_name(file_name: &str) -> Self {
        match file_name.rsplit_once('.') {
            Some((_, extension)) => Self::from_extension(extension),
            None => FileKind::Other,
        }
    }

    /// The value stored in [`Document::kind`].
    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Text => "txt",
            FileKind::Image => "image",
            FileKind::Other => "other",
        }
    }

    pub fn is_supported(self) -> bool {
        self != FileKind::Other
    }

    fn description(self) -> &'static str {
        match self {
            FileKind::Pdf => "Document PDF",
            FileKind::Text => "Fichier texte avec exercices",
            FileKind::Image => "Image illustrative",
            FileKind::Other => "Fichier",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// LISTING
// =============================================================================

/// One item of a repository contents listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    /// `file` or `dir`.
    #[serde(rename = "type", default)]
    pub entry_type: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl ListingEntry {
    pub fn is_file(&self) -> bool {
        self.entry_type == "file"
    }
}

/// Records for every supported file in a listing, in listing order.
pub fn documents_from_listing(entries: &[ListingEntry]) -> Vec<Document> {
    entries
        .iter()
        .filter(|entry| entry.is_file() && FileKind::of_file_name(&entry.name).is_supported())
        .map(|entry| {
            let mut doc = document_from_path(&entry.path);
            doc.size = entry.size.map(Value::from);
            doc.url = entry.download_url.clone();
            doc
        })
        .collect()
}

// =============================================================================
// NAME PARSING
// =============================================================================

fn strip_extension(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize_words(text: &str) -> String {
    text.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Map a short category prefix to its display name.
pub fn canonical_category(prefix: &str) -> String {
    let lower = prefix.to_lowercase();
    CATEGORY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| prefix.to_string())
}

/// Search keywords from a file name: its words minus short and stop words.
pub fn extract_keywords(file_name: &str) -> Vec<String> {
    strip_extension(file_name)
        .replace(['_', '-'], " ")
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Build a record from a repository path.
pub fn document_from_path(path: &str) -> Document {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let base = strip_extension(file_name);
    let kind = FileKind::of_file_name(file_name);

    let (category, raw_title) = match base.split_once('-') {
        Some((prefix, rest)) => (canonical_category(prefix), rest.replace('-', " ")),
        None => (DEFAULT_CATEGORY.to_string(), base.to_string()),
    };
    let title = capitalize_words(&raw_title);

    let id: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();

    Document {
        id: format!("ex-{}", id),
        description: Some(format!("{} sur {} - {}", kind.description(), category, title)),
        title: Some(title),
        filename: Some(file_name.to_string()),
        path: Some(path.to_string()),
        kind: Some(kind.as_str().to_string()),
        category: Some(category),
        tags: extract_keywords(file_name),
        ..Document::default()
    }
}

/// Human-readable size in binary units: `0 Bytes`, `1.5 KB`, `2 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}
