// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by indexing and search.

use crate::types::Document;

/// Prepare a raw query: trim, lowercase, and reject it if it is too short.
///
/// Returns `None` for the idle state (empty or whitespace-only input, or
/// fewer than `min_chars` characters after trimming).
pub fn normalize_query(query: &str, min_chars: usize) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.chars().count() < min_chars.max(1) {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// The full-text blob for one document.
///
/// Title, description, category, difficulty, space-joined tags and content,
/// each defaulting to empty, joined by single spaces and lowercased. Empty
/// fields still contribute their separator, so the blob shape never depends
/// on which fields are present.
pub fn search_text(doc: &Document) -> String {
    let tags = doc.tags.join(" ");
    let parts: [&str; 6] = [
        doc.title.as_deref().unwrap_or(""),
        doc.description.as_deref().unwrap_or(""),
        doc.category.as_deref().unwrap_or(""),
        doc.difficulty.as_deref().unwrap_or(""),
        &tags,
        doc.content.as_deref().unwrap_or(""),
    ];
    parts.join(" ").to_lowercase()
}

/// Characters of context kept before a snippet hit.
pub const SNIPPET_BEFORE: usize = 50;

/// Characters kept from the hit onwards.
pub const SNIPPET_AFTER: usize = 150;

/// Whether `text`, lowercased character by character, starts with `query`.
fn starts_with_folded(text: &str, query: &str) -> bool {
    let mut folded = text.chars().flat_map(char::to_lowercase);
    query.chars().all(|q| folded.next() == Some(q))
}

/// Cut a window of `text` around the first occurrence of the lowercased
/// `query`, or `None` when it does not occur.
///
/// Works in characters of `text` itself, not bytes and not characters of its
/// lowercased copy, so multi-byte text never splits and case folds that change
/// length never shift the window.
pub fn snippet_around(text: &str, query: &str) -> Option<String> {
    let char_hit = text
        .char_indices()
        .position(|(byte, _)| starts_with_folded(&text[byte..], query))?;

    let start = char_hit.saturating_sub(SNIPPET_BEFORE);
    let window: String = text
        .chars()
        .skip(start)
        .take(char_hit - start + SNIPPET_AFTER)
        .collect();
    Some(format!("{}...", window))
}
