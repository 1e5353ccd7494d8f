// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the exosearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `EXOSEARCH_THEME` if set, then `COLORFGBG`, then defaults to dark. Colors
//! are dropped entirely under `NO_COLOR` or when stdout is not a terminal.
//!
//! # Theme detection order
//!
//! 1. `EXOSEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use serde_json::Value;
use std::sync::OnceLock;

use exosearch::catalog::format_file_size;
use exosearch::{Document, Page, SearchOutcome, Statistics};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("EXOSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg" where bg 7+ (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);    // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);  // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);    // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);    // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);     // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);      // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);    // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);   // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);    // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);     // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);   // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` characters, marking the cut with `...`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = GRAY();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded file kind badge
pub fn kind_badge(kind: Option<&str>) -> String {
    let kind = kind.unwrap_or("?");
    if !use_colors() {
        return format!("[{}]", kind);
    }
    let color = match kind {
        "pdf" => RED(),
        "txt" => BLUE(),
        "image" => MAGENTA(),
        _ => GRAY(),
    };
    format!("{}[{}]{}", color, kind, RESET)
}

/// Color-coded relevance score
pub fn score_value(score: u32) -> String {
    if !use_colors() {
        return format!("{:>5}", score);
    }
    let color = if score >= 100 {
        BRIGHT_GREEN()
    } else if score >= 50 {
        GREEN()
    } else if score >= 20 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{:>5}{}", color, score, RESET)
}

fn document_line(doc: &Document) -> String {
    let mut meta: Vec<&str> = Vec::new();
    if let Some(category) = doc.category.as_deref() {
        meta.push(category);
    }
    if let Some(difficulty) = doc.difficulty.as_deref() {
        meta.push(difficulty);
    }
    let size = doc.size.as_ref().and_then(Value::as_u64).map(format_file_size);
    if let Some(size) = size.as_deref() {
        meta.push(size);
    }
    format!(
        "{} {} {}",
        kind_badge(doc.kind.as_deref()),
        themed(BLUE, &[BOLD], &truncate(doc.display_title(), 44)),
        themed(GRAY, &[], &truncate(&meta.join(" · "), 28)),
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_hits(query: &str, outcome: &SearchOutcome<'_>) {
    section_top(&format!("SEARCH \"{}\"", truncate(query, 40)));
    if outcome.hits.is_empty() {
        row(&themed(GRAY, &[DIM], " no results"));
    }
    for hit in &outcome.hits {
        row(&format!(" {} {}", score_value(hit.score), document_line(hit.document)));
        if let Some(snippet) = hit.snippet.as_deref() {
            let flat = snippet.split_whitespace().collect::<Vec<_>>().join(" ");
            row(&format!("       {}", themed(GRAY, &[DIM], &truncate(&flat, 70))));
        }
    }
    section_mid(&format!("{} of {}", outcome.hits.len(), outcome.total));
    section_bot();
}

pub fn print_page(label: &str, page: &Page<'_>) {
    section_top(label);
    if page.documents.is_empty() {
        row(&themed(GRAY, &[DIM], " no results"));
    }
    for doc in &page.documents {
        row(&format!(" {}", document_line(doc)));
    }
    section_mid(&format!("{} of {}", page.documents.len(), page.total));
    section_bot();
}

fn breakdown_rows(counts: &std::collections::BTreeMap<String, usize>) {
    let mut sorted: Vec<(&String, &usize)> = counts.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (key, count) in sorted {
        row(&format!(
            "   {} {}",
            pad_right(&truncate(key, 60), 62),
            themed(YELLOW, &[], &format!("{:>6}", count))
        ));
    }
}

pub fn print_statistics(stats: &Statistics) {
    section_top("CATALOG");
    row(&format!(
        " {} exercises, {} categories, {} difficulties, {} tags",
        themed(GREEN, &[BOLD], &stats.total_documents.to_string()),
        stats.categories,
        stats.difficulties,
        stats.tags
    ));
    section_mid("CATEGORIES");
    breakdown_rows(&stats.categories_breakdown);
    section_mid("DIFFICULTIES");
    breakdown_rows(&stats.difficulties_breakdown);
    section_mid("TAGS");
    breakdown_rows(&stats.tags_breakdown);
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
