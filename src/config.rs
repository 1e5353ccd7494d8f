// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Every knob has a default matching what the site has always shipped with,
//! so `EngineConfig::default()` is the right answer unless you are tuning
//! ranking. A JSON file only needs the keys it overrides:
//!
//! ```json
//! { "maxResults": 50, "weights": { "titlePrefix": 80 } }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{EngineError, Result};
use crate::scoring::ScoringWeights;

/// Default cap on returned results when a request omits `limit`.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Queries shorter than this (after trimming) are the idle state.
pub const DEFAULT_MIN_SEARCH_LENGTH: usize = 1;

/// Keystroke debounce the UI is expected to apply.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub max_results: usize,
    pub min_search_length: usize,
    /// Let a `name`/`filename` hit make a document a candidate even when the
    /// full-text blob does not contain the query.
    pub search_file_names: bool,
    /// Carried for UI callers; the engine itself never waits.
    pub debounce_ms: u64,
    pub weights: ScoringWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_search_length: DEFAULT_MIN_SEARCH_LENGTH,
            search_file_names: false,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            weights: ScoringWeights::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| EngineError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| EngineError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Effective minimum query length; zero would make every blob match.
    pub fn min_query_chars(&self) -> usize {
        self.min_search_length.max(1)
    }
}
