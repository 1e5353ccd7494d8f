// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory index and search for a catalog of educational exercises.
//!
//! Records come from a file scan (one per PDF, text sheet or figure), get
//! indexed once per session, and are then queried on every keystroke.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │ catalog.rs  │────▶│    index/        │────▶│    search/      │
//! │ (file name  │     │ (store, buckets, │     │ (text, filters) │
//! │  -> record) │     │  full text)      │     │                 │
//! └─────────────┘     └──────────────────┘     └─────────────────┘
//!                        ▲          │                   │
//!                        │          ▼                   ▼
//!               ┌──────────────┐ ┌──────────┐   ┌─────────────┐
//!               │ mutation.rs  │ │ stats.rs │   │  scoring/   │
//!               └──────────────┘ └──────────┘   └─────────────┘
//!                        ▲
//!               ┌─────────────────────────────────────────────┐
//!               │ worker/  {action, payload} -> envelope       │
//!               └─────────────────────────────────────────────┘
//! ```
//!
//! | Module     | Role                                                  |
//! |------------|-------------------------------------------------------|
//! | `index`    | [`ExerciseIndex`]: store plus derived lookups         |
//! | `search`   | ranked substring search, category/difficulty/tag pages |
//! | `scoring`  | relevance weights and the result order                |
//! | `mutation` | single-record upsert and removal                      |
//! | `stats`    | bucket counts                                         |
//! | `worker`   | the message protocol, sync and async                  |
//! | `verify`   | invariant checks and debug contracts                  |
//! | `catalog`  | records from repository file names                    |
//!
//! # Usage
//!
//! ```
//! use exosearch::{Document, ExerciseIndex};
//!
//! let mut doc = Document::new("1");
//! doc.title = Some("Pythagoras Theorem".into());
//! doc.category = Some("geometry".into());
//!
//! let mut index = ExerciseIndex::new();
//! index.build_index(vec![doc]);
//!
//! let hits = index.search("pythagoras", 10);
//! assert_eq!(hits[0].id, "1");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
mod mutation;
pub mod scoring;
pub mod search;
mod stats;
mod store;
pub mod testing;
mod types;
mod utils;
pub mod verify;
pub mod worker;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use index::{Buckets, ExerciseIndex};
pub use mutation::Upserted;
pub use scoring::ScoringWeights;
pub use search::{Page, SearchHit, SearchOptions, SearchOutcome};
pub use stats::Statistics;
pub use store::DocumentStore;
pub use types::{Document, FullTextEntry, IndexStats};
pub use utils::{normalize_query, search_text};
pub use verify::{InvariantError, VerificationReport};

#[cfg(feature = "wasm")]
pub use wasm::ExerciseWorker;
