// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariant checking over a whole index.
//!
//! | Invariant                        | Violation                       |
//! |----------------------------------|---------------------------------|
//! | bucket ids exist in the store    | `DanglingId`                    |
//! | doc sits under its current keys  | `Unindexed`                     |
//! | doc sits under no other key      | `StaleKey`                      |
//! | buckets are sets                 | `DuplicateId`                   |
//! | one full-text entry per doc      | `MissingFullText`, `DuplicateFullText`, `DanglingFullText` |
//! | full text matches the doc        | `StaleFullText`                 |

use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::index::builder::DerivedKeys;
use crate::index::{Buckets, ExerciseIndex};

/// One broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("{index}[{key:?}] references {id:?}, which is not in the store")]
    DanglingId {
        index: &'static str,
        key: String,
        id: String,
    },
    #[error("{id:?} is missing from {index}[{key:?}]")]
    Unindexed {
        index: &'static str,
        key: String,
        id: String,
    },
    #[error("{id:?} is still filed under stale key {index}[{key:?}]")]
    StaleKey {
        index: &'static str,
        key: String,
        id: String,
    },
    #[error("{id:?} appears more than once in {index}[{key:?}]")]
    DuplicateId {
        index: &'static str,
        key: String,
        id: String,
    },
    #[error("{id:?} has no full-text entry")]
    MissingFullText { id: String },
    #[error("{id:?} has {count} full-text entries")]
    DuplicateFullText { id: String, count: usize },
    #[error("full-text entry for {id:?} has no document")]
    DanglingFullText { id: String },
    #[error("full-text entry for {id:?} is out of date")]
    StaleFullText { id: String },
}

/// Everything [`ExerciseIndex::verify`] found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub documents_checked: usize,
    pub errors: Vec<InvariantError>,
}

impl VerificationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The first violation, if any.
    pub fn into_result(self) -> Result<(), InvariantError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

type KeySelector = fn(&DerivedKeys) -> Vec<&str>;

fn title_key(keys: &DerivedKeys) -> Vec<&str> {
    keys.title.as_deref().into_iter().collect()
}

fn category_key(keys: &DerivedKeys) -> Vec<&str> {
    keys.category.as_deref().into_iter().collect()
}

fn difficulty_key(keys: &DerivedKeys) -> Vec<&str> {
    keys.difficulty.as_deref().into_iter().collect()
}

fn tag_keys(keys: &DerivedKeys) -> Vec<&str> {
    keys.tags.iter().map(String::as_str).collect()
}

impl ExerciseIndex {
    /// Check every structural invariant and collect the violations.
    pub fn verify(&self) -> VerificationReport {
        let mut report = VerificationReport {
            documents_checked: self.store.len(),
            errors: Vec::new(),
        };

        let derived: HashMap<&str, DerivedKeys> = self
            .store
            .iter()
            .map(|doc| (doc.id.as_str(), DerivedKeys::of(doc)))
            .collect();

        let indices: [(&'static str, &Buckets, KeySelector); 4] = [
            ("byTitle", &self.by_title, title_key),
            ("byCategory", &self.by_category, category_key),
            ("byDifficulty", &self.by_difficulty, difficulty_key),
            ("byTags", &self.by_tags, tag_keys),
        ];

        for (name, buckets, keys_of) in indices {
            for (key, ids) in buckets.iter() {
                let mut seen = HashSet::with_capacity(ids.len());
                for id in ids {
                    if !seen.insert(id.as_str()) {
                        report.errors.push(InvariantError::DuplicateId {
                            index: name,
                            key: key.to_string(),
                            id: id.clone(),
                        });
                    }
                    match derived.get(id.as_str()) {
                        None => report.errors.push(InvariantError::DanglingId {
                            index: name,
                            key: key.to_string(),
                            id: id.clone(),
                        }),
                        Some(keys) if !keys_of(keys).contains(&key) => {
                            report.errors.push(InvariantError::StaleKey {
                                index: name,
                                key: key.to_string(),
                                id: id.clone(),
                            })
                        }
                        Some(_) => {}
                    }
                }
            }

            for (id, keys) in &derived {
                for key in keys_of(keys) {
                    if !buckets.contains(key, id) {
                        report.errors.push(InvariantError::Unindexed {
                            index: name,
                            key: key.to_string(),
                            id: id.to_string(),
                        });
                    }
                }
            }
        }

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for entry in &self.full_text {
            *seen.entry(entry.id.as_str()).or_default() += 1;
            match derived.get(entry.id.as_str()) {
                None => report.errors.push(InvariantError::DanglingFullText {
                    id: entry.id.clone(),
                }),
                Some(keys) if keys.text != entry.text => {
                    report.errors.push(InvariantError::StaleFullText {
                        id: entry.id.clone(),
                    })
                }
                Some(_) => {}
            }
        }
        for id in derived.keys() {
            match seen.get(id).copied().unwrap_or(0) {
                0 => report.errors.push(InvariantError::MissingFullText { id: id.to_string() }),
                1 => {}
                count => report.errors.push(InvariantError::DuplicateFullText {
                    id: id.to_string(),
                    count,
                }),
            }
        }

        report
    }
}
