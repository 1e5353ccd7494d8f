// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The single owner of an index, answering one request at a time.

use serde_json::Value;
use tracing::{debug, warn};

use super::protocol::*;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::index::ExerciseIndex;
use crate::search::SearchOptions;
use crate::types::Document;

const CLEARED_MESSAGE: &str = "Index cleared successfully";

/// Serves the request/response protocol over an owned [`ExerciseIndex`].
///
/// Failures never touch the index, so a worker keeps serving after any
/// number of bad requests.
#[derive(Debug, Clone, Default)]
pub struct IndexWorker {
    index: ExerciseIndex,
}

fn owned(documents: Vec<&Document>) -> Vec<Document> {
    documents.into_iter().cloned().collect()
}

impl IndexWorker {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            index: ExerciseIndex::with_config(config),
        }
    }

    pub fn index(&self) -> &ExerciseIndex {
        &self.index
    }

    pub fn handle(&mut self, request: Request) -> Result<Reply> {
        debug!(action = request.action(), "handling request");
        let max = self.index.config().max_results;

        Ok(match request {
            Request::IndexExercises(documents) => Reply::Indexed(self.index.build_index(documents)),

            Request::Search(SearchParams { query, limit, kind }) => {
                let options = SearchOptions { limit, kind };
                let outcome = self
                    .index
                    .search_with(query.as_deref().unwrap_or(""), &options);
                Reply::Search(SearchReply {
                    results: owned(outcome.documents()),
                    query,
                    total_results: outcome.total,
                })
            }

            Request::SearchByCategory(CategoryParams { category, limit }) => {
                let page = self
                    .index
                    .search_by_category(category.as_deref().unwrap_or(""), limit.unwrap_or(max));
                Reply::Category(CategoryReply {
                    results: owned(page.documents),
                    category,
                    total_results: page.total,
                })
            }

            Request::SearchByDifficulty(DifficultyParams { difficulty, limit }) => {
                let page = self
                    .index
                    .search_by_difficulty(difficulty.as_deref().unwrap_or(""), limit.unwrap_or(max));
                Reply::Difficulty(DifficultyReply {
                    results: owned(page.documents),
                    difficulty,
                    total_results: page.total,
                })
            }

            Request::SearchByTags(TagsParams {
                tags,
                match_all,
                limit,
            }) => {
                let page = self
                    .index
                    .search_by_tags(tags.as_slice(), match_all, limit.unwrap_or(max));
                Reply::Tags(TagsReply {
                    results: owned(page.documents),
                    tags,
                    total_results: page.total,
                })
            }

            Request::GetExercise(IdParams { id }) => {
                let exercise = self.index.get(&id).cloned();
                Reply::Exercise(ExerciseReply {
                    found: exercise.is_some(),
                    exercise,
                })
            }

            Request::GetStatistics => Reply::Statistics(self.index.statistics()),

            Request::ClearIndex => {
                self.index.clear();
                Reply::Cleared(ClearReply {
                    message: CLEARED_MESSAGE.to_string(),
                })
            }

            Request::UpdateExercise(UpdateParams { exercise }) => {
                let exercise = exercise.ok_or(EngineError::MissingId)?;
                let exercise_id = exercise.id.clone();
                self.index.upsert_document(exercise)?;
                Reply::Updated(UpdateReply {
                    exercise_id,
                    updated: true,
                })
            }

            Request::RemoveExercise(IdParams { id }) => {
                let removed = self.index.remove_document(&id).is_some();
                Reply::Removed(RemoveReply {
                    exercise_id: id,
                    removed,
                })
            }
        })
    }

    /// Decode, dispatch and wrap. Always yields exactly one envelope.
    pub fn handle_envelope(&mut self, envelope: RequestEnvelope) -> ResponseEnvelope {
        let result = Request::try_from(envelope).and_then(|request| self.handle(request));
        if let Err(error) = &result {
            warn!(%error, "request failed");
        }
        ResponseEnvelope::from_result(&result)
    }

    pub fn handle_value(&mut self, message: Value) -> ResponseEnvelope {
        match serde_json::from_value::<RequestEnvelope>(message) {
            Ok(envelope) => self.handle_envelope(envelope),
            Err(e) => {
                let error = EngineError::MalformedMessage(e.to_string());
                warn!(%error, "request failed");
                ResponseEnvelope::failure(&error)
            }
        }
    }

    /// One JSON request in, one envelope out.
    pub fn handle_json(&mut self, message: &str) -> ResponseEnvelope {
        match serde_json::from_str::<Value>(message) {
            Ok(value) => self.handle_value(value),
            Err(e) => {
                let error = EngineError::MalformedMessage(e.to_string());
                warn!(%error, "request failed");
                ResponseEnvelope::failure(&error)
            }
        }
    }
}
