// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wire types for the worker boundary.
//!
//! Requests arrive as `{ action, payload }` and are decoded into a typed
//! [`Request`]. Every request produces exactly one [`ResponseEnvelope`]:
//!
//! ```text
//! { "success": true,  "action": "SEARCH_COMPLETE", "data": {...}, "timestamp": "..." }
//! { "success": false, "error": "Unknown action: FROB",             "timestamp": "..." }
//! ```

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EngineError, Result};
use crate::stats::Statistics;
use crate::types::{deserialize_id, Document, IndexStats};

// =============================================================================
// REQUESTS
// =============================================================================

/// The raw message shape, before the action is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    pub action: String,
    #[serde(default)]
    pub payload: Value,
}

impl RequestEnvelope {
    pub fn new(action: impl Into<String>, payload: Value) -> Self {
        Self {
            action: action.into(),
            payload,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchParams {
    /// Echoed back verbatim; `None` behaves like an empty query.
    pub query: Option<String>,
    pub limit: Option<usize>,
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryParams {
    pub category: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DifficultyParams {
    pub difficulty: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagsParams {
    pub tags: Vec<String>,
    pub match_all: bool,
    pub limit: Option<usize>,
}

/// Payload of `GET_EXERCISE` and `REMOVE_EXERCISE`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdParams {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateParams {
    pub exercise: Option<Document>,
}

/// A decoded request.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    IndexExercises(Vec<Document>),
    Search(SearchParams),
    SearchByCategory(CategoryParams),
    SearchByDifficulty(DifficultyParams),
    SearchByTags(TagsParams),
    GetExercise(IdParams),
    GetStatistics,
    ClearIndex,
    UpdateExercise(UpdateParams),
    RemoveExercise(IdParams),
}

impl Request {
    /// The action name this request travels under.
    pub fn action(&self) -> &'static str {
        match self {
            Request::IndexExercises(_) => "INDEX_EXERCISES",
            Request::Search(_) => "SEARCH",
            Request::SearchByCategory(_) => "SEARCH_BY_CATEGORY",
            Request::SearchByDifficulty(_) => "SEARCH_BY_DIFFICULTY",
            Request::SearchByTags(_) => "SEARCH_BY_TAGS",
            Request::GetExercise(_) => "GET_EXERCISE",
            Request::GetStatistics => "GET_STATISTICS",
            Request::ClearIndex => "CLEAR_INDEX",
            Request::UpdateExercise(_) => "UPDATE_EXERCISE",
            Request::RemoveExercise(_) => "REMOVE_EXERCISE",
        }
    }
}

/// Decode a payload object. A missing or `null` payload means "all defaults".
fn params<T>(action: &str, payload: Value) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if payload.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(payload).map_err(|e| EngineError::invalid_payload(action, e))
}

fn documents(action: &str, payload: Value) -> Result<Vec<Document>> {
    let Value::Array(items) = payload else {
        return Err(EngineError::NotAnArray);
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|e| EngineError::invalid_payload(action, e)))
        .collect()
}

impl TryFrom<RequestEnvelope> for Request {
    type Error = EngineError;

    fn try_from(envelope: RequestEnvelope) -> Result<Self> {
        let RequestEnvelope { action, payload } = envelope;
        let a = action.as_str();
        Ok(match a {
            "INDEX_EXERCISES" => Request::IndexExercises(documents(a, payload)?),
            "SEARCH" => Request::Search(params(a, payload)?),
            "SEARCH_BY_CATEGORY" => Request::SearchByCategory(params(a, payload)?),
            "SEARCH_BY_DIFFICULTY" => Request::SearchByDifficulty(params(a, payload)?),
            "SEARCH_BY_TAGS" => Request::SearchByTags(params(a, payload)?),
            "GET_EXERCISE" => Request::GetExercise(params(a, payload)?),
            "GET_STATISTICS" => Request::GetStatistics,
            "CLEAR_INDEX" => Request::ClearIndex,
            "UPDATE_EXERCISE" => Request::UpdateExercise(params(a, payload)?),
            "REMOVE_EXERCISE" => Request::RemoveExercise(params(a, payload)?),
            _ => return Err(EngineError::UnknownAction(action)),
        })
    }
}

// =============================================================================
// REPLIES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReply {
    pub results: Vec<Document>,
    pub query: Option<String>,
    pub total_results: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReply {
    pub results: Vec<Document>,
    pub category: Option<String>,
    pub total_results: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyReply {
    pub results: Vec<Document>,
    pub difficulty: Option<String>,
    pub total_results: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagsReply {
    pub results: Vec<Document>,
    pub tags: Vec<String>,
    pub total_results: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseReply {
    pub exercise: Option<Document>,
    pub found: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClearReply {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReply {
    pub exercise_id: String,
    pub updated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveReply {
    pub exercise_id: String,
    pub removed: bool,
}

/// The data half of a successful response. Serializes as the bare payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Indexed(IndexStats),
    Search(SearchReply),
    Category(CategoryReply),
    Difficulty(DifficultyReply),
    Tags(TagsReply),
    Exercise(ExerciseReply),
    Statistics(Statistics),
    Cleared(ClearReply),
    Updated(UpdateReply),
    Removed(RemoveReply),
}

impl Reply {
    /// The `action` field of the success envelope.
    pub fn completion(&self) -> &'static str {
        match self {
            Reply::Indexed(_) => "INDEX_EXERCISES_COMPLETE",
            Reply::Search(_) => "SEARCH_COMPLETE",
            Reply::Category(_) => "SEARCH_BY_CATEGORY_COMPLETE",
            Reply::Difficulty(_) => "SEARCH_BY_DIFFICULTY_COMPLETE",
            Reply::Tags(_) => "SEARCH_BY_TAGS_COMPLETE",
            Reply::Exercise(_) => "GET_EXERCISE_COMPLETE",
            Reply::Statistics(_) => "STATISTICS_COMPLETE",
            Reply::Cleared(_) => "CLEAR_INDEX_COMPLETE",
            Reply::Updated(_) => "UPDATE_EXERCISE_COMPLETE",
            Reply::Removed(_) => "REMOVE_EXERCISE_COMPLETE",
        }
    }
}

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ResponseEnvelope {
    pub fn success(reply: &Reply) -> Self {
        match serde_json::to_value(reply) {
            Ok(data) => Self {
                success: true,
                action: Some(reply.completion().to_string()),
                data: Some(data),
                error: None,
                timestamp: Utc::now(),
            },
            Err(e) => Self::failure(&EngineError::from(e)),
        }
    }

    pub fn failure(error: &EngineError) -> Self {
        Self {
            success: false,
            action: None,
            data: None,
            error: Some(error.to_string()),
            timestamp: Utc::now(),
        }
    }

    pub fn from_result(result: &Result<Reply>) -> Self {
        match result {
            Ok(reply) => Self::success(reply),
            Err(error) => Self::failure(error),
        }
    }
}
