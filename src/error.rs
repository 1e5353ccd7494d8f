// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One error type for the whole engine.
//!
//! Nothing here is fatal. A failed operation leaves the index exactly as it
//! was, so callers can report the message and keep sending requests. The
//! `Display` strings double as the `error` field of failure envelopes, which
//! is why a few of them read like the messages a UI would show.

use thiserror::Error;

/// Everything that can go wrong at the engine boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Upsert without a usable primary key.
    #[error("Exercise must have an id")]
    MissingId,

    /// The request envelope named an action this engine does not serve.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// `INDEX_EXERCISES` payload was not a list of records.
    #[error("Exercises must be an array")]
    NotAnArray,

    /// The action is known but its payload has the wrong shape.
    #[error("Error processing action {action}: {message}")]
    InvalidPayload { action: String, message: String },

    /// The message is not a request envelope at all.
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    /// The task owning the index is gone (all its work was dropped).
    #[error("index worker has shut down")]
    WorkerClosed,

    /// A worker answered with a reply for a different action.
    #[error("unexpected reply {0}")]
    UnexpectedReply(&'static str),

    #[error("failed to load config {path}: {message}")]
    Config { path: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    pub(crate) fn invalid_payload(action: &str, message: impl ToString) -> Self {
        EngineError::InvalidPayload {
            action: action.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
