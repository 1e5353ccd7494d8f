// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Async front door: an [`IndexWorker`] running on its own tokio task.
//!
//! Requests queue on an mpsc channel and are served strictly in arrival
//! order. Each carries a oneshot slot for its reply, so every request gets
//! exactly one answer and nothing is ever pushed unprompted.

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use super::dispatch::IndexWorker;
use super::protocol::*;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::stats::Statistics;
use crate::types::{Document, IndexStats};

/// Requests allowed to wait before `request` starts applying backpressure.
const QUEUE_DEPTH: usize = 64;

struct Job {
    request: Request,
    reply: oneshot::Sender<Result<Reply>>,
}

/// Cloneable handle to a running worker task. The task stops once every
/// handle is dropped.
#[derive(Debug, Clone)]
pub struct WorkerHandle {
    tx: mpsc::Sender<Job>,
}

impl std::fmt::Debug for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Job").field("action", &self.request.action()).finish()
    }
}

impl WorkerHandle {
    /// Start a worker on the current tokio runtime.
    pub fn spawn(config: EngineConfig) -> Self {
        let (tx, mut rx) = mpsc::channel::<Job>(QUEUE_DEPTH);
        tokio::spawn(async move {
            let mut worker = IndexWorker::new(config);
            while let Some(job) = rx.recv().await {
                let result = worker.handle(job.request);
                // The caller may have given up waiting; that is fine.
                let _ = job.reply.send(result);
            }
            debug!("index worker stopped");
        });
        Self { tx }
    }

    pub async fn request(&self, request: Request) -> Result<Reply> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Job { request, reply })
            .await
            .map_err(|_| EngineError::WorkerClosed)?;
        rx.await.map_err(|_| EngineError::WorkerClosed)?
    }

    /// Serve a raw envelope, wrapping the outcome for the wire.
    pub async fn envelope(&self, envelope: RequestEnvelope) -> ResponseEnvelope {
        let result = match Request::try_from(envelope) {
            Ok(request) => self.request(request).await,
            Err(error) => Err(error),
        };
        ResponseEnvelope::from_result(&result)
    }

    pub async fn index_exercises(&self, documents: Vec<Document>) -> Result<IndexStats> {
        match self.request(Request::IndexExercises(documents)).await? {
            Reply::Indexed(stats) => Ok(stats),
            other => Err(EngineError::UnexpectedReply(other.completion())),
        }
    }

    pub async fn search(&self, params: SearchParams) -> Result<SearchReply> {
        match self.request(Request::Search(params)).await? {
            Reply::Search(reply) => Ok(reply),
            other => Err(EngineError::UnexpectedReply(other.completion())),
        }
    }

    pub async fn get_exercise(&self, id: impl Into<String>) -> Result<Option<Document>> {
        match self.request(Request::GetExercise(IdParams { id: id.into() })).await? {
            Reply::Exercise(reply) => Ok(reply.exercise),
            other => Err(EngineError::UnexpectedReply(other.completion())),
        }
    }

    pub async fn update_exercise(&self, exercise: Document) -> Result<UpdateReply> {
        let request = Request::UpdateExercise(UpdateParams {
            exercise: Some(exercise),
        });
        match self.request(request).await? {
            Reply::Updated(reply) => Ok(reply),
            other => Err(EngineError::UnexpectedReply(other.completion())),
        }
    }

    pub async fn remove_exercise(&self, id: impl Into<String>) -> Result<RemoveReply> {
        match self.request(Request::RemoveExercise(IdParams { id: id.into() })).await? {
            Reply::Removed(reply) => Ok(reply),
            other => Err(EngineError::UnexpectedReply(other.completion())),
        }
    }

    pub async fn statistics(&self) -> Result<Statistics> {
        match self.request(Request::GetStatistics).await? {
            Reply::Statistics(stats) => Ok(stats),
            other => Err(EngineError::UnexpectedReply(other.completion())),
        }
    }
}
