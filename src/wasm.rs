// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the exercise index.
//!
//! `ExerciseWorker` is meant to live inside a Web Worker: the worker script
//! forwards every `message` event's data to [`ExerciseWorker::handle_message`]
//! and posts back whatever it returns.
//!
//! ```js
//! const engine = new ExerciseWorker();
//! self.onmessage = (event) => self.postMessage(engine.handleMessage(event.data));
//! ```

use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::worker::{IndexWorker, ResponseEnvelope};

#[wasm_bindgen]
pub struct ExerciseWorker {
    worker: IndexWorker,
}

#[wasm_bindgen]
impl ExerciseWorker {
    /// Create an empty index. `config` uses the same keys as the JSON config
    /// file; omit it for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<JsValue>) -> Result<ExerciseWorker, JsValue> {
        let config = match config {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                from_value::<EngineConfig>(value).map_err(|e| e.to_string())?
            }
            _ => EngineConfig::default(),
        };
        Ok(ExerciseWorker {
            worker: IndexWorker::new(config),
        })
    }

    /// Serve one `{ action, payload }` message. Never throws: failures come
    /// back as `{ success: false, error }` envelopes.
    #[wasm_bindgen(js_name = handleMessage)]
    pub fn handle_message(&mut self, message: JsValue) -> JsValue {
        let response = match from_value::<serde_json::Value>(message) {
            Ok(value) => self.worker.handle_value(value),
            Err(e) => ResponseEnvelope::failure(&EngineError::MalformedMessage(e.to_string())),
        };
        // Plain objects rather than JS Maps, so the page can read `data.results`.
        response
            .serialize(&Serializer::json_compatible())
            .unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen(js_name = documentCount)]
    pub fn document_count(&self) -> usize {
        self.worker.index().len()
    }
}
