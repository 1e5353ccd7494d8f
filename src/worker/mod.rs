// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Message-passing boundary around an index.
//!
//! ```text
//! page ──{action, payload}──▶ Request ──▶ IndexWorker ──▶ Reply ──▶ {success, action, data, timestamp}
//!                                │                                  {success: false, error, timestamp}
//!                                └── decode failure ────────────────────────────┘
//! ```
//!
//! | Surface                       | Transport                         |
//! |-------------------------------|-----------------------------------|
//! | [`IndexWorker::handle_json`]  | in-process, one JSON line at a time |
//! | [`WorkerHandle`]              | tokio task + mpsc/oneshot         |
//! | `wasm::ExerciseWorker`        | JavaScript `postMessage` payloads |

mod dispatch;
mod handle;
mod protocol;

pub use dispatch::IndexWorker;
pub use handle::WorkerHandle;
pub use protocol::*;
