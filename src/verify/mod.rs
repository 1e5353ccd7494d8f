// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: index invariants as checkable code.
//!
//! Two complementary tools:
//!
//! 1. [`ExerciseIndex::verify`](crate::ExerciseIndex::verify) walks the store and
//!    every derived index and reports each violation it finds. Tests and the
//!    property suite lean on it.
//!
//! 2. Runtime [`contracts`] that run the same walk after every write in debug
//!    builds and panic on the first violation. Free in release.

mod report;
pub mod contracts;

pub use report::*;
