// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Project reconciliation for the Voxlog assistant.
//!
//! Resolves the free-text project title an assistant extracted against the
//! live project directory, deciding whether the activity can be filed
//! without interaction or which candidates the user must choose from.

pub mod reconcile;

pub use reconcile::{Reconciliation, preferred_candidate, reconcile};
