// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend API integration for the Voxlog assistant.
//!
//! Implements the [`voxlog_core::ProjectDirectory`] and
//! [`voxlog_core::ActivitySink`] collaborator traits over the
//! time-registration backend's REST API.

pub mod client;

pub use client::BackendClient;
