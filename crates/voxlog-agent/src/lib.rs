// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent service integration for the Voxlog assistant.
//!
//! This crate drives the conversation protocol against the hosted agent
//! service -- create thread, append message, run, poll, fetch reply -- and
//! interprets the assistant's JSON reply into an activity draft.

pub mod client;
pub mod interpret;
pub mod types;

pub use client::AgentClient;
pub use interpret::interpret_reply;
