// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recovers a structured activity draft from assistant free text.
//!
//! The assistant is prompted to answer with a JSON object, but often wraps
//! it in a markdown code fence. Fences are stripped before parsing; missing
//! fields fall back to defaults. Malformed output is a `Parse` error the
//! caller surfaces to the user -- it is not retried, since the agent will
//! not self-correct without re-prompting.

use chrono::NaiveDate;
use serde::Deserialize;

use voxlog_core::{ActivityDraft, VoxlogError};

/// The JSON object the assistant is prompted to produce. Field names are
/// the assistant's contract, not ours.
#[derive(Debug, Deserialize)]
struct AgentReply {
    #[serde(default)]
    titulo: Option<String>,
    #[serde(default)]
    horas: Option<f64>,
    #[serde(default)]
    observacion: Option<String>,
    #[serde(default)]
    fecharegistro: Option<NaiveDate>,
}

/// Parses the assistant's raw reply into an activity draft.
///
/// Defaults for missing fields: hours 0, note empty, registration date
/// `today`. The resolved project stays `None` until reconciliation.
pub fn interpret_reply(raw: &str, today: NaiveDate) -> Result<ActivityDraft, VoxlogError> {
    let cleaned = strip_fences(raw);
    let reply: AgentReply = serde_json::from_str(&cleaned).map_err(|e| VoxlogError::Parse {
        message: format!("assistant reply is not valid JSON: {e}"),
    })?;

    Ok(ActivityDraft {
        title: reply.titulo.unwrap_or_default(),
        hours: reply.horas.unwrap_or(0.0),
        note: reply.observacion.unwrap_or_default(),
        registered_on: reply.fecharegistro.unwrap_or(today),
        project: None,
    })
}

/// Removes markdown code-fence markers around the JSON payload.
fn strip_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}
