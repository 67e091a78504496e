// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `voxlog shell` and `voxlog register` command implementations.
//!
//! The shell is an interactive REPL: each line is one utterance, processed
//! to completion before the next prompt appears (utterances never overlap).
//! `register` runs the same flow once for a single utterance given on the
//! command line.

use std::sync::Arc;

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio_util::sync::CancellationToken;
use tracing::info;

use voxlog_agent::AgentClient;
use voxlog_backend::BackendClient;
use voxlog_config::VoxlogConfig;
use voxlog_core::VoxlogError;

use crate::flow::{Flow, UtteranceOutcome};
use crate::prompt::ConsolePrompter;

/// Builds the flow from configuration: token provider, agent client, and
/// the backend client serving as both directory and sink.
fn build_flow(config: &VoxlogConfig) -> Result<Flow, VoxlogError> {
    let tokens = voxlog_auth::provider_from_config(&config.auth)?;
    let agent = AgentClient::new(&config.ai)?;
    let backend = Arc::new(BackendClient::new(&config.backend, tokens.clone())?);

    Ok(Flow::new(
        agent,
        tokens,
        backend.clone(),
        backend,
        config.ai.scope.clone(),
    ))
}

/// Runs the `voxlog shell` interactive REPL.
pub async fn run_shell(config: VoxlogConfig) -> Result<(), VoxlogError> {
    let flow = build_flow(&config)?;

    let mut rl = DefaultEditor::new()
        .map_err(|e| VoxlogError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", config.agent.name.bold().green());
    println!(
        "Speak-to-text goes elsewhere; type the utterance here. {} to exit.\n",
        "/quit".yellow()
    );

    let prompt = format!("{}> ", config.agent.name.green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                process_line(&flow, trimmed, &mut rl).await;
            }
            Err(ReadlineError::Interrupted) => break, // Ctrl+C
            Err(ReadlineError::Eof) => break,         // Ctrl+D
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Runs one utterance from the command line (`voxlog register <text>`).
pub async fn run_register(config: VoxlogConfig, utterance: &str) -> Result<(), VoxlogError> {
    let trimmed = utterance.trim();
    if trimmed.is_empty() {
        return Err(VoxlogError::Config("register needs an utterance".into()));
    }

    let flow = build_flow(&config)?;
    let mut rl = DefaultEditor::new()
        .map_err(|e| VoxlogError::Internal(format!("failed to initialize readline: {e}")))?;

    process_line(&flow, trimmed, &mut rl).await;
    Ok(())
}

/// Processes one utterance and reports the outcome on the terminal.
///
/// Failures are reported here, short and human-readable; the technical
/// detail went to the log at the failure site.
async fn process_line(flow: &Flow, utterance: &str, rl: &mut DefaultEditor) {
    let mut prompter = ConsolePrompter::new(rl);
    let cancel = CancellationToken::new();

    match flow.process_utterance(utterance, &mut prompter, &cancel).await {
        Ok(UtteranceOutcome::Submitted { guid }) => {
            info!(guid = guid.as_str(), "registered from shell");
            println!("{}", "activity registered".green());
        }
        Ok(UtteranceOutcome::NoReply) => {
            println!("{}", "the assistant had no answer for that".yellow());
        }
        Ok(UtteranceOutcome::Abandoned) => {
            println!("{}", "cancelled, nothing registered".dimmed());
        }
        Err(e) if e.is_auth_required() => {
            eprintln!("{}: {e}", "sign-in needed".yellow());
        }
        Err(e) => {
            eprintln!("{}: {e}", "error".red());
        }
    }
}
