// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voxlog - voice-driven time registration.
//!
//! This is the binary entry point for the Voxlog assistant.

mod flow;
mod prompt;
mod shell;

use clap::{Parser, Subcommand};
use colored::Colorize;

use voxlog_config::VoxlogConfig;

/// Voxlog - voice-driven time registration.
#[derive(Parser, Debug)]
#[command(name = "voxlog", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch an interactive registration session.
    Shell,
    /// Register a single utterance and exit.
    Register {
        /// The utterance text, e.g. "registra 3 horas en Acme".
        text: Vec<String>,
    },
    /// Print the resolved configuration with secrets masked.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match voxlog_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            voxlog_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Some(Commands::Shell) => shell::run_shell(config).await,
        Some(Commands::Register { text }) => shell::run_register(config, &text.join(" ")).await,
        Some(Commands::Config) => {
            print_config(&config);
            Ok(())
        }
        None => {
            println!("voxlog: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// Prints the resolved configuration as TOML, with secrets masked.
fn print_config(config: &VoxlogConfig) {
    let mut redacted = config.clone();
    if redacted.auth.client_secret.is_some() {
        redacted.auth.client_secret = Some("***".into());
    }
    if redacted.auth.access_token.is_some() {
        redacted.auth.access_token = Some("***".into());
    }
    match toml::to_string_pretty(&redacted) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => eprintln!("could not render config: {e}"),
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "voxlog={log_level},voxlog_agent={log_level},voxlog_backend={log_level},\
             voxlog_auth={log_level},voxlog_match={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
