// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Console implementation of the flow's [`Prompter`].
//!
//! Selection and confirmation run over readline; Ctrl+C and Ctrl+D at any
//! prompt cancel the utterance, never the whole shell.

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use voxlog_core::{ActivityDraft, Project, VoxlogError};

use crate::flow::{ConfirmDecision, Prompter};

/// Prompter that talks to the user on the terminal.
pub struct ConsolePrompter<'a> {
    rl: &'a mut DefaultEditor,
}

impl<'a> ConsolePrompter<'a> {
    pub fn new(rl: &'a mut DefaultEditor) -> Self {
        Self { rl }
    }

    /// Reads one line; `None` means the user backed out.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, VoxlogError> {
        match self.rl.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(VoxlogError::Internal(format!("readline failed: {e}"))),
        }
    }
}

impl Prompter for ConsolePrompter<'_> {
    fn choose_project(
        &mut self,
        title: &str,
        choices: &[Project],
        default: usize,
    ) -> Result<Option<Project>, VoxlogError> {
        if title.trim().is_empty() {
            println!("{}", "No project title was extracted; pick one:".yellow());
        } else {
            println!("Select the project for \"{}\":", title.bold());
        }
        for (i, project) in choices.iter().enumerate() {
            let marker = if i == default { "*" } else { " " };
            println!("  {marker} {} {}", format!("[{}]", i + 1).cyan(), project.name);
        }

        loop {
            let Some(line) = self.read_line("project (empty = *, c = cancel)> ")? else {
                return Ok(None);
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(Some(choices[default].clone()));
            }
            if trimmed.eq_ignore_ascii_case("c") {
                return Ok(None);
            }
            match trimmed.parse::<usize>() {
                Ok(n) if (1..=choices.len()).contains(&n) => {
                    return Ok(Some(choices[n - 1].clone()));
                }
                _ => println!(
                    "{}",
                    format!("enter a number between 1 and {}", choices.len()).red()
                ),
            }
        }
    }

    fn confirm(&mut self, mut draft: ActivityDraft) -> Result<ConfirmDecision, VoxlogError> {
        loop {
            println!("{}", "About to register:".bold());
            println!("  {} {}", "project:".dimmed(), draft.title);
            println!("  {} {}", "hours:".dimmed(), draft.hours);
            println!("  {} {}", "date:".dimmed(), draft.registered_on);
            if !draft.note.is_empty() {
                println!("  {} {}", "note:".dimmed(), draft.note);
            }

            let Some(line) = self.read_line("register? [Y/n/e = edit]> ")? else {
                return Ok(ConfirmDecision::Cancel);
            };
            match line.trim().to_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(ConfirmDecision::Submit(draft)),
                "n" | "no" => return Ok(ConfirmDecision::Cancel),
                "e" | "edit" => {
                    if self.edit_draft(&mut draft)?.is_none() {
                        return Ok(ConfirmDecision::Cancel);
                    }
                }
                _ => println!("{}", "answer y, n, or e".red()),
            }
        }
    }
}

impl ConsolePrompter<'_> {
    /// Edits hours, date, and note in place. Empty input keeps the current
    /// value; `None` means the user backed out entirely.
    fn edit_draft(&mut self, draft: &mut ActivityDraft) -> Result<Option<()>, VoxlogError> {
        let Some(line) = self.read_line(&format!("hours [{}]> ", draft.hours))? else {
            return Ok(None);
        };
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            match trimmed.parse::<f64>() {
                Ok(hours) if hours >= 0.0 => draft.hours = hours,
                _ => println!("{}", "not a non-negative number, keeping the current value".red()),
            }
        }

        let Some(line) = self.read_line(&format!("date [{}] (YYYY-MM-DD)> ", draft.registered_on))?
        else {
            return Ok(None);
        };
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            match trimmed.parse() {
                Ok(date) => draft.registered_on = date,
                Err(_) => println!("{}", "not a valid date, keeping the current value".red()),
            }
        }

        let Some(line) = self.read_line(&format!("note [{}]> ", draft.note))? else {
            return Ok(None);
        };
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            draft.note = trimmed.to_string();
        }

        Ok(Some(()))
    }
}
