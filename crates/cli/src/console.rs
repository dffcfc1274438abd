// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Terminal implementations of the submission seams.

use fh_submit::{HostSession, SessionError, Severity, SubmitPrompt};
use std::io::{BufRead, Write};

/// Interactive yes/no prompt on the controlling terminal.
///
/// `assume_yes` (the `--yes` flag) answers every confirmation without
/// prompting, for scripted use.
pub struct ConsolePrompt {
    assume_yes: bool,
}

impl ConsolePrompt {
    pub fn new(assume_yes: bool) -> Self {
        ConsolePrompt { assume_yes }
    }
}

impl SubmitPrompt for ConsolePrompt {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{message} [y/N] ");
        if std::io::stderr().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Message => eprintln!("{message}"),
            Severity::Important => eprintln!("! {message}"),
            Severity::Error => eprintln!("error: {message}"),
        }
    }
}

/// A scene that is already a file on disk: the CLI submits saved scene
/// files, so there is never anything to save.
pub struct SavedScene;

impl HostSession for SavedScene {
    fn has_unsaved_changes(&self) -> bool {
        false
    }

    fn save(&self) -> Result<(), SessionError> {
        Ok(())
    }
}
