// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Host-session and prompt seams.
//!
//! The pipeline never reaches for an ambient application object; whoever
//! owns the scene hands these in at the call boundary.

use thiserror::Error;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Message,
    Important,
    Error,
}

fh_core::simple_display! {
    Severity {
        Message => "message",
        Important => "important",
        Error => "error",
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("could not save scene: {0}")]
pub struct SessionError(pub String);

/// Scene state owned by the host application.
pub trait HostSession {
    fn has_unsaved_changes(&self) -> bool;

    /// Persist the scene. Called only after the user confirms.
    fn save(&self) -> Result<(), SessionError>;
}

/// Blocking user-facing prompt surface.
pub trait SubmitPrompt {
    /// Yes/no confirmation; `false` aborts the submission.
    fn confirm(&self, message: &str) -> bool;

    /// Severity-tagged notification shown to the user.
    fn notify(&self, severity: Severity, message: &str);
}

#[cfg(any(test, feature = "test-support"))]
pub mod fake {
    use super::{HostSession, SessionError, Severity, SubmitPrompt};
    use parking_lot::Mutex;

    /// Scripted host session for tests.
    pub struct FakeSession {
        dirty: bool,
        saved: Mutex<bool>,
    }

    impl FakeSession {
        pub fn clean() -> Self {
            FakeSession {
                dirty: false,
                saved: Mutex::new(false),
            }
        }

        pub fn dirty() -> Self {
            FakeSession {
                dirty: true,
                saved: Mutex::new(false),
            }
        }

        pub fn was_saved(&self) -> bool {
            *self.saved.lock()
        }
    }

    impl HostSession for FakeSession {
        fn has_unsaved_changes(&self) -> bool {
            self.dirty
        }

        fn save(&self) -> Result<(), SessionError> {
            *self.saved.lock() = true;
            Ok(())
        }
    }

    /// Prompt with a scripted confirm answer; records notifications.
    pub struct FakePrompt {
        answer: bool,
        notices: Mutex<Vec<(Severity, String)>>,
    }

    impl FakePrompt {
        pub fn answering(answer: bool) -> Self {
            FakePrompt {
                answer,
                notices: Mutex::new(Vec::new()),
            }
        }

        pub fn notices(&self) -> Vec<(Severity, String)> {
            self.notices.lock().clone()
        }
    }

    impl SubmitPrompt for FakePrompt {
        fn confirm(&self, _message: &str) -> bool {
            self.answer
        }

        fn notify(&self, severity: Severity, message: &str) {
            self.notices.lock().push((severity, message.to_string()));
        }
    }
}
