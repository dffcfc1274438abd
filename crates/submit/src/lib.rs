// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fh-submit: farm job submission.
//!
//! Descriptor construction, the frame-chunker seam, the host-session and
//! prompt seams, and the driver that orchestrates one submission.

pub mod builder;
pub mod chunker;
pub mod driver;
pub mod error;
pub mod session;

pub use builder::build_descriptors;
pub use chunker::{ChunkError, FrameChunker, PassthroughChunker};
pub use driver::{SubmissionOutcome, SubmitDriver, SubmitRequest};
pub use error::SubmitError;
#[cfg(any(test, feature = "test-support"))]
pub use session::fake::{FakePrompt, FakeSession};
pub use session::{HostSession, SessionError, Severity, SubmitPrompt};
