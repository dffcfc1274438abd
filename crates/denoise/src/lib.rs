// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fh-denoise: the post-task denoise dispatcher.
//!
//! Runs on a farm worker once per completed task: locates the primary
//! output stream, walks the task's frames, and invokes the external
//! denoiser once per frame with AOV-derived arguments.

pub mod args;
pub mod context;
pub mod dispatch;
pub mod error;

pub use args::denoiser_arguments;
pub use context::{render_aovs_from_extra_info, TaskContext};
pub use dispatch::{Dispatcher, FrameOutcome, FrameStatus, TaskReport};
pub use error::DenoiseError;
