// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Submission error taxonomy.
//!
//! Everything here is user-facing: the driver surfaces these instead of
//! silently continuing past a failed step.

use crate::chunker::ChunkError;
use crate::session::SessionError;
use fh_core::TargetError;
use fh_template::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Rejected before any other work begins; no temp files are created.
    #[error("submission canceled because frames per task is set below 1")]
    FramesPerTask(u32),

    #[error(transparent)]
    Validation(#[from] TargetError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("cannot create output directory {path}: {source}")]
    CreateDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Save(#[from] SessionError),

    /// User declined the unsaved-changes prompt; no farm call was made and
    /// no temp files were left behind.
    #[error("submission canceled because file is not saved")]
    Cancelled,

    #[error(transparent)]
    Chunk(#[from] ChunkError),

    #[error("cannot stage descriptor files: {0}")]
    Stage(std::io::Error),

    #[error("cannot run submission command {command}: {source}")]
    Spawn {
        command: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The farm tool ran and reported failure. Surfaced as a hard error
    /// rather than logged and discarded.
    #[error("farm submission command failed (exit code {code:?}): {stderr}")]
    Tool { code: Option<i32>, stderr: String },
}
