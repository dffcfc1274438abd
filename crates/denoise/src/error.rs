// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Dispatcher error taxonomy.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DenoiseError {
    /// No aligned output pair names a directory whose last segment is the
    /// primary stream name. Upstream never submits a denoising job without
    /// one, so this means the task metadata is malformed.
    #[error("no primary output stream found, nothing to denoise")]
    NoPrimaryStream,

    #[error("cannot parse task context: {0}")]
    Context(#[from] serde_json::Error),

    #[error("extra-info value does not carry an AOV list: {0:?}")]
    ExtraInfo(String),

    /// The denoiser executable could not be started at all. Per-frame
    /// failures are reported through the task report instead.
    #[error("cannot run denoiser {command}: {source}")]
    Spawn {
        command: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
