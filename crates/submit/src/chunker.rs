// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Frame-range chunking seam.
//!
//! The "smart spreading" algorithm lives outside this crate; the driver
//! consumes it through this trait when the submitter asks for it.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("frame chunking failed: {0}")]
pub struct ChunkError(pub String);

pub trait FrameChunker {
    /// Partition `range` into per-task sub-ranges of at most
    /// `frames_per_task` frames, returning the farm's range string.
    fn chunk(&self, range: &str, frames_per_task: u32) -> Result<String, ChunkError>;
}

/// Hands the range back untouched. Stands in wherever no smart spreader is
/// wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughChunker;

impl FrameChunker for PassthroughChunker {
    fn chunk(&self, range: &str, _frames_per_task: u32) -> Result<String, ChunkError> {
        Ok(range.to_string())
    }
}
