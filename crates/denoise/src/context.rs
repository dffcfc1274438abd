// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! The task context handed to the dispatcher.
//!
//! An explicit value, never an ambient handle: whoever talks to the farm
//! assembles one and passes it in.

use crate::error::DenoiseError;
use serde::{Deserialize, Serialize};

/// Everything the dispatcher needs about one completed farm task.
///
/// `output_directories` and `output_filenames` are aligned by index, in the
/// same order the job descriptor declared them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskContext {
    pub output_directories: Vec<String>,
    pub output_filenames: Vec<String>,
    /// Enabled AOV tokens, as carried through the job's extra-info key.
    pub render_aovs: Vec<String>,
    pub start_frame: i32,
    pub end_frame: i32,
}

impl TaskContext {
    pub fn from_json(raw: &str) -> Result<TaskContext, DenoiseError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Aligned `(directory, filename)` pair of the primary stream: the first
    /// directory whose last path segment is `main`.
    pub fn primary_stream(&self) -> Option<(&str, &str)> {
        self.output_directories
            .iter()
            .zip(&self.output_filenames)
            .find(|(directory, _)| {
                directory.rsplit('/').next().unwrap_or(directory.as_str()) == "main"
            })
            .map(|(directory, filename)| (directory.as_str(), filename.as_str()))
    }

    /// Frame numbers covered by the task, inclusive on both ends.
    pub fn frames(&self) -> impl Iterator<Item = i32> {
        self.start_frame..=self.end_frame
    }
}

/// Decode the AOV list from the job's raw extra-info value, e.g.
/// `RenderAOVs=["beauty","albedo"]`.
pub fn render_aovs_from_extra_info(raw: &str) -> Result<Vec<String>, DenoiseError> {
    let list = raw
        .strip_prefix("RenderAOVs=")
        .ok_or_else(|| DenoiseError::ExtraInfo(raw.to_string()))?;
    Ok(serde_json::from_str(list)?)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
