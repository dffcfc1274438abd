// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! The per-task frame loop around the external denoiser.

use crate::args::denoiser_arguments;
use crate::context::TaskContext;
use crate::error::DenoiseError;
use fh_core::{FarmConfig, SequenceToken};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

const PRIMARY_STREAM: &str = "main";
const DENOISE_STREAM: &str = "denoise";

/// What happened to one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameStatus {
    Denoised,
    /// The denoiser ran and exited non-zero.
    Failed { code: Option<i32>, stderr: String },
    /// The denoiser exceeded the configured timeout and was killed.
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOutcome {
    pub frame: i32,
    pub status: FrameStatus,
}

/// Per-frame outcomes for one task, in frame order.
///
/// A failing frame never aborts the rest of the task; the report is how
/// partial failure stays observable.
#[derive(Debug, Clone, Default)]
pub struct TaskReport {
    pub outcomes: Vec<FrameOutcome>,
}

impl TaskReport {
    pub fn failed_frames(&self) -> Vec<i32> {
        self.outcomes
            .iter()
            .filter(|o| o.status != FrameStatus::Denoised)
            .map(|o| o.frame)
            .collect()
    }

    pub fn all_denoised(&self) -> bool {
        self.failed_frames().is_empty()
    }
}

pub struct Dispatcher {
    denoiser: PathBuf,
    timeout: Duration,
}

impl Dispatcher {
    pub fn new(denoiser: PathBuf, timeout: Duration) -> Self {
        Dispatcher { denoiser, timeout }
    }

    pub fn from_config(config: &FarmConfig) -> Self {
        Dispatcher::new(config.denoiser.clone(), config.denoiser_timeout())
    }

    /// Denoise every frame of the task, strictly sequentially.
    pub async fn run(&self, ctx: &TaskContext) -> Result<TaskReport, DenoiseError> {
        let (directory, filename) = ctx
            .primary_stream()
            .ok_or(DenoiseError::NoPrimaryStream)?;
        let denoise_directory = denoise_directory(directory);
        let flags = denoiser_arguments(&ctx.render_aovs);

        let mut report = TaskReport::default();
        for frame in ctx.frames() {
            let source_name = substitute_frame(filename, frame);
            let source = format!("{directory}/{source_name}");
            let output = format!(
                "{denoise_directory}/{}",
                denoise_file_name(&source_name)
            );
            let status = self.denoise_one(&source, &output, &flags).await?;
            if let FrameStatus::Failed { code, .. } = &status {
                tracing::warn!(frame, ?code, "denoiser failed");
            } else if status == FrameStatus::TimedOut {
                tracing::warn!(frame, timeout_secs = self.timeout.as_secs(), "denoiser timed out");
            }
            report.outcomes.push(FrameOutcome { frame, status });
        }
        Ok(report)
    }

    async fn denoise_one(
        &self,
        source: &str,
        output: &str,
        flags: &[String],
    ) -> Result<FrameStatus, DenoiseError> {
        tracing::info!(
            command = %self.denoiser.display(),
            source,
            output,
            flags = %flags.join(" "),
            "running denoise command"
        );
        let mut child = Command::new(&self.denoiser);
        child
            .arg(source)
            .arg(output)
            .args(flags)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let result = tokio::time::timeout(self.timeout, child.output()).await;
        match result {
            Err(_) => Ok(FrameStatus::TimedOut),
            Ok(Err(source)) => Err(DenoiseError::Spawn {
                command: self.denoiser.clone(),
                source,
            }),
            Ok(Ok(out)) if out.status.success() => Ok(FrameStatus::Denoised),
            Ok(Ok(out)) => Ok(FrameStatus::Failed {
                code: out.status.code(),
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            }),
        }
    }
}

/// Substitute the frame number into the filename's printf-style sequence
/// token.
fn substitute_frame(filename: &str, frame: i32) -> String {
    let token = SequenceToken::find_printf(filename).unwrap_or(SequenceToken::DEFAULT);
    token.substitute(filename, frame)
}

/// Replace the rightmost occurrence of the primary stream name with the
/// denoise stream name. Render names may legitimately contain the stream
/// name (a shot called `mainCam`), so only the last occurrence changes.
pub fn denoise_file_name(filename: &str) -> String {
    match filename.rfind(PRIMARY_STREAM) {
        Some(at) => {
            let mut name = String::with_capacity(filename.len() + 3);
            name.push_str(&filename[..at]);
            name.push_str(DENOISE_STREAM);
            name.push_str(&filename[at + PRIMARY_STREAM.len()..]);
            name
        }
        None => filename.to_string(),
    }
}

/// Sibling directory of the primary stream directory: the trailing stream
/// segment swapped for the denoise stream name.
pub fn denoise_directory(directory: &str) -> String {
    match directory.strip_suffix(PRIMARY_STREAM) {
        Some(prefix) => format!("{prefix}{DENOISE_STREAM}"),
        None => format!("{directory}/{DENOISE_STREAM}"),
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
