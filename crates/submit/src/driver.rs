// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! The submission driver: one call, one farm job.
//!
//! Orchestrates validation, path resolution, directory creation, the
//! unsaved-changes gate, descriptor staging, and the farm tool invocation,
//! in that order. Fails fast; nothing is retried here.

use crate::builder::build_descriptors;
use crate::chunker::FrameChunker;
use crate::error::SubmitError;
use crate::session::{HostSession, Severity, SubmitPrompt};
use fh_core::{ConcurrencyMode, FarmConfig, OutputStream, RenderTarget, SequenceToken};
use fh_template::PathResolver;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// One submission, fully specified.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    pub target: RenderTarget,
    /// Job name shown on the farm.
    pub submission_name: String,
    pub priority: u32,
    pub frames_per_task: u32,
    /// Ask the chunker to spread the range into per-task chunks.
    pub smart_frames: bool,
    pub mode: ConcurrencyMode,
}

impl SubmitRequest {
    /// Request with defaults derived from the target: the job name combines
    /// the scene file stem with the render name.
    pub fn new(target: RenderTarget) -> Self {
        let stem = Path::new(&target.scene_file)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| target.scene_file.clone());
        let submission_name = format!("{stem} ({})", target.name);
        SubmitRequest {
            target,
            submission_name,
            priority: 50,
            frames_per_task: 1,
            smart_frames: false,
            mode: ConcurrencyMode::default(),
        }
    }

    fh_core::setters! {
        into {
            submission_name: String,
        }
        set {
            priority: u32,
            frames_per_task: u32,
            smart_frames: bool,
            mode: ConcurrencyMode,
        }
    }
}

/// What the farm tool reported on success.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// Resolved output streams, main first, in descriptor index order.
    pub streams: Vec<OutputStream>,
    /// Farm tool stdout, verbatim.
    pub output: String,
}

/// Borrowed collaborators for one or more submissions. Nothing here is
/// ambient; the caller owns every seam.
pub struct SubmitDriver<'a> {
    config: &'a FarmConfig,
    resolver: &'a PathResolver,
    chunker: &'a dyn FrameChunker,
    session: &'a dyn HostSession,
    prompt: &'a dyn SubmitPrompt,
}

impl<'a> SubmitDriver<'a> {
    pub fn new(
        config: &'a FarmConfig,
        resolver: &'a PathResolver,
        chunker: &'a dyn FrameChunker,
        session: &'a dyn HostSession,
        prompt: &'a dyn SubmitPrompt,
    ) -> Self {
        SubmitDriver {
            config,
            resolver,
            chunker,
            session,
            prompt,
        }
    }

    /// Run one submission end to end.
    ///
    /// Order matters: frames-per-task and target validation reject before
    /// any side effect; output directories are created before the farm sees
    /// the job so workers never race the filesystem; the unsaved-changes
    /// gate runs before anything is staged.
    pub async fn submit(&self, request: &SubmitRequest) -> Result<SubmissionOutcome, SubmitError> {
        if request.frames_per_task < 1 {
            return Err(SubmitError::FramesPerTask(request.frames_per_task));
        }
        request.target.validate()?;

        let streams = self.resolve_streams(&request.target)?;
        for stream in &streams {
            let directory = stream.directory();
            tokio::fs::create_dir_all(directory)
                .await
                .map_err(|source| SubmitError::CreateDirectory {
                    path: directory.to_string(),
                    source,
                })?;
            tracing::debug!(stream = %stream.kind, directory, "output directory ready");
        }

        if self.session.has_unsaved_changes() {
            if self
                .prompt
                .confirm("Current file has unsaved changes, would you like to save?")
            {
                self.session.save()?;
            } else {
                self.prompt.notify(
                    Severity::Important,
                    "Submission canceled because file is not saved.",
                );
                return Err(SubmitError::Cancelled);
            }
        }

        let mut frames = request.target.frame_range.to_string();
        if request.smart_frames {
            frames = self.chunker.chunk(&frames, request.frames_per_task)?;
        }

        let (job, plugin) = build_descriptors(request, self.config, &streams, &frames);

        let staging = tempfile::tempdir().map_err(SubmitError::Stage)?;
        let job_path = staging.path().join("job_info.txt");
        let plugin_path = staging.path().join("plugin_info.txt");
        tokio::fs::write(&job_path, job.to_string())
            .await
            .map_err(SubmitError::Stage)?;
        tokio::fs::write(&plugin_path, plugin.to_string())
            .await
            .map_err(SubmitError::Stage)?;

        let output = self.invoke(&job_path, &plugin_path).await?;

        if let Err(error) = staging.close() {
            tracing::warn!(%error, "could not remove staging directory");
        }

        tracing::info!(name = %request.submission_name, "job submitted");
        Ok(SubmissionOutcome { streams, output })
    }

    /// Resolve one output path per enabled stream, main first.
    fn resolve_streams(&self, target: &RenderTarget) -> Result<Vec<OutputStream>, SubmitError> {
        let (width, height) = target.resolution;
        let mut streams = Vec::new();
        for kind in target.toggles.enabled_streams() {
            let path = self.resolver.resolve(
                &target.scene_file,
                &target.name,
                kind.name(),
                width,
                height,
                SequenceToken::DEFAULT,
            )?;
            streams.push(OutputStream::new(kind, path));
        }
        Ok(streams)
    }

    async fn invoke(&self, job_path: &Path, plugin_path: &Path) -> Result<String, SubmitError> {
        let command = &self.config.submission_command;
        tracing::debug!(command = %command.display(), "invoking farm submission command");
        let output = Command::new(command)
            .arg(job_path)
            .arg(plugin_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| SubmitError::Spawn {
                command: command.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(SubmitError::Tool {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
