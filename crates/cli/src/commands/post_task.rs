// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! `fh post-task` — denoise the frames of a completed farm task.
//!
//! Meant to run on a worker, handed the task context the farm assembled.

use crate::exit_error::ExitError;
use anyhow::Context;
use fh_denoise::{Dispatcher, FrameStatus, TaskContext};
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct PostTaskArgs {
    /// Task context file (JSON)
    #[arg(long)]
    pub task: PathBuf,

    /// Farm config file (defaults to the user config, then built-ins)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub async fn handle(args: PostTaskArgs) -> anyhow::Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let raw = std::fs::read_to_string(&args.task)
        .with_context(|| format!("reading {}", args.task.display()))?;
    let ctx = TaskContext::from_json(&raw)?;

    let dispatcher = Dispatcher::from_config(&config);
    let report = dispatcher.run(&ctx).await?;

    for outcome in &report.outcomes {
        match &outcome.status {
            FrameStatus::Denoised => println!("frame {}: denoised", outcome.frame),
            FrameStatus::Failed { code, .. } => {
                println!("frame {}: failed (exit code {code:?})", outcome.frame)
            }
            FrameStatus::TimedOut => println!("frame {}: timed out", outcome.frame),
        }
    }

    if report.all_denoised() {
        Ok(())
    } else {
        let failed: Vec<String> = report
            .failed_frames()
            .iter()
            .map(i32::to_string)
            .collect();
        Err(ExitError::new(1, format!("denoise failed for frames: {}", failed.join(", "))).into())
    }
}
