// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! `fh submit` — send one render target to the farm.

use crate::console::{ConsolePrompt, SavedScene};
use crate::exit_error::ExitError;
use anyhow::Context;
use fh_core::{ConcurrencyMode, RenderTarget};
use fh_submit::{PassthroughChunker, SubmitDriver, SubmitError, SubmitRequest};
use fh_template::PathResolver;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct SubmitArgs {
    /// Render target description (TOML)
    #[arg(long)]
    pub target: PathBuf,

    /// Farm config file (defaults to the user config, then built-ins)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the job name shown on the farm
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, default_value_t = 50)]
    pub priority: u32,

    #[arg(long, default_value_t = 1)]
    pub frames_per_task: u32,

    /// Spread the frame range into per-task chunks
    #[arg(long)]
    pub smart_frames: bool,

    /// Worker concurrency mode: light, medium, or heavy
    #[arg(long, default_value = "heavy")]
    pub mode: ConcurrencyMode,

    /// Answer yes to every prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub async fn handle(args: SubmitArgs) -> anyhow::Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let raw = std::fs::read_to_string(&args.target)
        .with_context(|| format!("reading {}", args.target.display()))?;
    let target: RenderTarget = toml::from_str(&raw)
        .with_context(|| format!("parsing {}", args.target.display()))?;

    let resolver = PathResolver::from_patterns(&config.work_template, &config.render_template)?;
    let mut request = SubmitRequest::new(target)
        .priority(args.priority)
        .frames_per_task(args.frames_per_task)
        .smart_frames(args.smart_frames)
        .mode(args.mode);
    if let Some(name) = args.name {
        request = request.submission_name(name);
    }

    let session = SavedScene;
    let prompt = ConsolePrompt::new(args.yes);
    let driver = SubmitDriver::new(&config, &resolver, &PassthroughChunker, &session, &prompt);

    match driver.submit(&request).await {
        Ok(outcome) => {
            println!("Submitted '{}'", request.submission_name);
            for stream in &outcome.streams {
                println!("  {}: {}", stream.kind, stream.path);
            }
            let output = outcome.output.trim_end();
            if !output.is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        // The prompt already told the user; a bare exit code is enough.
        Err(SubmitError::Cancelled) => Err(ExitError::new(1, "").into()),
        Err(error) => Err(error.into()),
    }
}
