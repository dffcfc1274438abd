// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! `fh` — render-farm job submission and post-task denoising.

mod commands;
mod console;
mod exit_error;

use clap::Parser;
use exit_error::ExitError;

#[derive(Parser)]
#[command(name = "fh", version, about = "Render-farm job submission and post-task denoising")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Submit a render target to the farm
    Submit(commands::submit::SubmitArgs),
    /// Denoise the frames of a completed farm task
    PostTask(commands::post_task::PostTaskArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Submit(args) => commands::submit::handle(args).await,
        Command::PostTask(args) => commands::post_task::handle(args).await,
    };

    if let Err(error) = result {
        if let Some(exit) = error.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("{exit}");
            }
            std::process::exit(exit.code);
        }
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
