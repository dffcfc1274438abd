// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Farm-side configuration shared by submission and post-task tooling.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Settings for the farm integration: the external executables, the
/// post-task hook, and the path templates. Every field has a default so a
/// site config only overrides what differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmConfig {
    /// Farm submission command, invoked with the two descriptor file paths.
    pub submission_command: PathBuf,
    /// Post-task script reference written into the job descriptor. Emitted
    /// only when denoising is enabled on the target.
    pub post_task_script: Option<String>,
    /// External denoiser executable run by the post-task dispatcher.
    pub denoiser: PathBuf,
    /// Upper bound on a single denoiser invocation, in seconds.
    pub denoiser_timeout_secs: u64,
    /// Farm plugin identifier.
    pub plugin: String,
    /// Department tag on submitted jobs.
    pub department: String,
    /// Render engine advertised through the job environment.
    pub render_engine: String,
    /// Template matching work scene file paths (field extraction side).
    pub work_template: String,
    /// Template producing per-stream render output paths.
    pub render_template: String,
}

impl Default for FarmConfig {
    fn default() -> Self {
        FarmConfig {
            submission_command: PathBuf::from("deadlinecommand"),
            post_task_script: None,
            denoiser: PathBuf::from("idenoise"),
            denoiser_timeout_secs: 600,
            plugin: "Houdini".to_string(),
            department: "3D".to_string(),
            render_engine: "Karma".to_string(),
            work_template: "/proj/{sequence}/{shot}/work/{shot}_v{version}.hip".to_string(),
            render_template:
                "/proj/{sequence}/{shot}/renders/{output}/{aov_name}/{shot}_{output}_{aov_name}.{SEQ}.exr"
                    .to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl FarmConfig {
    /// Load a TOML config file.
    pub fn load(path: &Path) -> Result<FarmConfig, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn denoiser_timeout(&self) -> Duration {
        Duration::from_secs(self.denoiser_timeout_secs)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
