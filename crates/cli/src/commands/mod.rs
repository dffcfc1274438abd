// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! CLI command implementations

pub mod post_task;
pub mod submit;

use anyhow::Context;
use fh_core::FarmConfig;
use std::path::Path;

/// Load the farm config: an explicit `--config` path, else the user config
/// file if present, else built-in defaults.
pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<FarmConfig> {
    if let Some(path) = path {
        return FarmConfig::load(path).with_context(|| format!("loading {}", path.display()));
    }
    if let Some(default) = dirs::config_dir().map(|dir| dir.join("farmhand/farm.toml")) {
        if default.is_file() {
            return FarmConfig::load(&default)
                .with_context(|| format!("loading {}", default.display()));
        }
    }
    Ok(FarmConfig::default())
}
