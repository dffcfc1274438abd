// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Per-machine concurrency policy for farm tasks.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Coarse per-frame cost selector chosen at submission time.
///
/// The mapping to concurrent task counts is deliberately inverted: the more
/// expensive a frame is to render, the fewer tasks one machine may run at
/// once. "Heavy" therefore yields the lowest count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcurrencyMode {
    Light,
    Medium,
    #[default]
    Heavy,
}

impl ConcurrencyMode {
    /// Number of tasks the farm may run concurrently on one machine.
    pub fn concurrent_tasks(&self) -> u32 {
        match self {
            ConcurrencyMode::Light => 3,
            ConcurrencyMode::Medium => 2,
            ConcurrencyMode::Heavy => 1,
        }
    }
}

crate::simple_display! {
    ConcurrencyMode {
        Light => "light",
        Medium => "medium",
        Heavy => "heavy",
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown concurrency mode '{0}', expected light, medium, or heavy")]
pub struct UnknownMode(pub String);

impl FromStr for ConcurrencyMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ConcurrencyMode::Light),
            "medium" => Ok(ConcurrencyMode::Medium),
            "heavy" => Ok(ConcurrencyMode::Heavy),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
