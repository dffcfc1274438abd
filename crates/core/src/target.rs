// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! The render target, assembled from host scene state just before
//! submission and never persisted past the call.

use crate::frame::FrameRange;
use crate::meta::{self, MetaEntry};
use crate::stream::StreamKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output toggles controlling which streams a submission declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputToggles {
    /// Primitive-level cryptomatte.
    pub prim_crypto: bool,
    /// Material-level cryptomatte.
    pub mtl_crypto: bool,
    pub denoise: bool,
    /// Deep camera map output.
    pub deep: bool,
}

impl OutputToggles {
    /// Enabled stream kinds in declaration order: main always first, crypto
    /// if either cryptomatte toggle is set, then denoise, then deep.
    pub fn enabled_streams(&self) -> Vec<StreamKind> {
        let mut kinds = vec![StreamKind::Main];
        if self.prim_crypto || self.mtl_crypto {
            kinds.push(StreamKind::Crypto);
        }
        if self.denoise {
            kinds.push(StreamKind::Denoise);
        }
        if self.deep {
            kinds.push(StreamKind::Deep);
        }
        kinds
    }
}

/// Everything the submission pipeline needs to know about the thing being
/// rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderTarget {
    /// User-set render name; must be non-empty and alphanumeric.
    pub name: String,
    /// Path to the render driver inside the renderable graph.
    pub rop_path: String,
    /// Scene file the farm workers open.
    pub scene_file: String,
    /// Host application version as `major.minor`.
    pub host_version: String,
    pub frame_range: FrameRange,
    pub resolution: (u32, u32),
    #[serde(default)]
    pub toggles: OutputToggles,
    /// Enabled AOV tokens, light groups included (`LG_` prefixed).
    #[serde(default)]
    pub aovs: Vec<String>,
    /// Metadata entries stamped into the render.
    #[serde(default = "default_metadata")]
    pub metadata: Vec<MetaEntry>,
    /// Number of upstream inputs connected to the render node.
    #[serde(default)]
    pub inputs: u32,
}

fn default_metadata() -> Vec<MetaEntry> {
    vec![MetaEntry::colorspace()]
}

/// Pre-submission validation failures, surfaced to the user before any side
/// effect occurs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("name is not defined, set the name parameter before submitting")]
    EmptyName,

    #[error("name '{0}' is not alphanumeric, use only letters (a-z) and numbers (0-9)")]
    NameNotAlphanumeric(String),

    #[error("render node has no input, connect it to the stage to render")]
    NoInput,

    #[error("metadata key '{0}' is invalid, use only letters, numbers, and underscores")]
    InvalidMetadataKey(String),

    #[error("light group '{0}' is invalid, use only letters, numbers, and underscores")]
    InvalidLightGroup(String),
}

impl RenderTarget {
    /// Check everything the user can get wrong before any side effect.
    pub fn validate(&self) -> Result<(), TargetError> {
        if self.name.is_empty() {
            return Err(TargetError::EmptyName);
        }
        if !self.name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(TargetError::NameNotAlphanumeric(self.name.clone()));
        }
        if self.inputs == 0 {
            return Err(TargetError::NoInput);
        }
        for entry in &self.metadata {
            if !meta::valid_key(&entry.key) {
                return Err(TargetError::InvalidMetadataKey(entry.key.clone()));
            }
        }
        for aov in &self.aovs {
            if let Some(group) = aov.strip_prefix("LG_") {
                if !meta::valid_key(group) {
                    return Err(TargetError::InvalidLightGroup(aov.clone()));
                }
            }
        }
        Ok(())
    }
}

crate::builder! {
    pub struct RenderTargetBuilder => RenderTarget {
        into {
            name: String = "beautyPass",
            rop_path: String = "/stage/render/usdrender_rop",
            scene_file: String = "/proj/sq010/sh010/work/sh010_v012.hip",
            host_version: String = "20.5",
        }
        set {
            frame_range: FrameRange = FrameRange::span(1001, 1005),
            resolution: (u32, u32) = (1920, 1080),
            toggles: OutputToggles = OutputToggles::default(),
            aovs: Vec<String> = vec!["beauty".to_string()],
            metadata: Vec<MetaEntry> = default_metadata(),
            inputs: u32 = 1,
        }
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
