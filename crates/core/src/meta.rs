// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Render metadata entries stamped into submitted renders.

use serde::{Deserialize, Serialize};

/// Metadata value, tagged by type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum MetaValue {
    Str(String),
    Float(f64),
    Vec3([f64; 3]),
}

/// One metadata key/value entry. Keys are validated before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub key: String,
    #[serde(flatten)]
    pub value: MetaValue,
}

impl MetaEntry {
    pub fn new(key: impl Into<String>, value: MetaValue) -> Self {
        MetaEntry {
            key: key.into(),
            value,
        }
    }

    /// Default colorspace entry attached to every render.
    pub fn colorspace() -> Self {
        MetaEntry::new("colorspace", MetaValue::Str("ACES - ACEScg".to_string()))
    }
}

/// Metadata keys and light-group names share the same rule: letters, digits,
/// and underscores only, never empty.
pub fn valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
#[path = "meta_tests.rs"]
mod tests;
