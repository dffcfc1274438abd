// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Output streams: named, independently pathed image sequences.

use serde::{Deserialize, Serialize};

/// Logical output stream kind.
///
/// Declaration order is fixed across the whole pipeline: main, crypto,
/// denoise, deep. The indexed descriptor keys rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Main,
    Crypto,
    Denoise,
    Deep,
}

impl StreamKind {
    /// Stream name as it appears in template fields and path segments.
    pub fn name(&self) -> &'static str {
        match self {
            StreamKind::Main => "main",
            StreamKind::Crypto => "crypto",
            StreamKind::Denoise => "denoise",
            StreamKind::Deep => "deep",
        }
    }
}

crate::simple_display! {
    StreamKind {
        Main => "main",
        Crypto => "crypto",
        Denoise => "denoise",
        Deep => "deep",
    }
}

/// One resolved output stream.
///
/// The path is absolute, forward-slash, and its filename still carries the
/// frame-sequence token; the frame number is substituted at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputStream {
    pub kind: StreamKind,
    pub path: String,
}

impl OutputStream {
    pub fn new(kind: StreamKind, path: impl Into<String>) -> Self {
        OutputStream {
            kind,
            path: path.into(),
        }
    }

    /// Directory portion of the path.
    pub fn directory(&self) -> &str {
        self.path
            .rsplit_once('/')
            .map(|(dir, _)| dir)
            .unwrap_or("")
    }

    /// Filename portion of the path, sequence token included.
    pub fn file_name(&self) -> &str {
        self.path
            .rsplit_once('/')
            .map(|(_, name)| name)
            .unwrap_or(self.path.as_str())
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
