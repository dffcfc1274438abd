// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Frame ranges and the frame-sequence placeholder token.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive frame range: a single frame or a `[start, end]` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrameRange {
    Single(i32),
    Span { start: i32, end: i32 },
}

impl FrameRange {
    pub fn single(frame: i32) -> Self {
        FrameRange::Single(frame)
    }

    pub fn span(start: i32, end: i32) -> Self {
        FrameRange::Span { start, end }
    }

    pub fn start(&self) -> i32 {
        match *self {
            FrameRange::Single(frame) => frame,
            FrameRange::Span { start, .. } => start,
        }
    }

    pub fn end(&self) -> i32 {
        match *self {
            FrameRange::Single(frame) => frame,
            FrameRange::Span { end, .. } => end,
        }
    }
}

/// Renders the farm's range string: `"1001"` or `"1001-1005"`.
impl fmt::Display for FrameRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FrameRange::Single(frame) => write!(f, "{frame}"),
            FrameRange::Span { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

/// The frame-sequence placeholder carried inside filename patterns.
///
/// Authored paths spell it `$F4` (any single-digit padding); the farm expects
/// the printf form `%04d`. The placeholder is a format token, not a literal
/// frame number — substitution happens on the worker, one frame at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceToken {
    padding: u8,
}

impl SequenceToken {
    /// Four digits, zero padded. What every stream in practice uses.
    pub const DEFAULT: SequenceToken = SequenceToken { padding: 4 };

    pub fn new(padding: u8) -> Self {
        SequenceToken { padding }
    }

    pub fn padding(&self) -> u8 {
        self.padding
    }

    /// The authoring-time form, e.g. `$F4`.
    pub fn hscript(&self) -> String {
        format!("$F{}", self.padding)
    }

    /// The farm-side form, e.g. `%04d`.
    pub fn printf(&self) -> String {
        format!("%0{}d", self.padding)
    }

    /// Find the first `$F<digit>` (or `$f<digit>`) token in a path.
    pub fn find(path: &str) -> Option<SequenceToken> {
        let bytes = path.as_bytes();
        for i in 0..bytes.len().saturating_sub(2) {
            if bytes[i] == b'$'
                && (bytes[i + 1] == b'F' || bytes[i + 1] == b'f')
                && bytes[i + 2].is_ascii_digit()
            {
                return Some(SequenceToken {
                    padding: bytes[i + 2] - b'0',
                });
            }
        }
        None
    }

    /// Find the first `%0<digit>d` token in a filename pattern.
    pub fn find_printf(name: &str) -> Option<SequenceToken> {
        let bytes = name.as_bytes();
        for i in 0..bytes.len().saturating_sub(3) {
            if bytes[i] == b'%'
                && bytes[i + 1] == b'0'
                && bytes[i + 2].is_ascii_digit()
                && bytes[i + 3] == b'd'
            {
                return Some(SequenceToken {
                    padding: bytes[i + 2] - b'0',
                });
            }
        }
        None
    }

    /// Rewrite the authored token in `name` to the farm's printf form.
    /// Names without a token pass through untouched.
    pub fn rewrite(name: &str) -> String {
        match SequenceToken::find(name) {
            Some(token) => name
                .replace(&format!("$F{}", token.padding), &token.printf())
                .replace(&format!("$f{}", token.padding), &token.printf()),
            None => name.to_string(),
        }
    }

    /// Substitute a concrete frame number into the printf form of `name`.
    ///
    /// Fixed width and zero padding keep substitution injective over the
    /// frames a padding can express (`[0, 9999]` at the default width).
    pub fn substitute(&self, name: &str, frame: i32) -> String {
        let width = self.padding as usize;
        name.replace(&self.printf(), &format!("{frame:0width$}"))
    }
}

impl fmt::Display for SequenceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hscript())
    }
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
