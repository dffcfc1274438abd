// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Flat ordered key/value descriptors, the wire format the farm submission
//! command consumes.

use std::fmt;

/// Ordered list of `Key=Value` lines.
///
/// Keys are case-sensitive and logically order-insensitive, but the line
/// order is preserved verbatim: some farm parsers are line-positional for
/// indexed keys, so `OutputDirectory{N}`/`OutputFilename{N}` pairs must land
/// densely, from 0, in push order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    lines: Vec<(String, String)>,
}

impl Descriptor {
    pub fn new() -> Self {
        Descriptor::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.lines.push((key.into(), value.to_string()));
    }

    /// Push an indexed key, e.g. `push_indexed("OutputDirectory", 2, ..)`
    /// emits `OutputDirectory2`.
    pub fn push_indexed(&mut self, key: &str, index: usize, value: impl fmt::Display) {
        self.push(format!("{key}{index}"), value);
    }

    /// First value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn lines(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Renders one `Key=Value` per line, no escaping, trailing newline included.
impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.lines {
            writeln!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
