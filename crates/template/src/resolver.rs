// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Per-stream output path resolution.
//!
//! Two-stage substitution: fields are extracted from the current scene path
//! via the work template, overlaid with render-specific fields, then applied
//! to the render template. Pure; no I/O.

use crate::template::{Fields, PathTemplate, TemplateError};
use fh_core::SequenceToken;

#[derive(Debug, Clone)]
pub struct PathResolver {
    work: PathTemplate,
    render: PathTemplate,
}

impl PathResolver {
    pub fn new(work: PathTemplate, render: PathTemplate) -> Self {
        PathResolver { work, render }
    }

    pub fn from_patterns(work: &str, render: &str) -> Result<PathResolver, TemplateError> {
        Ok(PathResolver::new(
            PathTemplate::parse(work)?,
            PathTemplate::parse(render)?,
        ))
    }

    /// Resolve the output path for one AOV of one render.
    ///
    /// The sequence token lands in the path as its authored (`$F4`) form;
    /// it is a placeholder, not a frame number.
    pub fn resolve(
        &self,
        scene_path: &str,
        render_name: &str,
        aov_name: &str,
        width: u32,
        height: u32,
        token: SequenceToken,
    ) -> Result<String, TemplateError> {
        let mut fields: Fields = self.work.extract(&forward_slashes(scene_path))?;
        fields.insert("SEQ".to_string(), token.hscript());
        fields.insert("output".to_string(), render_name.to_string());
        fields.insert("aov_name".to_string(), lower_camel(aov_name));
        fields.insert("width".to_string(), width.to_string());
        fields.insert("height".to_string(), height.to_string());
        Ok(forward_slashes(&self.render.apply(&fields)?))
    }
}

/// First character lower-cased, the rest untouched, so stream names compare
/// consistently regardless of caller casing.
pub fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn forward_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
