// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Path templates with field substitution and extraction.
//!
//! A template is a path string with `{field}` placeholders, e.g.
//! `/proj/{shot}/renders/{output}/{aov_name}/{shot}_{output}.{SEQ}.exr`.
//! It substitutes a field set into a concrete path and extracts a field set
//! back out of one.

use indexmap::IndexMap;
use regex::Regex;
use thiserror::Error;

/// Field values keyed by field name. Insertion order is preserved so
/// overlays behave predictably.
pub type Fields = IndexMap<String, String>;

#[derive(Debug, Error)]
pub enum TemplateError {
    /// A required field has no value. Never silently defaulted: a path built
    /// from a partial field set must not reach the filesystem.
    #[error("missing template field '{field}' for template '{template}'")]
    MissingField { field: String, template: String },

    #[error("path '{path}' does not match template '{template}'")]
    Mismatch { path: String, template: String },

    /// A field appearing more than once resolved to different values.
    #[error("field '{field}' resolves inconsistently in '{path}'")]
    InconsistentField { field: String, path: String },

    #[error("unterminated field in template '{template}'")]
    Unterminated { template: String },

    #[error("template '{template}' produced an invalid extraction pattern: {source}")]
    Pattern {
        template: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(String),
}

/// A parsed path template: literal runs interleaved with `{field}`
/// placeholders.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
    extraction: Regex,
    /// Capture group name per field occurrence, in segment order.
    groups: Vec<(String, String)>,
}

impl PathTemplate {
    pub fn parse(raw: &str) -> Result<PathTemplate, TemplateError> {
        let segments = scan_segments(raw)?;
        let (extraction, groups) = build_extraction(raw, &segments)?;
        Ok(PathTemplate {
            raw: raw.to_string(),
            segments,
            extraction,
            groups,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Field names in order of first appearance.
    pub fn fields(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Field(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute `fields` into the template. Unused fields are ignored;
    /// missing ones are an error.
    pub fn apply(&self, fields: &Fields) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => out.push_str(literal),
                Segment::Field(name) => match fields.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(TemplateError::MissingField {
                            field: name.clone(),
                            template: self.raw.clone(),
                        })
                    }
                },
            }
        }
        Ok(out)
    }

    /// Extract field values from a concrete path.
    ///
    /// A field that appears more than once must resolve to the same value
    /// at every occurrence.
    pub fn extract(&self, path: &str) -> Result<Fields, TemplateError> {
        let captures = self
            .extraction
            .captures(path)
            .ok_or_else(|| TemplateError::Mismatch {
                path: path.to_string(),
                template: self.raw.clone(),
            })?;

        let mut fields = Fields::new();
        for (group, field) in &self.groups {
            let Some(value) = captures.name(group) else {
                continue;
            };
            match fields.get(field.as_str()) {
                Some(existing) if existing != value.as_str() => {
                    return Err(TemplateError::InconsistentField {
                        field: field.clone(),
                        path: path.to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    fields.insert(field.clone(), value.as_str().to_string());
                }
            }
        }
        Ok(fields)
    }
}

fn scan_segments(raw: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            literal.push(ch);
            continue;
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        let mut name = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) => name.push(c),
                None => {
                    return Err(TemplateError::Unterminated {
                        template: raw.to_string(),
                    })
                }
            }
        }
        segments.push(Segment::Field(name));
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// Build the anchored extraction regex. Each field occurrence gets its own
/// capture group (`f0`, `f1`, ...) because the regex crate rejects duplicate
/// group names; `extract` folds them back together.
fn build_extraction(
    raw: &str,
    segments: &[Segment],
) -> Result<(Regex, Vec<(String, String)>), TemplateError> {
    let mut pattern = String::from("^");
    let mut groups = Vec::new();
    for segment in segments {
        match segment {
            Segment::Literal(literal) => pattern.push_str(&regex::escape(literal)),
            Segment::Field(name) => {
                let group = format!("f{}", groups.len());
                pattern.push_str(&format!("(?P<{group}>[^/]+?)"));
                groups.push((group, name.clone()));
            }
        }
    }
    pattern.push('$');

    let extraction = Regex::new(&pattern).map_err(|source| TemplateError::Pattern {
        template: raw.to_string(),
        source,
    })?;
    Ok((extraction, groups))
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
