// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fh-template: path templates and the per-stream output path resolver.

pub mod resolver;
pub mod template;

pub use resolver::{lower_camel, PathResolver};
pub use template::{Fields, PathTemplate, TemplateError};
