// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fh-core: domain model for the farmhand render submission tools.

pub mod macros;

pub mod aov;
pub mod config;
pub mod descriptor;
pub mod frame;
pub mod meta;
pub mod mode;
pub mod stream;
pub mod target;

pub use aov::{Aov, DenoiseChannel};
pub use config::{ConfigError, FarmConfig};
pub use descriptor::Descriptor;
pub use frame::{FrameRange, SequenceToken};
pub use meta::{MetaEntry, MetaValue};
pub use mode::ConcurrencyMode;
pub use stream::{OutputStream, StreamKind};
#[cfg(any(test, feature = "test-support"))]
pub use target::RenderTargetBuilder;
pub use target::{OutputToggles, RenderTarget, TargetError};
