// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Denoiser argument construction from the enabled-AOV list.

use fh_core::Aov;

/// Build the denoiser's flag arguments from raw AOV tokens.
///
/// Classification drives everything: albedo contributes the auxiliary
/// albedo flag, first-hit normals the auxiliary normal flag, and every AOV
/// with a channel name joins the trailing `--aovs` list. Unrecognized
/// tokens are dropped; a channel is never listed twice.
pub fn denoiser_arguments(tokens: &[String]) -> Vec<String> {
    let mut flags: Vec<String> = Vec::new();
    let mut channels: Vec<String> = Vec::new();

    for token in tokens {
        let Some(aov) = Aov::classify(token) else {
            tracing::debug!(token, "skipping AOV unknown to the denoiser");
            continue;
        };
        match aov {
            Aov::Albedo => {
                flags.push("-a".to_string());
                flags.push("albedo".to_string());
            }
            Aov::HitNormal => {
                flags.push("-n".to_string());
                flags.push("N".to_string());
            }
            _ => {}
        }
        if let Some(channel) = aov.channel_token() {
            if !channels.iter().any(|c| c == channel) {
                channels.push(channel.to_string());
            }
        }
    }

    flags.push("--aovs".to_string());
    flags.extend(channels);
    flags
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
