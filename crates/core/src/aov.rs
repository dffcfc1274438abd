// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! AOV taxonomy for denoiser argument construction.
//!
//! Raw AOV tokens arrive as strings (scene parameter names, job extra-info);
//! they are classified once into a closed enum and dispatched on
//! exhaustively from there.

use smol_str::SmolStr;

/// Channels the denoiser accepts by name, beyond the specially handled ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenoiseChannel {
    Color,
    BeautyUnshadowed,
    Coat,
    CombinedDiffuse,
    CombinedDiffuseUnshadowed,
    CombinedEmission,
    CombinedGlossyReflection,
    CombinedVolume,
    DirectDiffuse,
    DirectDiffuseUnshadowed,
    DirectEmission,
    DirectGlossyReflection,
    DirectVolume,
    GlossyTransmission,
    IndirectDiffuse,
    IndirectDiffuseUnshadowed,
    IndirectEmission,
    IndirectGlossyReflection,
    IndirectVolume,
    VisibleLights,
    Sss,
}

impl DenoiseChannel {
    /// Channel name as the denoiser spells it.
    pub fn token(&self) -> &'static str {
        match self {
            DenoiseChannel::Color => "C",
            DenoiseChannel::BeautyUnshadowed => "beautyunshadowed",
            DenoiseChannel::Coat => "coat",
            DenoiseChannel::CombinedDiffuse => "combineddiffuse",
            DenoiseChannel::CombinedDiffuseUnshadowed => "combineddiffuseunshadowed",
            DenoiseChannel::CombinedEmission => "combinedemission",
            DenoiseChannel::CombinedGlossyReflection => "combinedglossyreflection",
            DenoiseChannel::CombinedVolume => "combinedvolume",
            DenoiseChannel::DirectDiffuse => "directdiffuse",
            DenoiseChannel::DirectDiffuseUnshadowed => "directdiffuseunshadowed",
            DenoiseChannel::DirectEmission => "directemission",
            DenoiseChannel::DirectGlossyReflection => "directglossyreflection",
            DenoiseChannel::DirectVolume => "directvolume",
            DenoiseChannel::GlossyTransmission => "glossytransmission",
            DenoiseChannel::IndirectDiffuse => "indirectdiffuse",
            DenoiseChannel::IndirectDiffuseUnshadowed => "indirectdiffuseunshadowed",
            DenoiseChannel::IndirectEmission => "indirectemission",
            DenoiseChannel::IndirectGlossyReflection => "indirectglossyreflection",
            DenoiseChannel::IndirectVolume => "indirectvolume",
            DenoiseChannel::VisibleLights => "visiblelights",
            DenoiseChannel::Sss => "sss",
        }
    }

    pub fn parse(token: &str) -> Option<DenoiseChannel> {
        Some(match token {
            "C" => DenoiseChannel::Color,
            "beautyunshadowed" => DenoiseChannel::BeautyUnshadowed,
            "coat" => DenoiseChannel::Coat,
            "combineddiffuse" => DenoiseChannel::CombinedDiffuse,
            "combineddiffuseunshadowed" => DenoiseChannel::CombinedDiffuseUnshadowed,
            "combinedemission" => DenoiseChannel::CombinedEmission,
            "combinedglossyreflection" => DenoiseChannel::CombinedGlossyReflection,
            "combinedvolume" => DenoiseChannel::CombinedVolume,
            "directdiffuse" => DenoiseChannel::DirectDiffuse,
            "directdiffuseunshadowed" => DenoiseChannel::DirectDiffuseUnshadowed,
            "directemission" => DenoiseChannel::DirectEmission,
            "directglossyreflection" => DenoiseChannel::DirectGlossyReflection,
            "directvolume" => DenoiseChannel::DirectVolume,
            "glossytransmission" => DenoiseChannel::GlossyTransmission,
            "indirectdiffuse" => DenoiseChannel::IndirectDiffuse,
            "indirectdiffuseunshadowed" => DenoiseChannel::IndirectDiffuseUnshadowed,
            "indirectemission" => DenoiseChannel::IndirectEmission,
            "indirectglossyreflection" => DenoiseChannel::IndirectGlossyReflection,
            "indirectvolume" => DenoiseChannel::IndirectVolume,
            "visiblelights" => DenoiseChannel::VisibleLights,
            "sss" => DenoiseChannel::Sss,
            _ => return None,
        })
    }
}

/// One enabled render output variable, classified for the denoiser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aov {
    /// The beauty pass, denoised as the color channel `C`.
    Beauty,
    /// Albedo; doubles as the denoiser's albedo auxiliary input.
    Albedo,
    /// First-hit normals, the denoiser's normal auxiliary input.
    HitNormal,
    /// User-defined light group, `LG_` prefixed.
    LightGroup(SmolStr),
    /// Any other channel the denoiser knows by name.
    Channel(DenoiseChannel),
}

impl Aov {
    /// Classify a raw AOV token. Unrecognized tokens yield `None` and are
    /// dropped from denoiser arguments.
    pub fn classify(token: &str) -> Option<Aov> {
        match token {
            "beauty" => Some(Aov::Beauty),
            "albedo" => Some(Aov::Albedo),
            "hitN" => Some(Aov::HitNormal),
            _ if token.starts_with("LG_") => Some(Aov::LightGroup(token.into())),
            _ => DenoiseChannel::parse(token).map(Aov::Channel),
        }
    }

    /// Channel name for the denoiser's `--aovs` list, if this AOV has one.
    /// First-hit normals only feed the auxiliary normal input.
    pub fn channel_token(&self) -> Option<&str> {
        match self {
            Aov::Beauty => Some("C"),
            Aov::Albedo => Some("albedo"),
            Aov::HitNormal => None,
            Aov::LightGroup(name) => Some(name.as_str()),
            Aov::Channel(channel) => Some(channel.token()),
        }
    }
}

#[cfg(test)]
#[path = "aov_tests.rs"]
mod tests;
