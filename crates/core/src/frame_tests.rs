// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

use super::*;
use proptest::prelude::*;

#[test]
fn single_frame_range_renders_one_number() {
    assert_eq!(FrameRange::single(1001).to_string(), "1001");
}

#[test]
fn span_range_renders_dashed_pair() {
    assert_eq!(FrameRange::span(1001, 1005).to_string(), "1001-1005");
}

#[test]
fn range_endpoints() {
    let range = FrameRange::span(10, 20);
    assert_eq!(range.start(), 10);
    assert_eq!(range.end(), 20);

    let single = FrameRange::single(7);
    assert_eq!(single.start(), 7);
    assert_eq!(single.end(), 7);
}

#[test]
fn range_deserializes_from_toml() {
    #[derive(serde::Deserialize)]
    struct Doc {
        a: FrameRange,
        b: FrameRange,
    }
    let doc: Doc = toml::from_str("a = 1001\nb = { start = 1, end = 240 }").unwrap();
    assert_eq!(doc.a, FrameRange::single(1001));
    assert_eq!(doc.b, FrameRange::span(1, 240));
}

#[yare::parameterized(
    upper     = { "shot_main.$F4.exr", Some(4) },
    lower     = { "shot_main.$f3.exr", Some(3) },
    none      = { "shot_main.1001.exr", None },
    bare_cash = { "costs_$_main.exr", None },
)]
fn token_discovery(path: &str, padding: Option<u8>) {
    assert_eq!(SequenceToken::find(path).map(|t| t.padding()), padding);
}

#[test]
fn printf_token_discovery() {
    assert_eq!(
        SequenceToken::find_printf("shot_main.%04d.exr"),
        Some(SequenceToken::new(4))
    );
    assert_eq!(SequenceToken::find_printf("shot_main.$F4.exr"), None);
}

#[test]
fn rewrite_converts_authored_token_to_printf() {
    assert_eq!(
        SequenceToken::rewrite("beautyPass_main.$F4.exr"),
        "beautyPass_main.%04d.exr"
    );
}

#[test]
fn rewrite_without_token_is_identity() {
    assert_eq!(SequenceToken::rewrite("static_plate.exr"), "static_plate.exr");
}

#[test]
fn substitute_zero_pads() {
    let token = SequenceToken::DEFAULT;
    assert_eq!(
        token.substitute("shot_main.%04d.exr", 7),
        "shot_main.0007.exr"
    );
    assert_eq!(
        token.substitute("shot_main.%04d.exr", 1001),
        "shot_main.1001.exr"
    );
}

proptest! {
    /// Two distinct frame numbers never produce the same filename.
    #[test]
    fn substitution_is_injective(a in 0i32..=9999, b in 0i32..=9999) {
        prop_assume!(a != b);
        let token = SequenceToken::DEFAULT;
        let pattern = "shot_main.%04d.exr";
        prop_assert_ne!(token.substitute(pattern, a), token.substitute(pattern, b));
    }
}
