// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

use super::*;

#[test]
fn renders_lines_in_push_order() {
    let mut descriptor = Descriptor::new();
    descriptor.push("Plugin", "Houdini");
    descriptor.push("Frames", "1001-1005");
    descriptor.push("Priority", 50);
    assert_eq!(
        descriptor.to_string(),
        "Plugin=Houdini\nFrames=1001-1005\nPriority=50\n"
    );
}

#[test]
fn indexed_keys_concatenate_index() {
    let mut descriptor = Descriptor::new();
    descriptor.push_indexed("OutputDirectory", 0, "/renders/main");
    descriptor.push_indexed("OutputFilename", 0, "shot_main.%04d.exr");
    assert_eq!(descriptor.get("OutputDirectory0"), Some("/renders/main"));
    assert_eq!(descriptor.get("OutputFilename0"), Some("shot_main.%04d.exr"));
}

#[test]
fn get_returns_first_match() {
    let mut descriptor = Descriptor::new();
    descriptor.push("Name", "first");
    descriptor.push("Name", "second");
    assert_eq!(descriptor.get("Name"), Some("first"));
    assert_eq!(descriptor.get("Missing"), None);
}

#[test]
fn values_are_written_verbatim() {
    // No escaping in this format; values keep spaces and equals signs.
    let mut descriptor = Descriptor::new();
    descriptor.push("EnvironmentKeyValue0", "RENDER_ENGINE=Karma");
    assert_eq!(
        descriptor.to_string(),
        "EnvironmentKeyValue0=RENDER_ENGINE=Karma\n"
    );
}

#[test]
fn empty_descriptor_renders_nothing() {
    let descriptor = Descriptor::new();
    assert!(descriptor.is_empty());
    assert_eq!(descriptor.to_string(), "");
}
