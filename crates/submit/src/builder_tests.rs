// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

use super::*;
use crate::driver::SubmitRequest;
use fh_core::{ConcurrencyMode, OutputToggles, RenderTarget, StreamKind};
use yare::parameterized;

fn streams_for(toggles: OutputToggles) -> Vec<OutputStream> {
    toggles
        .enabled_streams()
        .into_iter()
        .map(|kind| {
            OutputStream::new(
                kind,
                format!(
                    "/proj/sq010/sh010/renders/beautyPass/{name}/sh010_beautyPass_{name}.$F4.exr",
                    name = kind.name()
                ),
            )
        })
        .collect()
}

fn denoising_request() -> SubmitRequest {
    let target = RenderTarget::builder()
        .toggles(OutputToggles {
            denoise: true,
            ..OutputToggles::default()
        })
        .aovs(vec!["beauty".to_string(), "albedo".to_string()])
        .build();
    SubmitRequest::new(target)
        .priority(60)
        .frames_per_task(2)
        .mode(ConcurrencyMode::Medium)
}

#[test]
fn job_descriptor_core_keys() {
    let request = denoising_request();
    let config = FarmConfig::default();
    let streams = streams_for(request.target.toggles);

    let (job, _) = build_descriptors(&request, &config, &streams, "1001-1005");

    assert_eq!(job.get("Plugin"), Some("Houdini"));
    assert_eq!(job.get("Frames"), Some("1001-1005"));
    assert_eq!(job.get("Priority"), Some("60"));
    assert_eq!(job.get("ConcurrentTasks"), Some("2"));
    assert_eq!(job.get("ChunkSize"), Some("2"));
    assert_eq!(job.get("Name"), Some("sh010_v012 (beautyPass)"));
    assert_eq!(job.get("Department"), Some("3D"));
    assert_eq!(job.get("EnvironmentKeyValue0"), Some("RENDER_ENGINE=Karma"));
}

#[test]
fn plugin_descriptor_keys() {
    let request = denoising_request();
    let config = FarmConfig::default();
    let streams = streams_for(request.target.toggles);

    let (_, plugin) = build_descriptors(&request, &config, &streams, "1001-1005");

    assert_eq!(plugin.get("OutputDriver"), Some("/stage/render/usdrender_rop"));
    assert_eq!(plugin.get("Version"), Some("20.5"));
    assert_eq!(
        plugin.get("SceneFile"),
        Some("/proj/sq010/sh010/work/sh010_v012.hip")
    );
    assert_eq!(plugin.len(), 3);
}

#[test]
fn output_pairs_are_dense_with_main_first_and_printf_tokens() {
    let request = denoising_request();
    let config = FarmConfig::default();
    let streams = streams_for(request.target.toggles);
    assert_eq!(streams[0].kind, StreamKind::Main);

    let (job, _) = build_descriptors(&request, &config, &streams, "1001-1005");

    assert_eq!(
        job.get("OutputDirectory0"),
        Some("/proj/sq010/sh010/renders/beautyPass/main")
    );
    assert_eq!(
        job.get("OutputFilename0"),
        Some("sh010_beautyPass_main.%04d.exr")
    );
    assert_eq!(
        job.get("OutputFilename1"),
        Some("sh010_beautyPass_denoise.%04d.exr")
    );
    assert_eq!(job.get("OutputDirectory2"), None);
}

#[parameterized(
    script_and_denoise = { Some("post_task.py"), true, true },
    script_without_denoise = { Some("post_task.py"), false, false },
    denoise_without_script = { None, true, false },
    neither = { None, false, false },
)]
fn post_task_hook_requires_script_and_denoise(
    script: Option<&str>,
    denoise: bool,
    expected: bool,
) {
    let target = RenderTarget::builder()
        .toggles(OutputToggles {
            denoise,
            ..OutputToggles::default()
        })
        .build();
    let request = SubmitRequest::new(target);
    let config = FarmConfig {
        post_task_script: script.map(str::to_string),
        ..FarmConfig::default()
    };
    let streams = streams_for(request.target.toggles);

    let (job, _) = build_descriptors(&request, &config, &streams, "1001");

    assert_eq!(job.get("PostTaskScript").is_some(), expected);
    assert_eq!(job.get("ExtraInfoKeyValue0").is_some(), expected);
}

#[test]
fn aov_list_rides_as_json() {
    let request = denoising_request();
    let config = FarmConfig {
        post_task_script: Some("post_task.py".to_string()),
        ..FarmConfig::default()
    };
    let streams = streams_for(request.target.toggles);

    let (job, _) = build_descriptors(&request, &config, &streams, "1001");

    assert_eq!(
        job.get("ExtraInfoKeyValue0"),
        Some(r#"RenderAOVs=["beauty","albedo"]"#)
    );
}

#[test]
fn descriptor_renders_one_line_per_key() {
    let request = denoising_request();
    let config = FarmConfig::default();
    let streams = streams_for(request.target.toggles);

    let (job, _) = build_descriptors(&request, &config, &streams, "1001-1005");
    let rendered = job.to_string();

    assert!(rendered.contains("Plugin=Houdini\n"));
    assert!(rendered.contains("ConcurrentTasks=2\n"));
    assert!(rendered.ends_with('\n'));
}
