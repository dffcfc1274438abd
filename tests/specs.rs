// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! End-to-end specs across the farmhand crates: submission through the
//! descriptor files a stub farm command captures, then the post-task
//! denoise pass fed from those same descriptors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use fh_core::{
    ConcurrencyMode, FarmConfig, FrameRange, MetaEntry, OutputToggles, RenderTarget,
};
use fh_denoise::{Dispatcher, TaskContext};
use fh_submit::{
    FakePrompt, FakeSession, PassthroughChunker, SubmitDriver, SubmitError, SubmitRequest,
};
use fh_template::PathResolver;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

struct Farm {
    root: TempDir,
    config: FarmConfig,
}

impl Farm {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        let base = root.path().to_string_lossy().into_owned();
        let config = FarmConfig {
            post_task_script: Some("post_task.py".to_string()),
            work_template: format!("{base}/{{shot}}/work/{{shot}}_v{{version}}.hip"),
            render_template: format!(
                "{base}/{{shot}}/renders/{{output}}/{{aov_name}}/{{shot}}_{{output}}_{{aov_name}}.{{SEQ}}.exr"
            ),
            ..FarmConfig::default()
        };
        Farm { root, config }
    }

    fn target(&self) -> RenderTarget {
        RenderTarget {
            name: "beautyPass".to_string(),
            rop_path: "/stage/render/usdrender_rop".to_string(),
            scene_file: format!("{}/sh010/work/sh010_v012.hip", self.root.path().display()),
            host_version: "20.5".to_string(),
            frame_range: FrameRange::span(1001, 1005),
            resolution: (1920, 1080),
            toggles: OutputToggles {
                denoise: true,
                ..OutputToggles::default()
            },
            aovs: vec![
                "beauty".to_string(),
                "albedo".to_string(),
                "LG_keyLight".to_string(),
            ],
            metadata: vec![MetaEntry::colorspace()],
            inputs: 1,
        }
    }

    fn resolver(&self) -> PathResolver {
        PathResolver::from_patterns(&self.config.work_template, &self.config.render_template)
            .unwrap()
    }

    /// Stub farm command that keeps copies of both descriptor files.
    #[cfg(unix)]
    fn capture_command(&mut self) -> (PathBuf, PathBuf) {
        let job_copy = self.root.path().join("captured_job.txt");
        let plugin_copy = self.root.path().join("captured_plugin.txt");
        let script = shell_script(
            self.root.path(),
            "farm.sh",
            &format!(
                "cp \"$1\" {job}\ncp \"$2\" {plugin}",
                job = job_copy.display(),
                plugin = plugin_copy.display()
            ),
        );
        self.config.submission_command = script;
        (job_copy, plugin_copy)
    }
}

#[cfg(unix)]
fn shell_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join(name);
    std::fs::write(&script, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}

/// Rebuild the dispatcher's task context from a captured job descriptor,
/// the way the farm hands it to the post-task script.
fn task_from_descriptor(job: &str, start_frame: i32, end_frame: i32) -> TaskContext {
    let mut output_directories = Vec::new();
    let mut output_filenames = Vec::new();
    let mut render_aovs = Vec::new();
    for line in job.lines() {
        let (key, value) = line.split_once('=').unwrap();
        if key.starts_with("OutputDirectory") {
            output_directories.push(value.to_string());
        } else if key.starts_with("OutputFilename") {
            output_filenames.push(value.to_string());
        } else if key == "ExtraInfoKeyValue0" {
            render_aovs = fh_denoise::render_aovs_from_extra_info(value).unwrap();
        }
    }
    TaskContext {
        output_directories,
        output_filenames,
        render_aovs,
        start_frame,
        end_frame,
    }
}

#[cfg(unix)]
#[tokio::test]
async fn submission_then_denoise_round_trip() {
    let mut farm = Farm::new();
    let (job_copy, _) = farm.capture_command();
    let resolver = farm.resolver();
    let session = FakeSession::clean();
    let prompt = FakePrompt::answering(true);
    let driver = SubmitDriver::new(&farm.config, &resolver, &PassthroughChunker, &session, &prompt);
    let request = SubmitRequest::new(farm.target()).mode(ConcurrencyMode::Medium);

    driver.submit(&request).await.unwrap();

    let job = std::fs::read_to_string(&job_copy).unwrap();
    assert!(job.contains("ConcurrentTasks=2\n"));
    assert!(job.contains("Frames=1001-1005\n"));
    assert!(job.contains("PostTaskScript=post_task.py\n"));
    assert!(job.contains(r#"ExtraInfoKeyValue0=RenderAOVs=["beauty","albedo","LG_keyLight"]"#));
    assert!(job.contains("OutputFilename0=sh010_beautyPass_main.%04d.exr\n"));

    // The worker-side pass, driven by the same descriptor.
    let denoise_log = farm.root.path().join("denoise.log");
    let denoiser = shell_script(
        farm.root.path(),
        "idenoise.sh",
        &format!("echo \"$@\" >> {}", denoise_log.display()),
    );
    let ctx = task_from_descriptor(&job, 1001, 1002);
    let dispatcher = Dispatcher::new(denoiser, Duration::from_secs(5));

    let report = dispatcher.run(&ctx).await.unwrap();

    assert!(report.all_denoised());
    let calls = std::fs::read_to_string(&denoise_log).unwrap();
    let lines: Vec<&str> = calls.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("sh010_beautyPass_main.1001.exr"));
    assert!(lines[0].contains("/denoise/sh010_beautyPass_denoise.1001.exr"));
    assert!(lines[0].contains("-a albedo"));
    assert!(lines[0].ends_with("--aovs C albedo LG_keyLight"));
}

#[cfg(unix)]
#[tokio::test]
async fn declined_save_makes_no_farm_call() {
    let mut farm = Farm::new();
    let (job_copy, _) = farm.capture_command();
    let resolver = farm.resolver();
    let session = FakeSession::dirty();
    let prompt = FakePrompt::answering(false);
    let driver = SubmitDriver::new(&farm.config, &resolver, &PassthroughChunker, &session, &prompt);
    let request = SubmitRequest::new(farm.target());

    let result = driver.submit(&request).await;

    assert!(matches!(result, Err(SubmitError::Cancelled)));
    assert!(!job_copy.exists());
}

mod cli {
    use super::*;
    use assert_cmd::Command;

    #[test]
    fn help_lists_both_commands() {
        let assert = Command::cargo_bin("fh").unwrap().arg("--help").assert();
        let output = assert.success().get_output().stdout.clone();
        let help = String::from_utf8(output).unwrap();
        assert!(help.contains("submit"));
        assert!(help.contains("post-task"));
    }

    #[test]
    fn submit_requires_a_target() {
        Command::cargo_bin("fh")
            .unwrap()
            .arg("submit")
            .assert()
            .failure();
    }

    #[cfg(unix)]
    #[test]
    fn post_task_denoises_from_a_task_file() {
        let root = TempDir::new().unwrap();
        let denoiser = shell_script(root.path(), "idenoise.sh", "exit 0");
        let config_path = root.path().join("farm.toml");
        std::fs::write(
            &config_path,
            format!("denoiser = {:?}\n", denoiser.display().to_string()),
        )
        .unwrap();

        let task_path = root.path().join("task.json");
        std::fs::write(
            &task_path,
            r#"{
                "output_directories": ["/r/beautyPass/main"],
                "output_filenames": ["sh010_beautyPass_main.%04d.exr"],
                "render_aovs": ["beauty"],
                "start_frame": 1001,
                "end_frame": 1002
            }"#,
        )
        .unwrap();

        Command::cargo_bin("fh")
            .unwrap()
            .args(["post-task", "--task"])
            .arg(&task_path)
            .arg("--config")
            .arg(&config_path)
            .assert()
            .success()
            .stdout(predicates::str::contains("frame 1001: denoised"));
    }

    #[cfg(unix)]
    #[test]
    fn post_task_exits_nonzero_when_frames_fail() {
        let root = TempDir::new().unwrap();
        let denoiser = shell_script(root.path(), "idenoise.sh", "exit 2");
        let config_path = root.path().join("farm.toml");
        std::fs::write(
            &config_path,
            format!("denoiser = {:?}\n", denoiser.display().to_string()),
        )
        .unwrap();

        let task_path = root.path().join("task.json");
        std::fs::write(
            &task_path,
            r#"{
                "output_directories": ["/r/beautyPass/main"],
                "output_filenames": ["sh010_beautyPass_main.%04d.exr"],
                "render_aovs": ["beauty"],
                "start_frame": 1001,
                "end_frame": 1001
            }"#,
        )
        .unwrap();

        Command::cargo_bin("fh")
            .unwrap()
            .args(["post-task", "--task"])
            .arg(&task_path)
            .arg("--config")
            .arg(&config_path)
            .assert()
            .failure()
            .stderr(predicates::str::contains("denoise failed for frames: 1001"));
    }
}
