// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Farmhand Authors

//! Job and plugin descriptor construction.
//!
//! Pure construction from an already-settled request; persistence and
//! process invocation are the driver's job.

use crate::driver::SubmitRequest;
use fh_core::{Descriptor, FarmConfig, OutputStream, SequenceToken};

/// Build the job and plugin descriptors for one submission.
///
/// `streams` must already be in enabled-stream declaration order (main
/// first); the indexed `OutputDirectory{i}`/`OutputFilename{i}` pairs are
/// assigned densely from 0 in that order. `frames` is the final range
/// string, chunked or not.
pub fn build_descriptors(
    request: &SubmitRequest,
    config: &FarmConfig,
    streams: &[OutputStream],
    frames: &str,
) -> (Descriptor, Descriptor) {
    let mut job = Descriptor::new();
    job.push("Plugin", &config.plugin);
    job.push("Frames", frames);
    job.push("Priority", request.priority);
    job.push("ConcurrentTasks", request.mode.concurrent_tasks());
    job.push("ChunkSize", request.frames_per_task);
    job.push("Name", &request.submission_name);
    job.push("Department", &config.department);
    job.push(
        "EnvironmentKeyValue0",
        format!("RENDER_ENGINE={}", config.render_engine),
    );

    // The post-task hook and its AOV list ride together: without denoising,
    // nothing downstream reads the list.
    if let Some(script) = config.post_task_script.as_deref() {
        if request.target.toggles.denoise {
            job.push("PostTaskScript", script);
            job.push(
                "ExtraInfoKeyValue0",
                format!("RenderAOVs={}", aov_wire(&request.target.aovs)),
            );
        }
    }

    for (index, stream) in streams.iter().enumerate() {
        job.push_indexed("OutputDirectory", index, stream.directory());
        job.push_indexed(
            "OutputFilename",
            index,
            SequenceToken::rewrite(stream.file_name()),
        );
    }

    let mut plugin = Descriptor::new();
    plugin.push("OutputDriver", &request.target.rop_path);
    plugin.push("Version", &request.target.host_version);
    plugin.push("SceneFile", &request.target.scene_file);

    (job, plugin)
}

// Serializing a list of strings cannot fail.
#[allow(clippy::expect_used)]
fn aov_wire(aovs: &[String]) -> String {
    serde_json::to_string(aovs).expect("string list serializes")
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
