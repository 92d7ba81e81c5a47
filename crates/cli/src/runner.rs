// SPDX-License-Identifier: MIT

//! Per-test-case execution.
//!
//! Runs the renderer once for a test case and, in compare mode, checks the
//! freshly rendered images against the stored baseline. The renderer is
//! waited on synchronously; a hung renderer blocks the run.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::cli::TestMode;
use crate::compare;
use crate::output::print_status;

/// Pass/fail status of one test case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
}

impl TestStatus {
    /// Label used in status lines and the HTML report.
    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Passed => "PASSED",
            TestStatus::Failed => "FAILED",
        }
    }
}

/// Outcome of one test case. Exactly one exists per test case per run, held
/// in suite declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestResult {
    pub name: String,
    pub status: TestStatus,
}

impl TestResult {
    fn new(name: &str, status: TestStatus) -> Self {
        Self {
            name: name.to_string(),
            status,
        }
    }
}

/// Fatal process-level failures.
///
/// Comparison problems never surface here; they fail the individual test
/// case instead. Anything that does surface aborts the whole run.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch renderer '{}': {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("renderer failed on test '{test}': {status}")]
    Renderer {
        test: String,
        status: std::process::ExitStatus,
    },
}

/// Run one test case end to end.
///
/// Gen mode renders straight into the baseline directory. Compare mode
/// renders into the actual directory and then checks it against the
/// baseline. A renderer failure is fatal either way.
pub fn run_case(
    renderer: &Path,
    name: &str,
    mode: TestMode,
    expected_dir: &Path,
    actual_dir: &Path,
) -> Result<TestResult, RunnerError> {
    match mode {
        TestMode::Gen => {
            invoke_renderer(renderer, name, mode, expected_dir)?;
            Ok(TestResult::new(name, TestStatus::Passed))
        }
        TestMode::Compare => {
            invoke_renderer(renderer, name, mode, actual_dir)?;
            print_status(format_args!("   Comparing results for '{}'...", name));
            Ok(check_against_baseline(name, expected_dir, actual_dir))
        }
    }
}

/// Invoke the renderer for one test case, writing its images to `output_dir`.
///
/// The output directory is created first and absolutized so the renderer can
/// be agnostic about the working directory. A non-zero exit is fatal to the
/// run.
pub fn invoke_renderer(
    renderer: &Path,
    name: &str,
    mode: TestMode,
    output_dir: &Path,
) -> Result<(), RunnerError> {
    std::fs::create_dir_all(output_dir).map_err(|source| RunnerError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let absolute = output_dir
        .canonicalize()
        .map_err(|source| RunnerError::CreateDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

    let status = Command::new(renderer)
        .arg("--test-name")
        .arg(name)
        .arg("--test-mode")
        .arg(mode.as_arg())
        .arg("--test-dir")
        .arg(&absolute)
        .status()
        .map_err(|source| RunnerError::Spawn {
            path: renderer.to_path_buf(),
            source,
        })?;

    if !status.success() {
        return Err(RunnerError::Renderer {
            test: name.to_string(),
            status,
        });
    }
    Ok(())
}

/// Compare a test case's baseline directory against its freshly rendered
/// output.
///
/// The first mismatching image fails the test case and stops the remaining
/// comparisons for it. A missing baseline directory and an empty baseline
/// are failures with their own logged reasons.
pub fn check_against_baseline(name: &str, expected_dir: &Path, actual_dir: &Path) -> TestResult {
    if !expected_dir.is_dir() {
        print_status(format_args!(
            "      - FAILED: expected directory '{}' not found. Run --test-mode gen first.",
            expected_dir.display()
        ));
        return TestResult::new(name, TestStatus::Failed);
    }

    let expected_images = expected_pngs(expected_dir);
    if expected_images.is_empty() {
        print_status(format_args!(
            "      - FAILED: no expected PNG images found in '{}'.",
            expected_dir.display()
        ));
        return TestResult::new(name, TestStatus::Failed);
    }

    for expected_image in &expected_images {
        let file_name = match expected_image.file_name() {
            Some(file_name) => file_name,
            None => continue,
        };
        print_status(format_args!(
            "      - Comparing: {}",
            file_name.to_string_lossy()
        ));
        if !compare::compare(expected_image, &actual_dir.join(file_name)) {
            return TestResult::new(name, TestStatus::Failed);
        }
    }

    TestResult::new(name, TestStatus::Passed)
}

/// Baseline images for a test case, sorted by filename so the comparison
/// order is deterministic. The directory portion is escaped so metacharacters
/// in the test root or test name match literally.
fn expected_pngs(dir: &Path) -> Vec<PathBuf> {
    let pattern = format!(
        "{}/*.png",
        glob::Pattern::escape(&dir.display().to_string())
    );
    let mut paths: Vec<PathBuf> = match glob::glob(&pattern) {
        Ok(entries) => entries.flatten().collect(),
        Err(_) => Vec::new(),
    };
    paths.sort();
    paths
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
