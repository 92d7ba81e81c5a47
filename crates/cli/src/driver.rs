// SPDX-License-Identifier: MIT

//! Run orchestration: directory resolution, renderer validation, sequential
//! test iteration, and report persistence.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cli::TestMode;
use crate::config::SuiteConfig;
use crate::env;
use crate::output::{print_status, print_warning};
use crate::report;
use crate::runner::{self, RunnerError, TestResult};

/// Subdirectory of the test root holding all harness state.
const TEST_SUBDIR: &str = "glfw_test";
/// Baseline images, one directory per test case.
const EXPECTED_SUBDIR: &str = "expected";
/// Freshly rendered images, one directory per test case.
const COMPARE_SUBDIR: &str = "compare";
/// Report filename, written only on full completion of a compare run.
const REPORT_FILE: &str = "results.html";

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("renderer executable not found at '{}'", .0.display())]
    RendererMissing(PathBuf),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error("failed to write report '{}': {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The wired-up harness for one run.
pub struct Driver {
    renderer: PathBuf,
    tests: Vec<String>,
    test_dir: PathBuf,
}

impl Driver {
    /// Build a driver from a loaded suite, resolving the test root from
    /// `GLFW_TEST_DIR` and falling back to the current directory.
    pub fn from_suite(suite: SuiteConfig, renderer_override: Option<PathBuf>) -> Self {
        let root = env::test_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_root(suite, renderer_override, &root)
    }

    /// Build a driver with an explicit test root.
    pub fn with_root(
        suite: SuiteConfig,
        renderer_override: Option<PathBuf>,
        root: &Path,
    ) -> Self {
        Self {
            renderer: renderer_override.unwrap_or(suite.renderer),
            tests: suite.tests,
            test_dir: root.join(TEST_SUBDIR),
        }
    }

    /// Root of the harness directory tree (`<root>/glfw_test`).
    pub fn test_dir(&self) -> &Path {
        &self.test_dir
    }

    /// Renderer executable this run will drive.
    pub fn renderer(&self) -> &Path {
        &self.renderer
    }

    /// Execute the run.
    ///
    /// Gen mode regenerates the baseline and produces no report. Compare
    /// mode writes `results.html` only when every test case was executed;
    /// a renderer failure aborts with no report. An empty test list is a
    /// configuration problem worth a warning, not a crash.
    pub fn run(&self, mode: TestMode) -> Result<(), DriverError> {
        print_status(format_args!(
            "Using test root directory: {}",
            self.test_dir.display()
        ));

        if !self.renderer.is_file() {
            return Err(DriverError::RendererMissing(self.renderer.clone()));
        }
        if self.tests.is_empty() {
            print_warning("the suite's test list is empty; nothing to run");
            return Ok(());
        }

        match mode {
            TestMode::Gen => self.run_gen(),
            TestMode::Compare => self.run_compare(),
        }
    }

    fn run_gen(&self) -> Result<(), DriverError> {
        print_status("Starting 'gen' mode: generating expected images...");

        for name in &self.tests {
            print_status(format_args!("   Running test '{}'...", name));
            let expected_dir = self.expected_dir(name);
            runner::run_case(&self.renderer, name, TestMode::Gen, &expected_dir, &expected_dir)?;
        }

        print_status(format_args!(
            "'gen' mode complete. Expected images are in '{}'.",
            self.test_dir.join(EXPECTED_SUBDIR).display()
        ));
        Ok(())
    }

    fn run_compare(&self) -> Result<(), DriverError> {
        print_status("Starting 'compare' mode: generating and comparing images...");
        let mut results: Vec<TestResult> = Vec::with_capacity(self.tests.len());

        for name in &self.tests {
            print_status(format_args!("   Running test '{}'...", name));
            let result = runner::run_case(
                &self.renderer,
                name,
                TestMode::Compare,
                &self.expected_dir(name),
                &self.compare_dir(name),
            )?;
            print_status(format_args!("   {}: '{}'", result.status.label(), name));
            results.push(result);
        }

        let report_path = self.test_dir.join(REPORT_FILE);
        let document = report::render(&results);
        std::fs::write(&report_path, document).map_err(|source| DriverError::Report {
            path: report_path.clone(),
            source,
        })?;
        print_status(format_args!(
            "HTML report generated at: {}",
            report_path.display()
        ));
        Ok(())
    }

    fn expected_dir(&self, name: &str) -> PathBuf {
        self.test_dir.join(EXPECTED_SUBDIR).join(name)
    }

    fn compare_dir(&self, name: &str) -> PathBuf {
        self.test_dir.join(COMPARE_SUBDIR).join(name)
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
