// SPDX-License-Identifier: MIT

//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Visual regression harness for the mbgl-glfw renderer
#[derive(Parser, Clone, Debug)]
#[command(name = "glfwtest", version, about = "Visual regression harness for the mbgl-glfw renderer")]
pub struct Cli {
    /// "gen" captures baseline images, "compare" re-renders and checks them
    #[arg(long, value_enum)]
    pub test_mode: TestMode,

    /// Suite file listing the test cases to run
    #[arg(long, env = "GLFW_TEST_SUITE", default_value = "glfw-test.toml")]
    pub suite: PathBuf,

    /// Renderer executable, overriding the suite's `renderer` entry
    #[arg(long)]
    pub renderer: Option<PathBuf>,
}

/// Harness mode, forwarded to the renderer via `--test-mode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// Generate baseline images under `glfw_test/expected`
    Gen,
    /// Render into `glfw_test/compare` and diff against the baseline
    Compare,
}

impl TestMode {
    /// The mode string passed to the renderer.
    pub fn as_arg(&self) -> &'static str {
        match self {
            TestMode::Gen => "gen",
            TestMode::Compare => "compare",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
