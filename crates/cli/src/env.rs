// SPDX-License-Identifier: MIT

//! Centralized environment variable access.
//!
//! All environment variables read by the harness are defined here. Use these
//! accessors instead of calling `std::env::var()` directly.

use std::path::PathBuf;

/// Test-root directory override.
pub const GLFW_TEST_DIR: &str = "GLFW_TEST_DIR";

/// Suite file override (also wired to the `--suite` flag).
pub const GLFW_TEST_SUITE: &str = "GLFW_TEST_SUITE";

/// `GLFW_TEST_DIR` — directory the `glfw_test` tree lives under.
/// The driver falls back to the current directory when unset.
pub fn test_dir() -> Option<PathBuf> {
    std::env::var(GLFW_TEST_DIR).ok().map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
