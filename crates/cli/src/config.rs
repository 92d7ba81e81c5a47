// SPDX-License-Identifier: MIT

//! Suite file loading.
//!
//! The suite file is TOML and externalizes the test list that used to be a
//! compiled-in constant:
//!
//! ```toml
//! renderer = "./mbgl-glfw"
//! tests = ["route_add_test", "route_pick_test"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default renderer executable, relative to the working directory.
pub const DEFAULT_RENDERER: &str = "./mbgl-glfw";

/// Errors raised while loading a suite file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read suite file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse suite file '{}': {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parsed suite file.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Renderer executable to drive (default: `./mbgl-glfw`).
    #[serde(default = "default_renderer")]
    pub renderer: PathBuf,

    /// Test case names, run in declaration order.
    #[serde(default)]
    pub tests: Vec<String>,
}

fn default_renderer() -> PathBuf {
    PathBuf::from(DEFAULT_RENDERER)
}

impl SuiteConfig {
    /// Load a suite from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
