// SPDX-License-Identifier: MIT

//! Visual regression harness for the mbgl-glfw renderer.
//!
//! Drives the renderer executable once per named test case. In `gen` mode the
//! renderer's screenshots are stored as the golden baseline; in `compare` mode
//! they are re-rendered and pixel-compared against that baseline, and a static
//! HTML report summarizes the run.
//!
//! The renderer is a black box invoked as
//! `<renderer> --test-name <name> --test-mode <gen|compare> --test-dir <dir>`,
//! and the harness owns the directory tree under `<root>/glfw_test/`.

pub mod cli;
pub mod compare;
pub mod config;
pub mod driver;
pub mod env;
pub mod output;
pub mod report;
pub mod runner;
