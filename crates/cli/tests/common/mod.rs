// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)] // each test binary uses a subset of these helpers

//! Shared helpers for end-to-end harness tests.
//!
//! Tests drive the real binary against a scripted fake renderer: a shell
//! script that copies pre-made PNG fixtures into the requested `--test-dir`,
//! or misbehaves in a controlled way.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{Rgb, RgbImage};

pub fn glfwtest_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_glfwtest"))
}

/// Write a deterministic RGB PNG. `marker` perturbs the top-left pixel, so
/// two images with different markers differ in exactly one pixel.
pub fn write_png(path: &Path, width: u32, height: u32, marker: u8) {
    let mut img = RgbImage::from_pixel(width, height, Rgb([10, 20, 30]));
    img.put_pixel(0, 0, Rgb([marker, 20, 30]));
    img.save(path).unwrap();
}

/// Write an executable shell script acting as the renderer.
pub fn write_renderer(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fake-renderer.sh");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// Renderer script that copies `<fixtures>/<test name>/*.png` into the
/// requested `--test-dir`, regardless of mode. Fails (non-zero) if the
/// fixture directory has no PNGs, just like a crashing renderer would.
pub fn copying_renderer(dir: &Path, fixtures: &Path) -> PathBuf {
    let body = format!(
        r#"while [ $# -gt 0 ]; do
  case "$1" in
    --test-name) name="$2"; shift 2 ;;
    --test-mode) mode="$2"; shift 2 ;;
    --test-dir) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
cp "{fixtures}/$name"/*.png "$out"/"#,
        fixtures = fixtures.display()
    );
    write_renderer(dir, &body)
}

/// Renderer script that parses its arguments but produces nothing.
pub fn silent_renderer(dir: &Path) -> PathBuf {
    write_renderer(dir, "exit 0")
}

/// Renderer script that always exits with `code`.
pub fn failing_renderer(dir: &Path, code: i32) -> PathBuf {
    write_renderer(dir, &format!("exit {}", code))
}

/// Write a suite file pointing at `renderer` with the given test names.
pub fn write_suite(dir: &Path, renderer: &Path, tests: &[&str]) -> PathBuf {
    write_suite_named(dir, "suite.toml", renderer, tests)
}

/// Write a suite file under a specific name, for tests that need more than
/// one suite in the same root.
pub fn write_suite_named(
    dir: &Path,
    file_name: &str,
    renderer: &Path,
    tests: &[&str],
) -> PathBuf {
    let path = dir.join(file_name);
    let list = tests
        .iter()
        .map(|t| format!("\"{}\"", t))
        .collect::<Vec<_>>()
        .join(", ");
    fs::write(
        &path,
        format!(
            "renderer = \"{}\"\ntests = [{}]\n",
            renderer.display(),
            list
        ),
    )
    .unwrap();
    path
}

/// Run the harness with `GLFW_TEST_DIR` pointing at `root`.
pub fn run_harness(root: &Path, suite: &Path, mode: &str) -> Output {
    Command::new(glfwtest_bin())
        .args(["--test-mode", mode, "--suite"])
        .arg(suite)
        .env("GLFW_TEST_DIR", root)
        .output()
        .unwrap()
}

/// Path of the report the harness writes for `root`.
pub fn report_path(root: &Path) -> PathBuf {
    root.join("glfw_test").join("results.html")
}
