// SPDX-License-Identifier: MIT

//! Pixel-exact image comparison.
//!
//! Both images are normalized to 8-bit RGB before comparison, so a fully
//! opaque RGBA image matches its RGB counterpart. There is no tolerance:
//! any renderer non-determinism (GPU antialiasing jitter and the like) will
//! show up as a mismatch.

use std::path::Path;

use crate::output::print_status;

/// Outcome of comparing one expected image against its actual counterpart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// Same dimensions and identical RGB pixel data.
    Match,
    /// Pixel dimensions differ; pixels were not compared.
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    /// At least one pixel differs.
    PixelMismatch,
    /// Either file was missing, unreadable, or failed to decode.
    Unreadable(String),
}

/// Classify the relationship between two on-disk images.
///
/// All failure modes are folded into the returned variant; this never
/// errors upward.
pub fn classify(expected: &Path, actual: &Path) -> Comparison {
    let expected_img = match image::open(expected) {
        Ok(img) => img.to_rgb8(),
        Err(err) => {
            return Comparison::Unreadable(format!("{}: {}", expected.display(), err));
        }
    };
    let actual_img = match image::open(actual) {
        Ok(img) => img.to_rgb8(),
        Err(err) => {
            return Comparison::Unreadable(format!("{}: {}", actual.display(), err));
        }
    };

    if expected_img.dimensions() != actual_img.dimensions() {
        return Comparison::DimensionMismatch {
            expected: expected_img.dimensions(),
            actual: actual_img.dimensions(),
        };
    }

    if expected_img.as_raw() != actual_img.as_raw() {
        return Comparison::PixelMismatch;
    }

    Comparison::Match
}

/// Compare two images, logging the mismatch reason.
///
/// A missing or undecodable file counts as a mismatch rather than an error:
/// any comparison problem fails the test case, nothing more.
pub fn compare(expected: &Path, actual: &Path) -> bool {
    match classify(expected, actual) {
        Comparison::Match => true,
        Comparison::DimensionMismatch {
            expected: (ew, eh),
            actual: (aw, ah),
        } => {
            print_status(format_args!(
                "      - Mismatch: image dimensions differ: {}x{} vs {}x{}",
                ew, eh, aw, ah
            ));
            false
        }
        Comparison::PixelMismatch => {
            print_status("      - Mismatch: pixel data differs");
            false
        }
        Comparison::Unreadable(reason) => {
            print_status(format_args!(
                "      - Mismatch: could not read image: {}",
                reason
            ));
            false
        }
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
