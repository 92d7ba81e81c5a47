// SPDX-License-Identifier: MIT

//! Static HTML report rendering.
//!
//! `render` is pure: the same result sequence always produces the same
//! document, with table rows in input order.

use std::fmt::Write;

use crate::runner::{TestResult, TestStatus};

const PREAMBLE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <title>Test Results</title>
    <style>
      body { font-family: sans-serif; margin: 2em; }
      h1, h2 { color: #333; }
      table { border-collapse: collapse; width: 60%; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
      th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
      th { background-color: #f2f2f2; }
      .status-passed { color: #28a745; font-weight: bold; }
      .status-failed { color: #dc3545; font-weight: bold; }
      .summary { margin-bottom: 2em; }
    </style>
  </head>
  <body>
    <h1>mbgl-glfw Test Report</h1>
"#;

/// Render the run summary and per-test table as a self-contained HTML page.
pub fn render(results: &[TestResult]) -> String {
    let total = results.len();
    let passed = results
        .iter()
        .filter(|r| r.status == TestStatus::Passed)
        .count();
    let failed = total - passed;

    let mut doc = String::from(PREAMBLE);
    doc.push_str("    <div class=\"summary\">\n");
    doc.push_str("      <h2>Summary</h2>\n");
    let _ = writeln!(doc, "      <p><strong>Total Tests:</strong> {}</p>", total);
    let _ = writeln!(
        doc,
        "      <p><strong class=\"status-passed\">Passed:</strong> {}</p>",
        passed
    );
    let _ = writeln!(
        doc,
        "      <p><strong class=\"status-failed\">Failed:</strong> {}</p>",
        failed
    );
    doc.push_str("    </div>\n");
    doc.push_str("    <h2>Details</h2>\n");
    doc.push_str("    <table>\n");
    doc.push_str("      <thead>\n");
    doc.push_str("        <tr>\n");
    doc.push_str("          <th>Test Name</th>\n");
    doc.push_str("          <th>Status</th>\n");
    doc.push_str("        </tr>\n");
    doc.push_str("      </thead>\n");
    doc.push_str("      <tbody>\n");

    for result in results {
        let class = match result.status {
            TestStatus::Passed => "status-passed",
            TestStatus::Failed => "status-failed",
        };
        doc.push_str("        <tr>\n");
        let _ = writeln!(doc, "          <td>{}</td>", escape(&result.name));
        let _ = writeln!(
            doc,
            "          <td class=\"{}\">{}</td>",
            class,
            result.status.label()
        );
        doc.push_str("        </tr>\n");
    }

    doc.push_str("      </tbody>\n");
    doc.push_str("    </table>\n");
    doc.push_str("  </body>\n");
    doc.push_str("</html>\n");
    doc
}

/// Escape text for interpolation into HTML content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
