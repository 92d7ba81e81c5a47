// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

fn result(name: &str, status: TestStatus) -> TestResult {
    TestResult {
        name: name.to_string(),
        status,
    }
}

#[test]
fn summary_counts_add_up() {
    let results = vec![
        result("a", TestStatus::Passed),
        result("b", TestStatus::Failed),
        result("c", TestStatus::Passed),
    ];

    let html = render(&results);
    assert!(html.contains("<strong>Total Tests:</strong> 3"));
    assert!(html.contains("Passed:</strong> 2"));
    assert!(html.contains("Failed:</strong> 1"));
}

#[test]
fn rows_appear_in_input_order() {
    let results = vec![
        result("route_add_test", TestStatus::Passed),
        result("route_pick_test", TestStatus::Failed),
    ];

    let html = render(&results);
    let first = html.find("<td>route_add_test</td>").unwrap();
    let second = html.find("<td>route_pick_test</td>").unwrap();
    assert!(first < second);
}

#[test]
fn statuses_carry_their_css_class() {
    let results = vec![
        result("good", TestStatus::Passed),
        result("bad", TestStatus::Failed),
    ];

    let html = render(&results);
    assert!(html.contains("<td class=\"status-passed\">PASSED</td>"));
    assert!(html.contains("<td class=\"status-failed\">FAILED</td>"));
}

#[test]
fn identical_input_renders_identically() {
    let results = vec![
        result("a", TestStatus::Passed),
        result("b", TestStatus::Failed),
    ];

    assert_eq!(render(&results), render(&results));
}

#[test]
fn empty_run_renders_zero_counts() {
    let html = render(&[]);
    assert!(html.contains("<strong>Total Tests:</strong> 0"));
    assert!(html.contains("Passed:</strong> 0"));
    assert!(html.contains("Failed:</strong> 0"));
    assert!(!html.contains("<td>"));
}

#[test]
fn test_names_are_html_escaped() {
    let results = vec![result("a<b>&\"c\"", TestStatus::Passed)];

    let html = render(&results);
    assert!(html.contains("<td>a&lt;b&gt;&amp;&quot;c&quot;</td>"));
    assert!(!html.contains("<td>a<b>"));
}

#[test]
fn document_is_self_contained_html() {
    let html = render(&[result("a", TestStatus::Passed)]);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"));
    assert!(html.trim_end().ends_with("</html>"));
    assert!(!html.contains("src="));
    assert!(!html.contains("href="));
}
