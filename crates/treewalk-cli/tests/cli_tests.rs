//! Integration tests for the `treewalk` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the compact,
//! pretty, and stats subcommands through the actual binary, including
//! stdin/stdout piping, file I/O, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

fn treewalk() -> Command {
    Command::cargo_bin("treewalk").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// compact
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn compact_stdin_to_stdout() {
    treewalk()
        .arg("compact")
        .write_stdin(r#"{"a": 1, "b": null, "c": [2, null]}"#)
        .assert()
        .success()
        .stdout("{\"a\":1,\"c\":[2,null]}\n");
}

#[test]
fn compact_file_to_stdout() {
    treewalk()
        .args(["compact", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""readings":[12.5,null,13.25]"#))
        .stdout(predicate::str::contains("location").not())
        .stdout(predicate::str::contains("pager").not());
}

#[test]
fn compact_to_output_file() {
    let dir = std::env::temp_dir().join(format!("treewalk-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("out.json");

    treewalk()
        .args(["compact", "-i", sample_json_path(), "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    let written = std::fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["name"], "sensor-array");
    assert!(parsed.get("location").is_none());
    std::fs::remove_dir_all(&dir).unwrap();
}

// ─────────────────────────────────────────────────────────────────────────────
// pretty
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn pretty_default_indent() {
    treewalk()
        .arg("pretty")
        .write_stdin(r#"{"a":[1,null],"b":null}"#)
        .assert()
        .success()
        .stdout("{\n  \"a\": [\n    1,\n    null\n  ]\n}\n");
}

#[test]
fn pretty_custom_indent() {
    treewalk()
        .args(["pretty", "--indent", "4"])
        .write_stdin(r#"{"a":true}"#)
        .assert()
        .success()
        .stdout("{\n    \"a\": true\n}\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// stats
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stats_text_report() {
    treewalk()
        .args(["stats", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Objects:              2"))
        .stdout(predicate::str::contains("Skipped null members: 2"))
        .stdout(predicate::str::contains("Max depth:            2"));
}

#[test]
fn stats_json_report() {
    let output = treewalk()
        .args(["stats", "--json"])
        .write_stdin("[null, [1, 2]]")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["arrays"], 2);
    assert_eq!(stats["primitives"], 2);
    assert_eq!(stats["nulls"], 1);
    assert_eq!(stats["max_depth"], 2);
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_json_fails() {
    treewalk()
        .arg("compact")
        .write_stdin("{broken")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse input as JSON"));
}

#[test]
fn missing_input_file_fails() {
    treewalk()
        .args(["pretty", "-i", "/nonexistent/treewalk/input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn max_depth_is_enforced() {
    treewalk()
        .args(["--max-depth", "2", "compact"])
        .write_stdin("[[[1]]]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum nesting depth of 2 exceeded"));
}

#[test]
fn max_depth_allows_shallow_documents() {
    treewalk()
        .args(["compact", "--max-depth", "3"])
        .write_stdin("[[[1]]]")
        .assert()
        .success()
        .stdout("[[[1]]]\n");
}

fn nested_arrays(depth: usize) -> String {
    format!("{}1{}", "[".repeat(depth), "]".repeat(depth))
}

#[test]
fn max_depth_above_parser_default_is_honoured() {
    let input = nested_arrays(300);
    treewalk()
        .args(["--max-depth", "1000", "compact"])
        .write_stdin(input.clone())
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{input}\n")));
}

#[test]
fn default_depth_accepts_deep_documents() {
    treewalk()
        .arg("stats")
        .write_stdin(nested_arrays(200))
        .assert()
        .success()
        .stdout(predicate::str::contains("Max depth:            200"));
}

#[test]
fn default_depth_rejects_deeper_documents() {
    treewalk()
        .arg("compact")
        .write_stdin(nested_arrays(600))
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum nesting depth of 512 exceeded"));
}

#[test]
fn max_depth_above_cap_is_rejected() {
    treewalk()
        .args(["--max-depth", "100000", "compact"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--max-depth"));
}
