//! Integration tests for the relink CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, output, exit codes, and filesystem effects.

mod common;

use common::TestEnv;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_cli_no_arguments() {
    let env = TestEnv::new();

    env.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    let env = TestEnv::new();

    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("relink"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    let env = TestEnv::new();

    env.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("shortest-path"));
}

#[test]
fn test_normalize_with_separators() {
    let env = TestEnv::new();

    env.command()
        .args(["--separator", "/", "normalize", "http://dddd\\dddd/rrr.gif", "C:\\rrr"])
        .assert()
        .success()
        .stdout("http://dddd/dddd/rrr.gif\nC:/rrr\n");

    env.command()
        .args(["--separator", "\\", "normalize", "/fff/../.\\ddd"])
        .assert()
        .success()
        .stdout("\\ddd\n");
}

#[test]
fn test_normalize_separator_from_env() {
    let env = TestEnv::new();

    env.command()
        .env("RELINK_SEPARATOR", "backslash")
        .args(["normalize", "C:/rrr"])
        .assert()
        .success()
        .stdout("C:\\rrr\n");
}

#[test]
fn test_normalize_separator_from_project_file() {
    let env = TestEnv::new();
    env.create_file("relink.yaml", "separator: backslash\n");

    env.command()
        .args(["normalize", "/a/b"])
        .assert()
        .success()
        .stdout("\\a\\b\n");
}

#[test]
fn test_normalize_json() {
    let env = TestEnv::new();

    let output = env
        .command()
        .args(["--separator", "/", "normalize", "--json", "file://C:\\x\\..\\y"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entry = &json[0];
    assert_eq!(entry["input"], "file://C:\\x\\..\\y");
    assert_eq!(entry["normalized"], "file://C:/y");
    assert_eq!(entry["prefix"], "file://C:");
    assert_eq!(entry["absolute"], true);
    assert_eq!(entry["segments"], serde_json::json!(["y"]));
}

#[test]
fn test_invalid_separator_flag() {
    let env = TestEnv::new();

    env.command()
        .args(["--separator", "|", "normalize", "/a"])
        .assert()
        .code(4);

    env.command()
        .args(["--separator", "|", "is-absolute", "/a"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid separator"));
}

#[test]
fn test_is_absolute_exit_codes() {
    let env = TestEnv::new();

    env.command().args(["is-absolute", "C:\\a"]).assert().success();
    env.command().args(["is-absolute", "/a"]).assert().success();
    env.command().args(["is-absolute", "C:a"]).assert().code(1);
    env.command()
        .args(["is-absolute", "a/b"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not absolute"));
}

#[test]
fn test_shortest_path() {
    let env = TestEnv::new();

    env.command()
        .args(["--separator", "/", "shortest-path", "/a/b/x", "/a/b/y"])
        .assert()
        .success()
        .stdout("./y\n");

    env.command()
        .args(["--separator", "/", "shortest-path", "C:/a", "D:/b"])
        .assert()
        .success()
        .stdout("D:/b\n");

    env.command()
        .args(["--separator", "/", "shortest-path", "--from-dir", "/a/b", "/a/c/d"])
        .assert()
        .success()
        .stdout("../c/d\n");
}

#[test]
fn test_shortest_path_rejects_relative() {
    let env = TestEnv::new();

    env.command()
        .args(["shortest-path", "a/b", "/c"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("must be absolute"));
}

#[cfg(unix)]
#[test]
fn test_link_creates_relocatable_symlink() {
    let env = TestEnv::new();
    env.create_file("project/data/file.txt", "payload");
    env.create_dir("project/links/sub");

    // relative targets are read from the link's directory
    env.command()
        .args(["link", "../../data/file.txt", "project/links/sub/link"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("../../data/file.txt <- "));

    fs::rename(env.path().join("project"), env.path().join("moved")).unwrap();
    assert_eq!(
        fs::read_to_string(env.path().join("moved/links/sub/link")).unwrap(),
        "payload"
    );
}

#[cfg(unix)]
#[test]
fn test_link_existing_entry_is_io_error() {
    let env = TestEnv::new();
    env.create_file("a/target", "x");
    env.create_file("a/link", "occupied");

    env.command()
        .args(["link", "target", "a/link"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("create symlink"));
}

#[test]
fn test_empty_directory() {
    let env = TestEnv::new();
    env.create_file("out/a.txt", "a");
    env.create_file("out/nested/b.txt", "b");

    env.command()
        .args(["empty", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed 2 files, 1 directories"));

    assert!(env.path().join("out").is_dir());
    assert_eq!(fs::read_dir(env.path().join("out")).unwrap().count(), 0);
}

#[test]
fn test_empty_json_report() {
    let env = TestEnv::new();
    env.create_file("out/a.txt", "a");

    let output = env.command().args(["empty", "--json", "out"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["files"], 1);
    assert_eq!(json["directories"], 0);
    assert_eq!(json["symlinks"], 0);
}

#[test]
fn test_empty_creates_or_skips_missing() {
    let env = TestEnv::new();

    env.command().args(["empty", "fresh"]).assert().success();
    assert!(env.path().join("fresh").is_dir());

    env.command()
        .args(["empty", "--no-create", "absent"])
        .assert()
        .success();
    assert!(!env.path().join("absent").exists());

    env.command()
        .env("RELINK_ENSURE_EXISTS", "false")
        .args(["empty", "also-absent"])
        .assert()
        .success();
    assert!(!env.path().join("also-absent").exists());
}

#[test]
fn test_ensure_dir() {
    let env = TestEnv::new();
    env.create_file("blocked", "x");

    env.command()
        .args(["ensure-dir", "a/b/c"])
        .assert()
        .success();
    assert!(env.path().join("a/b/c").is_dir());

    env.command()
        .args(["ensure-dir", "blocked"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_validate_config() {
    let env = TestEnv::new();
    let good = env.create_file("good.yaml", "separator: /\npurge:\n  ensure_exists: false\n");
    let bad_value = env.create_file("bad-value.yaml", "separator: \"|\"\n");
    let bad_key = env.create_file("bad-key.yaml", "follow: true\n");

    env.command()
        .arg("validate")
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));

    env.command()
        .arg("validate")
        .arg(&bad_value)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Validation error"));

    env.command()
        .arg("validate")
        .arg(&bad_key)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));

    env.command()
        .args(["validate", "missing.yaml"])
        .assert()
        .code(4);
}

#[test]
fn test_broken_project_config_is_config_error() {
    let env = TestEnv::new();
    env.create_file("relink.yaml", "separator: [oops");

    env.command()
        .args(["normalize", "/a"])
        .assert()
        .code(7);
}

#[test]
fn test_completions() {
    let env = TestEnv::new();

    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("relink"));
}
