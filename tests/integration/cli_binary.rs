//! Integration tests for the CLI binary surface.
//!
//! Each test pins HOME and XDG_CONFIG_HOME to a temp directory so a global
//! settings file on the host cannot leak into the run.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_binary(temp_dir: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_inimerge");
    Command::new(bin)
        .env("HOME", temp_dir)
        .env("XDG_CONFIG_HOME", temp_dir.join("config"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn prints_merged_output_with_crlf_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("new.ini");
    let target = temp_dir.path().join("old.ini");
    fs::write(&template, "[S]\na=1\nb=2\n").unwrap();
    fs::write(&target, "[S]\na=9\n").unwrap();

    let output = run_binary(
        temp_dir.path(),
        &[template.to_str().unwrap(), target.to_str().unwrap()],
    );

    assert!(
        output.status.success(),
        "merge should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "[S]\r\na=9\r\nb=2\n");
}

#[test]
fn writes_output_file_when_given() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("new.ini");
    let target = temp_dir.path().join("old.ini");
    let merged = temp_dir.path().join("merged.ini");
    fs::write(&template, "k=1 # note\n").unwrap();
    fs::write(&target, "k=5 # old\n").unwrap();

    let output = run_binary(
        temp_dir.path(),
        &[
            template.to_str().unwrap(),
            target.to_str().unwrap(),
            merged.to_str().unwrap(),
        ],
    );

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&merged).unwrap(), "k=5 # note");
    // Nothing goes to stdout in file mode.
    assert!(output.stdout.is_empty());
}

#[test]
fn honors_line_ending_flag() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("new.ini");
    let target = temp_dir.path().join("old.ini");
    fs::write(&template, "[S]\na=1\n").unwrap();
    fs::write(&target, "[S]\n").unwrap();

    let output = run_binary(
        temp_dir.path(),
        &[
            template.to_str().unwrap(),
            target.to_str().unwrap(),
            "--line-ending",
            "lf",
        ],
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "[S]\na=1\n");
}

#[test]
fn missing_arguments_exit_nonzero_with_usage() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_binary(temp_dir.path(), &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.to_lowercase().contains("usage"));
}

#[test]
fn unrecognized_line_fails_with_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("new.ini");
    let target = temp_dir.path().join("old.ini");
    fs::write(&template, "[S]\na=1\n").unwrap();
    fs::write(&target, "not a line\n").unwrap();

    let output = run_binary(
        temp_dir.path(),
        &[template.to_str().unwrap(), target.to_str().unwrap()],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a recognized configuration line"));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_input_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("new.ini");
    fs::write(&template, "a=1\n").unwrap();

    let output = run_binary(
        temp_dir.path(),
        &[template.to_str().unwrap(), "absent.ini"],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.ini"));
}
