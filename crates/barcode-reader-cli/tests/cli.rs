//! End-to-end tests for the barcode-reader binary

mod common;

use assert_cmd::Command;
use image::{GrayImage, Luma};
use predicates::str::contains;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Command with the user config directory pointed at an empty temp dir
fn cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("barcode-reader").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

fn blank_png(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("blank.png");
    GrayImage::from_pixel(64, 64, Luma([255u8])).save(&path).unwrap();
    path
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1, "expected one line, got: {stdout}");
    serde_json::from_str(stdout.trim_end()).unwrap()
}

#[test]
fn missing_argument_exits_1_with_plain_text() {
    let home = tempdir().unwrap();
    cmd(home.path())
        .assert()
        .code(1)
        .stdout("No image path provided.\n");
}

#[test]
fn nonexistent_file_reports_error_json_and_exits_0() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.png");

    let output = cmd(home.path()).arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    let message = json["error"].as_str().unwrap();
    assert!(!message.is_empty());
    assert!(message.contains("does-not-exist.png"));
}

#[test]
fn non_image_file_reports_error_json() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("readme.txt");
    std::fs::write(&path, "plain text, no pixels here").unwrap();

    cmd(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(contains(r#"{"error": "Cannot identify image file"#));
}

#[test]
fn blank_image_prints_empty_array() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let path = blank_png(&dir);

    cmd(home.path()).arg(&path).assert().success().stdout("[]\n");
}

#[test]
fn same_image_twice_gives_identical_output() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let path = blank_png(&dir);

    let first = cmd(home.path()).arg(&path).output().unwrap();
    let second = cmd(home.path()).arg(&path).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let path = blank_png(&dir);

    cmd(home.path())
        .arg("--verbose")
        .arg("--invert")
        .arg(&path)
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(contains("Loading image"))
        .stderr(contains("Found 0 barcode(s)"))
        .stderr(contains("Try inverted:   true"));
}

#[test]
fn malformed_config_reports_error_json() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let path = blank_png(&dir);
    let config = dir.path().join("config.json");
    std::fs::write(&config, "not json").unwrap();

    let output = cmd(home.path())
        .arg("--config")
        .arg(&config)
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Configuration error"));
}

#[test]
#[cfg(target_os = "linux")]
fn config_from_default_location_is_applied() {
    let home = tempdir().unwrap();
    let config_dir = home.path().join("barcode-reader");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.json"), r#"{"verbose": true}"#).unwrap();

    let dir = tempdir().unwrap();
    let path = blank_png(&dir);

    cmd(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(contains("Loading image"));
}

#[test]
fn single_ean13_prints_exact_json_line() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let path = common::save(&common::ean13("750103131130"), dir.path(), "ean13.png");

    cmd(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout("[{\"type\": \"EAN13\", \"data\": \"7501031311309\"}]\n");
}

#[test]
fn two_codes_give_two_records() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let img = common::side_by_side(
        &common::qr("left side", common::BLACK, common::WHITE),
        &common::ean13("400638133393"),
    );
    let path = common::save(&img, dir.path(), "pair.png");

    let output = cmd(home.path()).arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.contains(&serde_json::json!({"type": "QRCODE", "data": "left side"})));
    assert!(records.contains(&serde_json::json!({"type": "EAN13", "data": "4006381333931"})));
}

#[test]
fn inverted_qr_is_found_only_with_invert_flag() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let img = common::qr("negative", common::WHITE, common::BLACK);
    let path = common::save(&img, dir.path(), "negative.png");

    cmd(home.path()).arg(&path).assert().success().stdout("[]\n");

    cmd(home.path())
        .arg("--invert")
        .arg(&path)
        .assert()
        .success()
        .stdout("[{\"type\": \"QRCODE\", \"data\": \"negative\"}]\n");
}

#[test]
fn verbose_lists_each_detection() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let path = common::save(&common::ean13("750103131130"), dir.path(), "ean13.png");

    cmd(home.path())
        .arg("-v")
        .arg(&path)
        .assert()
        .success()
        .stderr(contains("Found 1 barcode(s)"))
        .stderr(contains("EAN13 (linear, 13 bytes)"));
}
