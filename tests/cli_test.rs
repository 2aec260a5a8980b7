//! Integration tests for the singleref CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

/// Runs the binary with no `SINGLEREF_*` or `RUST_LOG` variables and with the
/// user config dir pointed at a path that does not exist.
fn singleref() -> Command {
    let mut cmd = Command::cargo_bin("singleref").unwrap();
    cmd.env_remove("SINGLEREF_DECODE_MODE")
        .env_remove("SINGLEREF_WARN_ON_UNKNOWN")
        .env_remove("RUST_LOG")
        .env("HOME", "/nonexistent/singleref-home")
        .env("XDG_CONFIG_HOME", "/nonexistent/singleref-home/.config");
    cmd
}

/// Same as [`singleref`] with the user config dir rooted at `home`
fn singleref_in_home(home: &Path) -> Command {
    let mut cmd = singleref();
    cmd.env("HOME", home).env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

/// Where `dirs::config_dir()` resolves under a redirected `HOME`
fn user_config_file(home: &Path) -> PathBuf {
    let config_dir = if cfg!(target_os = "macos") {
        home.join("Library").join("Application Support")
    } else {
        home.join(".config")
    };
    config_dir.join("singleref").join("config.toml")
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_values_command() {
    singleref()
        .arg("values")
        .assert()
        .success()
        .stdout("admin\nuser\n");
}

#[test]
fn test_check_accepts_declared_literal() {
    singleref()
        .args(["check", "admin"])
        .assert()
        .success()
        .stdout("valid\n");

    singleref()
        .args(["check", "\"user\""])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn test_check_rejects_wrong_case_and_non_strings() {
    for value in ["User", "guest", "42", "null", "{}"] {
        singleref()
            .args(["check", value])
            .assert()
            .failure()
            .stdout("invalid\n");
    }
}

#[test]
fn test_decode_permissive_passes_unknown_through() {
    let config = config_file("mode = \"permissive\"\n");
    singleref()
        .arg("decode")
        .arg("not-a-real-value")
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout("\"not-a-real-value\"\n")
        .stderr(predicate::str::contains("Accepted unknown SingleRefType value"));
}

#[test]
fn test_decode_strict_flag_rejects_unknown() {
    let config = config_file("mode = \"permissive\"\n");
    singleref()
        .args(["decode", "guest", "--strict", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for enum SingleRefType"));
}

#[test]
fn test_decode_env_overrides_config_file() {
    let config = config_file("mode = \"permissive\"\n");
    singleref()
        .env("SINGLEREF_DECODE_MODE", "strict")
        .args(["decode", "guest", "--config"])
        .arg(config.path())
        .assert()
        .failure();

    singleref()
        .env("SINGLEREF_DECODE_MODE", "strict")
        .args(["decode", "admin", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout("\"admin\"\n");
}

#[test]
fn test_decode_missing_config_file_fails() {
    singleref()
        .args(["decode", "admin", "--config", "/nonexistent/singleref.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load decode configuration"));
}

#[test]
fn test_encode_command() {
    singleref()
        .args(["encode", "user"])
        .assert()
        .success()
        .stdout("\"user\"\n");

    singleref()
        .args(["encode", "Admin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot encode 'Admin'"));
}

#[test]
fn test_rust_log_controls_filter() {
    let config = config_file("mode = \"permissive\"\n");
    singleref()
        .env("RUST_LOG", "debug")
        .args(["decode", "admin", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Decoding with mode permissive"));

    singleref()
        .args(["decode", "admin", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Decoding with mode").not());
}

#[test]
fn test_verbose_flag_enables_debug_logs() {
    let config = config_file("mode = \"strict\"\n");
    singleref()
        .args(["--verbose", "decode", "user", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Decoding with mode strict"));
}

#[cfg(unix)]
#[test]
fn test_decode_reads_default_user_config() {
    let home = TempDir::new().unwrap();
    let config_path = user_config_file(home.path());
    std::fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    std::fs::write(&config_path, "mode = \"strict\"\n").unwrap();

    singleref_in_home(home.path())
        .args(["decode", "guest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for enum SingleRefType"));

    std::fs::remove_file(&config_path).unwrap();

    singleref_in_home(home.path())
        .args(["decode", "guest"])
        .assert()
        .success()
        .stdout("\"guest\"\n");
}
