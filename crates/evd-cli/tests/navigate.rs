use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn test_routes_lists_table() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evd")
        .env("EVD_HOME", dir.path())
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/event/:id"))
        .stdout(predicate::str::contains("CreateEvent"))
        .stdout(predicate::str::contains("requiresAdmin"));
}

#[test]
fn test_guest_is_redirected_to_auth() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evd")
        .env("EVD_HOME", dir.path())
        .args(["navigate", "/settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/auth (Auth) [redirected from /settings]",
        ));
}

#[test]
fn test_non_admin_is_redirected_home() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evd")
        .env("EVD_HOME", dir.path())
        .args([
            "--email",
            "user@example.com",
            "--password",
            "user123",
            "navigate",
            "/dashboard",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/ (Map) [redirected from /dashboard]",
        ));
}

#[test]
fn test_admin_reaches_dashboard() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evd")
        .env("EVD_HOME", dir.path())
        .args([
            "navigate",
            "/dashboard",
            "--email",
            "admin@example.com",
            "--password",
            "admin123",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("/dashboard (Dashboard)\n"));
}

#[test]
fn test_production_base_is_stripped() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "environment = \"production\"\n",
    )
    .unwrap();

    let output = cargo_bin_cmd!("evd")
        .env("EVD_HOME", dir.path())
        .args(["--json", "navigate", "/pupsarin-tech/event/3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["to"]["path"], "/event/3");
    assert_eq!(value["to"]["params"]["id"], "3");
    assert!(value.get("redirectedFrom").is_none());
}

#[test]
fn test_unknown_path_fails() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evd")
        .env("EVD_HOME", dir.path())
        .args(["navigate", "/nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route matches '/nowhere'"));
}

#[test]
fn test_bad_credentials_fail() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evd")
        .env("EVD_HOME", dir.path())
        .args([
            "--email",
            "admin@example.com",
            "--password",
            "wrong",
            "navigate",
            "/",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));
}

#[test]
fn test_login_shows_session() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evd")
        .env("EVD_HOME", dir.path())
        .args(["login", "admin@example.com", "admin123"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Logged in as Admin User <admin@example.com> (admin)",
        ));
}

#[test]
fn test_login_failure_json() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evd")
        .env("EVD_HOME", dir.path())
        .args(["--json", "login", "user@example.com", "nope"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("\"error\": \"Invalid credentials\""));
}
