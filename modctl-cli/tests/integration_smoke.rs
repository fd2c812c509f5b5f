//! Smoke tests to verify command module wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_list_help() {
    let mut cmd = Command::cargo_bin("modctl").unwrap();
    cmd.arg("list").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Output format"));
}

#[test]
fn test_add_help() {
    let mut cmd = Command::cargo_bin("modctl").unwrap();
    cmd.arg("add").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Deadline (YYYY-MM-DD)"));
}

#[test]
fn test_edit_help() {
    let mut cmd = Command::cargo_bin("modctl").unwrap();
    cmd.arg("edit").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Item id to edit"));
}

#[test]
fn test_delete_help() {
    let mut cmd = Command::cargo_bin("modctl").unwrap();
    cmd.arg("delete").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Item id to delete"));
}

#[test]
fn test_sync_pending_help() {
    let mut cmd = Command::cargo_bin("modctl").unwrap();
    cmd.arg("sync").arg("pending").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("not yet linked"));
}

#[test]
fn test_sync_mark_linked_help() {
    let mut cmd = Command::cargo_bin("modctl").unwrap();
    cmd.arg("sync").arg("mark-linked").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Tracking issue number"));
}

#[test]
fn test_invalid_deadline_is_rejected_locally() {
    let mut cmd = Command::cargo_bin("modctl").unwrap();
    cmd.arg("add")
        .arg("--title")
        .arg("x")
        .arg("--deadline")
        .arg("next tuesday");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}
