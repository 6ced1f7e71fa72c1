//! End-to-end checks for the starshelf binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_serve_subcommand() {
    Command::cargo_bin("starshelf")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn serve_help_documents_cors_flags() {
    Command::cargo_bin("starshelf")
        .unwrap()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--cors-origin"))
        .stdout(predicate::str::contains("--cors-permissive"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("starshelf")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}
