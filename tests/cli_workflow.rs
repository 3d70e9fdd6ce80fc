#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rolodeck(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin("rolodeck"));
    cmd.env_remove("ROLODECK_HOME")
        .env("NO_COLOR", "1")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

#[test]
fn test_first_run_seeds_default_contacts() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("Data");

    rolodeck(&data_dir)
        .args(["lookup", "j"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 contact(s):"))
        .stdout(predicate::str::contains("Jesus"))
        .stdout(predicate::str::contains("Julia"));

    let raw = fs::read_to_string(data_dir.join("contacts.json")).unwrap();
    assert!(raw.contains("\"name\": \"Brad\""));
    assert!(raw.contains("\"phone\": \"123-456-7890\""));
}

#[test]
fn test_add_update_delete_workflow() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path();

    rolodeck(data_dir)
        .args(["add", "  Mary   Jane ", "(555) 123.4567"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mary Jane added to contacts (555-123-4567).",
        ));

    rolodeck(data_dir)
        .args(["update", "5551234567", "555 765 4321"])
        .assert()
        .success()
        .stdout(predicate::str::contains("555-123-4567 -> 555-765-4321"));

    rolodeck(data_dir)
        .args(["find", "mary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("555-765-4321"))
        .stdout(predicate::str::contains("555-123-4567").not());

    rolodeck(data_dir)
        .args(["rm", "555-765-4321"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact removed: Mary Jane"));

    rolodeck(data_dir)
        .args(["lookup", "mary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching contacts found."));
}

#[test]
fn test_rejections_exit_nonzero_without_writing() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path();

    // Seed the file first.
    rolodeck(data_dir).arg("list").assert().success();
    let before = fs::read_to_string(data_dir.join("contacts.json")).unwrap();

    rolodeck(data_dir)
        .args(["add", "BRAD", "555-555-5555"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("That name already exists"));

    rolodeck(data_dir)
        .args(["add", "Bradley", "123 456 7890"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("That number already exists"));

    rolodeck(data_dir)
        .args(["add", "Al", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly 10 digits"));

    rolodeck(data_dir)
        .args(["delete", "000-000-0000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact not found"));

    let after = fs::read_to_string(data_dir.join("contacts.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_corrupt_file_is_reported_and_tolerated() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path();
    fs::write(data_dir.join("contacts.json"), "this is not json").unwrap();

    rolodeck(data_dir)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error loading contacts"))
        .stdout(predicate::str::contains("No contacts yet."))
        .stdout(predicate::str::contains("Error loading contacts").not());

    rolodeck(data_dir)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("contacts.json\n"))
        .stdout(predicate::str::contains("Error").not());
}

#[test]
fn test_menu_reports_load_problems_inline() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path();
    fs::write(data_dir.join("contacts.json"), "this is not json").unwrap();

    rolodeck(data_dir)
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error loading contacts"))
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

#[test]
fn test_menu_session_over_stdin() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path();

    rolodeck(data_dir)
        .write_stdin("x\n2\nJoey\n321-555-0000\n1\njoe\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Lookup Contact"))
        .stdout(predicate::str::contains("Invalid format. Please enter numbers."))
        .stdout(predicate::str::contains("Joey added to contacts"))
        .stdout(predicate::str::contains("Found 2 contact(s):"))
        .stdout(predicate::str::ends_with("Goodbye!\n"));

    let raw = fs::read_to_string(data_dir.join("contacts.json")).unwrap();
    assert!(raw.contains("Joey"));
}

#[test]
fn test_seeding_disabled_by_config() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path();
    fs::write(
        data_dir.join("config.json"),
        r#"{ "file_name": "friends.json", "seed_defaults": false }"#,
    )
    .unwrap();

    rolodeck(data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts yet."));
    assert!(!data_dir.join("friends.json").exists());

    rolodeck(data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created contacts file with 0 contact(s)."));

    rolodeck(data_dir)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("friends.json"));
}

#[test]
fn test_config_show_and_set() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path();

    rolodeck(data_dir)
        .args(["config", "seed-defaults", "no"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed-defaults set to false"));

    rolodeck(data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("file-name = contacts.json"))
        .stdout(predicate::str::contains("seed-defaults = false"));

    rolodeck(data_dir)
        .args(["config", "colour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn test_contacts_file_cannot_replace_config() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path();

    rolodeck(data_dir)
        .args(["config", "file-name", "config.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reserved for configuration"));
    rolodeck(data_dir)
        .args(["config", "file-name", ".."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid file name"));

    rolodeck(data_dir)
        .args(["add", "Mary Jane", "555-123-4567"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error").not());

    rolodeck(data_dir)
        .args(["lookup", "mary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("555-123-4567"));

    let config = fs::read_to_string(data_dir.join("config.json")).unwrap_or_default();
    assert!(!config.contains("Mary Jane"));
    let contacts = fs::read_to_string(data_dir.join("contacts.json")).unwrap();
    assert!(contacts.contains("Mary Jane"));
}

#[test]
fn test_data_dir_from_environment() {
    let temp = TempDir::new().unwrap();

    Command::new(cargo_bin("rolodeck"))
        .env("ROLODECK_HOME", temp.path())
        .env("NO_COLOR", "1")
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts.json"));

    assert!(temp.path().join("contacts.json").exists());
}
