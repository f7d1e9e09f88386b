use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use std::path::Path;

// Helper function to set up a test Command instance pointed at a notes root
fn set_up_command(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jot").unwrap();
    // Set environment variables that will affect the test
    cmd.env_clear()
        .env("HOME", "/tmp")
        .env("JOT_DIR", root)
        .env("RUST_LOG", "error");
    cmd
}

#[test]
#[serial]
fn test_cli_create_then_show() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();

    // Creating a note: positional words form the body
    set_up_command(root)
        .args(["quick", "brown", "fox", "-t", "animals"])
        .assert()
        .success();

    // Showing with no arguments prints today's note back out, raw
    set_up_command(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("|quick brown fox|tags: animals\n"));

    // Tag mode finds the note through its symlink
    set_up_command(root)
        .args(["-t", "animals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("|quick brown fox|tags: animals\n"));
}

#[test]
#[serial]
fn test_cli_sequence_numbers_within_a_day() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();

    for body in ["first", "second", "third"] {
        set_up_command(root).arg(body).assert().success();
    }

    // Exactly one day directory with files 00, 01, 02
    let day_dir = fs::read_dir(root)
        .unwrap()
        .map(|e| e.unwrap().path())
        .next()
        .expect("Expected a day directory");
    let mut names: Vec<String> = fs::read_dir(&day_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["00", "01", "02"]);
}

#[test]
#[serial]
fn test_cli_show_missing_root_prints_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("never-created");

    set_up_command(&root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
#[serial]
fn test_cli_root_dir_flag_overrides_env() {
    let temp = tempfile::tempdir().unwrap();
    let env_root = temp.path().join("env-root");
    let flag_root = temp.path().join("flag-root");

    set_up_command(&env_root)
        .args(["--root-dir", flag_root.to_str().unwrap(), "note", "body"])
        .assert()
        .success();

    assert!(flag_root.exists());
    assert!(!env_root.exists());
}

#[test]
#[serial]
fn test_cli_from_day_range() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();

    // Lay out three day directories by hand so the range is deterministic
    for (day, body) in [
        ("2024-01-01", "old"),
        ("2024-01-03", "mid"),
        ("2024-01-05", "new"),
    ] {
        let dir = root.join(day);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("00"),
            format!("{} 10:00:00|{}|tags: \n", day, body),
        )
        .unwrap();
    }

    set_up_command(root)
        .args(["--from-day", "2024-01-02"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "2024-01-05 10:00:00|new|tags: \n2024-01-03 10:00:00|mid|tags: \n",
        ));
}

#[test]
#[serial]
fn test_cli_default_show_falls_back_to_last_populated_day() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();

    // Only an old day directory exists; "today" has nothing
    let dir = root.join("2024-01-01");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("00"), "2024-01-01 10:00:00|old note|tags: \n").unwrap();

    set_up_command(root)
        .assert()
        .success()
        .stdout(predicate::eq("2024-01-01 10:00:00|old note|tags: \n"));
}

#[test]
#[serial]
fn test_cli_invalid_from_day() {
    let temp = tempfile::tempdir().unwrap();

    set_up_command(temp.path())
        .args(["--from-day", "not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("from-day"));
}

#[test]
#[serial]
fn test_cli_malformed_day_directory_is_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("scratch")).unwrap();

    set_up_command(root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("scratch"));
}
