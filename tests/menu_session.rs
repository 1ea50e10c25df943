use assert_cmd::Command;
use predicates::prelude::*;

fn notekeeper(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("notekeeper").unwrap();
    cmd.env("NOTEKEEPER_HOME", home)
        .env_remove("NOTEKEEPER_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn creates_and_lists_notes() {
    let temp_dir = tempfile::tempdir().unwrap();

    notekeeper(temp_dir.path())
        .write_stdin("1\nGroceries\nmilk,eggs\n2\nCall mom\n0\n3\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("#0 Groceries: milk,eggs | создано"))
        .stdout(predicate::str::contains("#1 Call mom: не сделано"))
        .stdout(predicate::str::contains("изменено").not());
}

#[test]
fn english_locale_from_flag() {
    let temp_dir = tempfile::tempdir().unwrap();

    notekeeper(temp_dir.path())
        .arg("--locale")
        .arg("en")
        .write_stdin("2\nCall mom\n0\n5\n0\n3\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("#0 Call mom: done | created"))
        .stdout(predicate::str::contains("| updated"));
}

#[test]
fn locale_and_format_from_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"locale":"en","timestamp_format":"stamp-%Y"}"#,
    )
    .unwrap();

    notekeeper(temp_dir.path())
        .write_stdin("1\nTodo\nwrite tests\n3\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("#0 Todo: write tests | created stamp-"));
}

#[test]
fn empty_notebook_message() {
    let temp_dir = tempfile::tempdir().unwrap();

    notekeeper(temp_dir.path())
        .arg("--locale")
        .arg("en")
        .write_stdin("3\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet."));
}

#[test]
fn delete_out_of_range_keeps_running() {
    let temp_dir = tempfile::tempdir().unwrap();

    notekeeper(temp_dir.path())
        .write_stdin("1\na\nb\n7\n5\n3\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No note at index 4 (notebook holds 1)"))
        .stdout(predicate::str::contains("#0 a: b"));
}

#[test]
fn closed_stdin_exits_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();

    notekeeper(temp_dir.path())
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn broken_config_fails_at_startup() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("config.json"), "{oops").unwrap();

    notekeeper(temp_dir.path())
        .write_stdin("9\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}
