//! Binary-level tests: output format, exit codes, store-directory wiring.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn mark(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mark").unwrap();
    cmd.arg("--dir").arg(dir);
    cmd
}

#[test]
fn ls_on_empty_store_prints_fixed_message() {
    let temp = tempdir().unwrap();

    mark(temp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout("There are no pending tasks!\n");

    // The store files were bootstrapped.
    assert!(temp.path().join("task.txt").exists());
    assert!(temp.path().join("completed.txt").exists());
}

#[test]
fn add_then_ls_shows_indexed_entry() {
    let temp = tempdir().unwrap();

    mark(temp.path())
        .args(["add", "2", "hello", "world"])
        .assert()
        .success()
        .stdout("Added task: \"hello world\" with priority 2.\n");

    mark(temp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout("1. hello world [2]\n");
}

#[test]
fn ls_orders_by_ascending_priority() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("task.txt"), "1 a\n3 b").unwrap();

    mark(temp.path()).args(["add", "2", "c"]).assert().success();

    mark(temp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout("1. a [1]\n2. c [2]\n3. b [3]\n");
}

#[test]
fn add_negative_priority_exits_1_without_mutation() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("task.txt"), "1 a").unwrap();

    mark(temp.path())
        .args(["add", "-1", "oops"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("priority cannot be negative"));

    assert_eq!(
        fs::read_to_string(temp.path().join("task.txt")).unwrap(),
        "1 a"
    );
}

#[test]
fn done_moves_task_to_completed() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("task.txt"), "2 water the plants").unwrap();

    mark(temp.path())
        .args(["done", "1"])
        .assert()
        .success()
        .stdout("Marked \"water the plants\" as done.\n");

    assert_eq!(
        fs::read_to_string(temp.path().join("task.txt")).unwrap(),
        ""
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("completed.txt")).unwrap(),
        "water the plants\n"
    );
}

#[test]
fn done_out_of_range_exits_1() {
    let temp = tempdir().unwrap();

    mark(temp.path())
        .args(["done", "4"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no pending task with index #4"));
}

#[test]
fn del_removes_by_listing_index() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("task.txt"), "3 low\n1 high").unwrap();

    // Index 1 is the highest-priority entry ("high"), not the first file line.
    mark(temp.path())
        .args(["del", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task #1"));

    mark(temp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout("1. low [3]\n");
}

#[test]
fn update_without_text_keeps_text() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("task.txt"), "1 x").unwrap();

    mark(temp.path())
        .args(["update", "1", "5"])
        .assert()
        .success()
        .stdout("Updated task #1: \"x\" [5]\n");

    assert_eq!(
        fs::read_to_string(temp.path().join("task.txt")).unwrap(),
        "5 x"
    );
}

#[test]
fn update_out_of_range_exits_1() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("task.txt"), "1 x").unwrap();

    mark(temp.path())
        .args(["update", "2", "5", "renamed"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no pending task with index #2"));

    assert_eq!(
        fs::read_to_string(temp.path().join("task.txt")).unwrap(),
        "1 x"
    );
}

#[test]
fn report_prints_counts_and_both_listings() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("task.txt"), "2 pending thing").unwrap();
    fs::write(temp.path().join("completed.txt"), "done thing\n").unwrap();

    mark(temp.path())
        .arg("report")
        .assert()
        .success()
        .stdout(
            "Pending : 1\n\
             1. pending thing [2]\n\
             \n\
             Completed : 1\n\
             1. done thing\n",
        );
}

#[test]
fn ls_json_is_machine_readable() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("task.txt"), "2 b\n1 a").unwrap();

    let output = mark(temp.path())
        .args(["ls", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(rows[0]["index"], 1);
    assert_eq!(rows[0]["text"], "a");
    assert_eq!(rows[1]["priority"], 2);
}

#[test]
fn missing_required_args_are_rejected_by_usage() {
    let temp = tempdir().unwrap();

    mark(temp.path())
        .arg("add")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    // Nothing was written.
    assert_eq!(
        fs::read_to_string(temp.path().join("task.txt")).unwrap_or_default(),
        ""
    );
}

#[test]
fn malformed_store_file_exits_2() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("task.txt"), "not a task line").unwrap();

    mark(temp.path())
        .arg("ls")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("malformed entry on line 1"));
}

#[test]
fn mark_dir_env_selects_store_directory() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("task.txt"), "1 from env dir").unwrap();

    Command::cargo_bin("mark")
        .unwrap()
        .env("MARK_DIR", temp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout("1. from env dir [1]\n");
}

#[test]
fn ls_twice_produces_identical_output() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("task.txt"), "2 b\n1 a\n2 c").unwrap();

    let first = mark(temp.path()).arg("ls").output().unwrap();
    let second = mark(temp.path()).arg("ls").output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}
