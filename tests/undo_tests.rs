//! Undo behaviour through the command-line interface.

mod common;

use common::*;

use predicates::prelude::*;
use std::fs;

#[test]
fn test_round_trip() {
    let original = ["Beach.JPG", "dog.png", "zebra.webp"];
    let temp = create_image_dir(&original);
    let dir = temp.path();

    run_rename(dir, "trip", &[]).success();
    assert!(dir.join("trip_0.jpg").exists());

    run_undo(dir, &[])
        .success()
        .stdout(predicate::str::contains(
            "Restored 3 file(s) to original names.",
        ));

    assert_eq!(list_dir(dir), original);
    assert_eq!(fs::read_to_string(dir.join("Beach.JPG")).unwrap(), "Beach.JPG");
}

#[test]
fn test_undo_without_history() {
    let temp = create_image_dir(&["img_0.png", "other.jpg"]);
    let dir = temp.path();

    run_undo(dir, &[])
        .success()
        .stdout(predicate::str::contains("No undo history found."));

    assert_eq!(list_dir(dir), vec!["img_0.png", "other.jpg"]);
}

#[test]
fn test_partial_restore_after_deletion() {
    let temp = create_image_dir(&["a.png", "b.png", "c.png"]);
    let dir = temp.path();

    run_rename(dir, "img", &[]).success();
    fs::remove_file(dir.join("img_2.png")).unwrap();

    run_undo(dir, &[])
        .success()
        .stdout(predicate::str::contains("Restored 2 file(s)"))
        .stdout(predicate::str::contains("1 of 3 recorded renames could not be reversed"));

    assert_eq!(list_dir(dir), vec!["a.png", "b.png"]);
}

#[test]
fn test_partial_restore_when_original_name_taken() {
    let temp = create_image_dir(&["a.png", "b.png"]);
    let dir = temp.path();

    run_rename(dir, "img", &[]).success();
    write_file(dir, "b.png");

    run_undo(dir, &[])
        .success()
        .stdout(predicate::str::contains("Restored 1 file(s)"));

    assert_eq!(list_dir(dir), vec!["a.png", "b.png", "img_1.png"]);
    assert!(!dir.join(".undo_log.json").exists());
}

#[test]
fn test_undo_only_reverts_latest_batch() {
    let temp = create_image_dir(&["a.png"]);
    let dir = temp.path();

    run_rename(dir, "img", &[]).success();
    write_file(dir, "b.png");
    run_rename(dir, "img", &[]).success();

    run_undo(dir, &[])
        .success()
        .stdout(predicate::str::contains("Restored 1 file(s)"));
    assert_eq!(list_dir(dir), vec!["b.png", "img_0.png"]);

    run_undo(dir, &[])
        .success()
        .stdout(predicate::str::contains("No undo history found."));
}

#[test]
fn test_undo_dry_run_keeps_log() {
    let temp = create_image_dir(&["a.png", "b.png"]);
    let dir = temp.path();

    run_rename(dir, "img", &[]).success();

    run_undo(dir, &["--dry-run"])
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stdout(predicate::str::contains("img_1.png → b.png"));

    assert_eq!(
        list_dir(dir),
        vec![".undo_log.json", "img_0.png", "img_1.png"]
    );
}

#[test]
fn test_malformed_log_fails() {
    let temp = create_image_dir(&["img_0.png"]);
    let dir = temp.path();
    fs::write(dir.join(".undo_log.json"), "[[\"img_0.png\"").unwrap();

    run_undo(dir, &[])
        .failure()
        .stderr(predicate::str::contains("malformed"));

    assert!(dir.join(".undo_log.json").exists());
    assert!(dir.join("img_0.png").exists());
}

#[test]
fn test_undo_dry_run_with_empty_log() {
    let temp = create_image_dir(&["img_0.png"]);
    let dir = temp.path();
    fs::write(dir.join(".undo_log.json"), "[]").unwrap();

    run_undo(dir, &["--dry-run"])
        .success()
        .stdout(predicate::str::contains("Undo log is empty"))
        .stdout(predicate::str::contains("DRY RUN").not());

    assert!(dir.join(".undo_log.json").exists());
}
