use assert_fs::prelude::*;
use funceble_helpers::{Error, File};
use predicates::prelude::*;

#[test]
fn test_write_creates_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let child = temp.child("hi");

    File::new(child.path())
        .write("Hello, World! I'm domain2idna", false)
        .unwrap();

    child.assert("Hello, World! I'm domain2idna");
}

#[test]
fn test_write_appends_by_default() {
    let temp = assert_fs::TempDir::new().unwrap();
    let child = temp.child("hi");
    child.write_str("Hello").unwrap();

    let file = File::new(child.path());
    file.write(", World!", false).unwrap();
    file.write("\nBye", false).unwrap();

    child.assert("Hello, World!\nBye");
}

#[test]
fn test_write_overwrite_replaces_content() {
    let temp = assert_fs::TempDir::new().unwrap();
    let child = temp.child("hi");
    child
        .write_str("Hello, World! I'm domain2idna")
        .unwrap();

    File::new(child.path())
        .write("Hello, World! Python is great, you should consider learning it!", true)
        .unwrap();

    child.assert(predicate::str::contains("domain2idna").not());
    child.assert("Hello, World! Python is great, you should consider learning it!");
}

#[test]
fn test_write_keeps_newlines_untranslated() {
    let temp = assert_fs::TempDir::new().unwrap();
    let child = temp.child("lines");

    File::new(child.path()).write("a\nb\n", true).unwrap();

    assert_eq!(std::fs::read(child.path()).unwrap(), b"a\nb\n");
}

#[test]
fn test_read_round_trip() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = File::new(temp.child("hi").path());

    file.write("Hello, World! This has been written by Fun Ilrys.", true)
        .unwrap();

    assert_eq!(
        file.read().unwrap(),
        "Hello, World! This has been written by Fun Ilrys."
    );
}

#[test]
fn test_read_missing_file_is_not_found() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = File::new(temp.child("missing.txt").path());

    assert!(matches!(file.read(), Err(Error::NotFound { .. })));
}

#[test]
fn test_delete_removes_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let child = temp.child("hi");
    child.touch().unwrap();

    let file = File::new(child.path());
    assert!(file.exists());

    file.delete().unwrap();
    child.assert(predicate::path::missing());
    assert!(!file.exists());

    file.delete().unwrap();
}

#[test]
fn test_exists_is_not_cached() {
    let temp = assert_fs::TempDir::new().unwrap();
    let child = temp.child("later");
    let file = File::new(child.path());

    assert!(!file.exists());
    child.touch().unwrap();
    assert!(file.exists());
}
