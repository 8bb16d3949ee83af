//! Tests for the config file watcher.

use super::config_watcher::is_relevant;
use super::*;
use notify::event::{CreateKind, ModifyKind, RemoveKind};
use notify::{Event, EventKind};
use std::ffi::OsStr;
use std::path::PathBuf;

fn event(kind: EventKind, path: &str) -> Event {
    Event::new(kind).add_path(PathBuf::from(path))
}

#[test]
fn watcher_new_with_nonexistent_path_succeeds() {
    let watcher = ConfigWatcher::new(PathBuf::from("/tmp/nonexistent_quillview_test.toml"));
    assert!(watcher.is_ok());
}

#[test]
fn watcher_keeps_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# test").unwrap();

    let watcher = ConfigWatcher::new(path.clone()).unwrap();
    assert_eq!(watcher.path(), path.as_path());
}

#[test]
fn modify_and_create_of_our_file_are_relevant() {
    let name = OsStr::new("config.toml");
    assert!(is_relevant(
        &event(EventKind::Modify(ModifyKind::Any), "/cfg/config.toml"),
        name
    ));
    assert!(is_relevant(
        &event(EventKind::Create(CreateKind::File), "/cfg/config.toml"),
        name
    ));
}

#[test]
fn other_files_and_removals_are_ignored() {
    let name = OsStr::new("config.toml");
    assert!(!is_relevant(
        &event(EventKind::Modify(ModifyKind::Any), "/cfg/other.toml"),
        name
    ));
    assert!(!is_relevant(
        &event(EventKind::Remove(RemoveKind::File), "/cfg/config.toml"),
        name
    ));
}
