//! Round trips through real files in scratch directories.

use std::fs;

use jsondb::{Collection, FsFileAccess, JsonCodec, StoreError};
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Task {
    id: u64,
    title: String,
    done: bool,
    tags: Vec<String>,
}

fn task(id: u64, title: &str, done: bool) -> Task {
    Task {
        id,
        title: title.to_string(),
        done,
        tags: vec!["inbox".to_string()],
    }
}

#[test]
fn missing_file_is_created_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");

    let tasks = Collection::<Task>::open(&path).unwrap();
    assert!(tasks.is_empty());
    assert!(path.exists());
    assert_eq!(tasks.path(), path.as_path());

    tasks.store().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
}

#[test]
fn store_then_reopen_reproduces_sequence() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");

    let mut tasks = Collection::<Task>::open(&path).unwrap();
    tasks.add(task(3, "write docs", false));
    tasks.add(task(1, "ship it", true));
    tasks.add(task(2, "celebrate", false));
    tasks.store().unwrap();

    let reopened = Collection::<Task>::open(&path).unwrap();
    assert_eq!(reopened.all(), tasks.all());
    let ids: Vec<u64> = reopened.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn written_file_is_indented_json_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");

    let mut tasks = Collection::<Task>::open(&path).unwrap();
    tasks.add(task(1, "ship it", true));
    tasks.store().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("[\n  {\n"));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value[0]["title"], "ship it");
    assert_eq!(value.as_array().unwrap().len(), 1);
}

#[test]
fn corrupt_file_opens_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");
    fs::write(&path, "[{\"id\": 1, \"title\": ").unwrap();

    let tasks = Collection::<Task>::open(&path).unwrap();
    assert!(tasks.is_empty());
}

#[test]
fn wrong_record_shape_opens_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let tasks = Collection::<Task>::open(&path).unwrap();
    assert!(tasks.is_empty());
}

#[test]
fn missing_directory_fails_construction() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nowhere").join("tasks.json");

    let err = Collection::<Task>::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Open { .. }));
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn store_shrinks_file_after_removals() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");

    let mut tasks = Collection::<Task>::open(&path).unwrap();
    for id in 0..20 {
        tasks.add(task(id, "a fairly long task title to pad the file", id % 2 == 0));
    }
    tasks.store().unwrap();

    assert_eq!(tasks.remove_filter(|t| t.done), 10);
    tasks.store().unwrap();

    let reopened = Collection::<Task>::open(&path).unwrap();
    assert_eq!(reopened.len(), 10);
    assert!(reopened.iter().all(|t| !t.done));
}

#[test]
fn atomic_writes_with_compact_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");

    let mut tasks: Collection<Task, _, _> =
        Collection::open_with(&path, JsonCodec::compact(), FsFileAccess::atomic()).unwrap();
    tasks.add(task(1, "ship it", true));
    tasks.store().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 1);

    let reopened = Collection::<Task>::open(&path).unwrap();
    assert_eq!(reopened.all(), tasks.all());

    let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 1);
}
