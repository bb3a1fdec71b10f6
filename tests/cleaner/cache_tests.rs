// Tests for the cache store

use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use thumbs_cleaner::cleaner::{CacheStore, CleanerError, FileList};

#[test]
fn test_save_and_load_list() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path());
    let list = FileList::from(vec![
        PathBuf::from("/home/u/pics/Thumbs.db"),
        PathBuf::from("/home/u/pics/2019/Thumbs.db"),
        PathBuf::from("/home/u/pics/Thumbs.db"),
    ]);

    store.save(&list).unwrap();

    assert_eq!(store.load().unwrap(), list);
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "/home/u/pics/Thumbs.db\n/home/u/pics/2019/Thumbs.db\n/home/u/pics/Thumbs.db\n"
    );
}

#[test]
fn test_save_and_load_empty_list() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path());

    store.save(&FileList::new()).unwrap();

    assert!(store.exists());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_cache_file_location() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path());

    assert_eq!(store.path(), dir.path().join("thumbs_list"));
}

#[test]
fn test_load_missing_cache() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path().join("never-created"));

    assert!(!store.exists());
    match store.load() {
        Err(CleanerError::CacheNotFound { path }) => assert_eq!(path, store.path()),
        other => panic!("expected CacheNotFound, got {:?}", other),
    }
}

#[test]
fn test_clear_removes_cache() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path());
    store.save(&FileList::from(vec![PathBuf::from("/a/Thumbs.db")])).unwrap();

    store.clear().unwrap();

    assert!(!store.exists());
    assert!(store.clear().is_ok());
}
