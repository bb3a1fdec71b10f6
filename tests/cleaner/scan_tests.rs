// Tests for the scanner
// Each test builds a small tree in a temp directory

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use thumbs_cleaner::cleaner::{ExcludePrefixes, FileList, Level, MemoryLogger, Scanner};

fn touch(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, b"thumbnail cache").unwrap();
    path
}

fn sorted(list: FileList) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = list.into_iter().collect();
    paths.sort();
    paths
}

#[test]
fn test_scan_finds_only_exact_name() {
    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();

    let a = touch(&root, "a/Thumbs.db");
    let b = touch(&root, "a/b/Thumbs.db");
    touch(&root, "a/thumbs.db");
    touch(&root, "a/Thumbs.db.bak");
    touch(&root, "a/old_Thumbs.db");
    fs::create_dir_all(root.join("c/Thumbs.db")).unwrap();

    let logger = MemoryLogger::new();
    let found = Scanner::new("Thumbs.db", &logger).scan(&root).unwrap();

    assert_eq!(sorted(found), vec![a, b]);
}

#[test]
fn test_scan_returns_absolute_paths() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "x/Thumbs.db");

    let logger = MemoryLogger::new();
    let found = Scanner::new("Thumbs.db", &logger).scan(dir.path()).unwrap();

    assert_eq!(found.len(), 1);
    assert!(found.iter().all(|p| p.is_absolute()));
}

#[test]
fn test_scan_skips_excluded_prefixes() {
    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();

    let kept = touch(&root, "a/Thumbs.db");
    touch(&root, "proc/x/Thumbs.db");
    let similar = touch(&root, "processes/Thumbs.db");

    let logger = MemoryLogger::new();
    let found = Scanner::new("Thumbs.db", &logger)
        .with_excludes(ExcludePrefixes::from_prefixes(&[root.join("proc")]))
        .scan(&root)
        .unwrap();

    assert_eq!(sorted(found), vec![kept, similar]);
}

#[test]
fn test_scan_respects_max_depth() {
    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();

    let depth1 = touch(&root, "Thumbs.db");
    let depth2 = touch(&root, "a/Thumbs.db");
    touch(&root, "a/b/Thumbs.db");
    touch(&root, "a/b/c/Thumbs.db");

    let logger = MemoryLogger::new();

    let found = Scanner::new("Thumbs.db", &logger)
        .with_max_depth(Some(2))
        .scan(&root)
        .unwrap();
    assert_eq!(sorted(found), vec![depth1.clone(), depth2]);

    let found = Scanner::new("Thumbs.db", &logger)
        .with_max_depth(Some(1))
        .scan(&root)
        .unwrap();
    assert_eq!(sorted(found), vec![depth1]);

    let found = Scanner::new("Thumbs.db", &logger)
        .with_max_depth(Some(0))
        .scan(&root)
        .unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_scan_is_deterministic() {
    let dir = tempdir().unwrap();
    for rel in ["b/Thumbs.db", "a/Thumbs.db", "c/d/Thumbs.db", "a/z/Thumbs.db"] {
        touch(dir.path(), rel);
    }

    let logger = MemoryLogger::new();
    let scanner = Scanner::new("Thumbs.db", &logger);
    let first = scanner.scan(dir.path()).unwrap();
    let second = scanner.scan(dir.path()).unwrap();

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[cfg(unix)]
#[test]
fn test_scan_does_not_report_symlinks() {
    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    let real = touch(&root, "real/Thumbs.db");
    fs::create_dir_all(root.join("link")).unwrap();
    std::os::unix::fs::symlink(&real, root.join("link/Thumbs.db")).unwrap();

    let logger = MemoryLogger::new();
    let found = Scanner::new("Thumbs.db", &logger).scan(&root).unwrap();

    assert_eq!(sorted(found), vec![real]);
}

#[test]
fn test_scan_empty_tree() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b/c")).unwrap();

    let logger = MemoryLogger::new();
    let found = Scanner::new("Thumbs.db", &logger).scan(dir.path()).unwrap();

    assert!(found.is_empty());
}

#[cfg(unix)]
#[test]
fn test_scan_skips_paths_with_line_breaks() {
    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    let normal = touch(&root, "a/Thumbs.db");
    let crafted = touch(&root, "x\n/victim/secret.txt\n/Thumbs.db");

    let logger = MemoryLogger::new();
    let found = Scanner::new("Thumbs.db", &logger).scan(&root).unwrap();

    assert_eq!(sorted(found), vec![normal]);
    assert!(crafted.exists());
    assert_eq!(logger.messages(Level::Warn).len(), 1);
}

#[cfg(unix)]
#[test]
fn test_scan_continues_past_unreadable_directory() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    let before = touch(&root, "a/Thumbs.db");
    touch(&root, "b_locked/Thumbs.db");
    let after = touch(&root, "c/Thumbs.db");

    let locked = root.join("b_locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        // privileged users read through mode 000
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let logger = MemoryLogger::new();
    let result = Scanner::new("Thumbs.db", &logger).scan(&root);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(sorted(result.unwrap()), vec![before, after]);
    assert!(!logger.messages(Level::Debug).is_empty());
}
