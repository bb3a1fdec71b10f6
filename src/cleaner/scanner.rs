// Directory scanning module
// Walks a root directory and collects every regular file with the target name

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use jwalk::{Parallelism, WalkDir};

use super::config::RunConfig;
use super::error::CleanerError;
use super::logger::Logger;
use super::patterns::ExcludePrefixes;
use super::types::FileList;

/// Type alias for progress callback function, called with the number of matches so far
pub type ProgressCallback<'a> = Box<dyn Fn(usize) + 'a>;

/// Finds files by exact name below a root
pub struct Scanner<'a> {
    target_name: String,
    excludes: ExcludePrefixes,
    max_depth: Option<usize>,
    logger: &'a dyn Logger,
    progress_callback: Option<ProgressCallback<'a>>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with no exclusions and no depth limit
    pub fn new(target_name: impl Into<String>, logger: &'a dyn Logger) -> Self {
        Self {
            target_name: target_name.into(),
            excludes: ExcludePrefixes::new(),
            max_depth: None,
            logger,
            progress_callback: None,
        }
    }

    /// Create a scanner configured from a run configuration
    pub fn from_config(config: &RunConfig, logger: &'a dyn Logger) -> Self {
        Self::new(config.target_name.clone(), logger)
            .with_excludes(config.excludes.clone())
            .with_max_depth(config.max_depth)
    }

    pub fn with_excludes(mut self, excludes: ExcludePrefixes) -> Self {
        self.excludes = excludes;
        self
    }

    /// Limit traversal depth. The root is depth 0, its entries depth 1.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set a progress callback function
    pub fn with_progress_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize) + 'a,
    {
        self.progress_callback = Some(Box::new(callback));
        self
    }

    /// Scan `root` and return the absolute paths of all matches, in walk order.
    ///
    /// Unreadable or vanished entries are skipped; only a missing root is an error.
    pub fn scan(&self, root: &Path) -> Result<FileList, CleanerError> {
        let root = root.canonicalize().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CleanerError::ScanRootNotFound {
                path: root.to_path_buf(),
            },
            _ => CleanerError::from_io_error(e, "opening scan root", Some(root.to_path_buf())),
        })?;

        let mut found = FileList::new();
        if self.excludes.is_excluded(&root) {
            self.logger
                .debug(&format!("Scan root {} is excluded", root.display()));
            return Ok(found);
        }

        let excludes = self.excludes.clone();
        let mut walker = WalkDir::new(&root)
            .parallelism(Parallelism::Serial)
            .sort(true)
            .skip_hidden(false)
            .follow_links(false)
            .process_read_dir(move |_depth, _path, _state, children| {
                // prune excluded subtrees before they are read
                children.retain(|entry| match entry {
                    Ok(entry) => !excludes.is_excluded(&entry.path()),
                    Err(_) => true,
                });
            });
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let target = OsStr::new(&self.target_name);
        for entry_result in walker {
            match entry_result {
                Ok(entry) => {
                    if !entry.file_type().is_file() || entry.file_name() != target {
                        continue;
                    }
                    let path = entry.path();
                    // one path per cache line, a line break would split it into several
                    if path.as_os_str().as_encoded_bytes().contains(&b'\n') {
                        self.logger.warn(&format!(
                            "Skipping {:?}: path contains a line break",
                            path
                        ));
                        continue;
                    }
                    found.push(path);
                    if let Some(ref callback) = self.progress_callback {
                        callback(found.len());
                    }
                }
                Err(e) => {
                    self.logger.debug(&format!("Skipping unreadable entry: {}", e));
                }
            }
        }

        Ok(found)
    }
}
