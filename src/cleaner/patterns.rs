//! Path-prefix exclusions for the scanner.

use std::path::{Path, PathBuf};

/// Virtual and device filesystems that never hold user files.
pub const DEFAULT_EXCLUDES: &[&str] = &["/proc", "/sys", "/dev", "/run"];

/// Set of path prefixes the scanner must not enter.
///
/// Matching is per path component, so `/proc` excludes `/proc/1/status`
/// but not `/processes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludePrefixes {
    prefixes: Vec<PathBuf>,
}

impl ExcludePrefixes {
    /// Create an empty exclusion set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with the default exclusions.
    pub fn with_defaults() -> Self {
        Self::from_prefixes(DEFAULT_EXCLUDES)
    }

    pub fn from_prefixes<P: AsRef<Path>>(prefixes: &[P]) -> Self {
        let mut set = Self::new();
        for prefix in prefixes {
            set.add(prefix);
        }
        set
    }

    /// Add a prefix. Duplicates are ignored.
    ///
    /// Prefixes that exist are resolved to their canonical form, since the
    /// scanner walks a canonicalized root and never follows links.
    pub fn add<P: AsRef<Path>>(&mut self, prefix: P) {
        let prefix = prefix.as_ref();
        let prefix = prefix
            .canonicalize()
            .unwrap_or_else(|_| prefix.to_path_buf());
        if !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
    }

    pub fn prefixes(&self) -> &[PathBuf] {
        &self.prefixes
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}
