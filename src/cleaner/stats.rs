use std::io;
use std::path::PathBuf;

use humansize::{format_size, BINARY};

/// Result of a delete pass.
#[derive(Debug, Default)]
pub struct DeleteReport {
    pub deleted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, io::Error)>,
    pub bytes_freed: u64,
}

impl DeleteReport {
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// True when something was attempted and nothing succeeded.
    pub fn all_failed(&self) -> bool {
        self.deleted.is_empty() && !self.failed.is_empty()
    }

    pub fn bytes_freed_display(&self) -> String {
        format_size(self.bytes_freed, BINARY)
    }

    /// One-line summary for the final report.
    pub fn summary(&self) -> String {
        format!(
            "Deleted {} file(s), {} failed, {} freed",
            self.deleted_count(),
            self.failed_count(),
            self.bytes_freed_display()
        )
    }
}
