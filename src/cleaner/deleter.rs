//! Removes the files of a [`FileList`], one at a time.
//!
//! A failure on one path is logged and recorded; the pass always runs to the
//! end of the list.

use std::fs;

use super::logger::Logger;
use super::stats::DeleteReport;
use super::types::FileList;

pub struct Deleter<'a> {
    logger: &'a dyn Logger,
    verbose: bool,
}

impl<'a> Deleter<'a> {
    pub fn new(logger: &'a dyn Logger, verbose: bool) -> Self {
        Self { logger, verbose }
    }

    pub fn delete_all(&self, list: &FileList) -> DeleteReport {
        let mut report = DeleteReport::default();

        for path in list.iter() {
            // size is best effort, a vanished file simply fails below
            let size = fs::symlink_metadata(path).map(|m| m.len()).unwrap_or(0);

            match fs::remove_file(path) {
                Ok(()) => {
                    if self.verbose {
                        self.logger.info(&format!("Deleted {}", path.display()));
                    }
                    report.bytes_freed += size;
                    report.deleted.push(path.to_path_buf());
                }
                Err(e) => {
                    self.logger
                        .warn(&format!("Failed to delete {}: {}", path.display(), e));
                    report.failed.push((path.to_path_buf(), e));
                }
            }
        }

        report
    }
}
