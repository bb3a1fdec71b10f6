//! The scan, cache, confirm, delete workflow.
//!
//! ```text
//! resolve list (cache | scan) -> empty?     -> Empty
//!                             -> preview    (verbose)
//!                             -> dry run?   -> DryRun
//!                             -> confirm    (unless forced) -> Cancelled
//!                             -> delete -> clear cache      -> Deleted
//! ```
//!
//! Every exit is terminal.

use std::ffi::OsStr;
use std::io::{BufRead, Write};

use indicatif::ProgressBar;

use super::cache::CacheStore;
use super::config::RunConfig;
use super::confirm::confirm;
use super::deleter::Deleter;
use super::error::CleanerError;
use super::logger::Logger;
use super::scanner::Scanner;
use super::stats::DeleteReport;
use super::types::FileList;

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// Nothing matched; no prompt was shown.
    Empty,
    DryRun { found: usize },
    /// The user declined the prompt.
    Cancelled { found: usize },
    Deleted(DeleteReport),
}

pub struct Pipeline<'a> {
    config: &'a RunConfig,
    logger: &'a dyn Logger,
    spinner: Option<&'a ProgressBar>,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a RunConfig, logger: &'a dyn Logger) -> Self {
        Self {
            config,
            logger,
            spinner: None,
        }
    }

    /// Show scan progress on `spinner`; it is cleared once the scan ends.
    pub fn with_spinner(mut self, spinner: &'a ProgressBar) -> Self {
        self.spinner = Some(spinner);
        self
    }

    /// Run the whole workflow. `input` is only read when confirmation is required.
    pub fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<Outcome, CleanerError> {
        let config = self.config;
        let store = CacheStore::new(&config.cache_dir);

        let list = self.resolve_list(&store)?;
        self.logger.info(&format!(
            "Found {} {} file(s)",
            list.len(),
            config.target_name
        ));
        if list.is_empty() {
            return Ok(Outcome::Empty);
        }

        if config.verbose {
            for path in list.iter() {
                self.logger.info(&format!("  {}", path.display()));
            }
        }

        if config.dry_run {
            self.logger.info("Dry run, no files were deleted");
            return Ok(Outcome::DryRun { found: list.len() });
        }

        if !config.force {
            let prompt = format!("Delete {} file(s)?", list.len());
            let accepted = confirm(&prompt, input, output)
                .map_err(|source| CleanerError::PromptError { source })?;
            if !accepted {
                self.logger.info("Cancelled, no files were deleted");
                return Ok(Outcome::Cancelled { found: list.len() });
            }
        }

        let report = Deleter::new(self.logger, config.verbose).delete_all(&list);
        if report.all_failed() {
            self.logger.error(&report.summary());
        } else {
            self.logger.info(&report.summary());
        }

        // the list is stale now; failing to drop it must not hide the report
        if let Err(e) = store.clear() {
            self.logger.warn(&format!("Could not remove stale cache: {}", e));
        }
        Ok(Outcome::Deleted(report))
    }

    /// Load the cached list or scan afresh. A fresh scan always refreshes the cache.
    fn resolve_list(&self, store: &CacheStore) -> Result<FileList, CleanerError> {
        let config = self.config;

        if config.use_cache {
            if !store.exists() {
                return Err(CleanerError::CacheNotFound {
                    path: store.path().to_path_buf(),
                });
            }
            self.logger
                .info(&format!("Using cached list {}", store.path().display()));
            return Ok(self.keep_targets(store.load()?));
        }

        self.logger.info(&format!(
            "Scanning {} for {}",
            config.root.display(),
            config.target_name
        ));

        let mut scanner = Scanner::from_config(config, self.logger);
        if let Some(spinner) = self.spinner {
            scanner = scanner
                .with_progress_callback(move |n| spinner.set_message(format!("{} found", n)));
        }
        let scanned = scanner.scan(&config.root);
        if let Some(spinner) = self.spinner {
            spinner.finish_and_clear();
        }
        let list = scanned?;

        store.save(&list)?;
        self.logger
            .debug(&format!("Cached {} path(s) in {}", list.len(), store.path().display()));
        Ok(list)
    }

    /// Drop cached entries that a scan could not have produced: relative
    /// paths and files not named like the target.
    fn keep_targets(&self, cached: FileList) -> FileList {
        let target = OsStr::new(&self.config.target_name);
        cached
            .into_iter()
            .filter(|path| {
                let ok = path.is_absolute() && path.file_name() == Some(target);
                if !ok {
                    self.logger
                        .warn(&format!("Ignoring cached entry {:?}", path));
                }
                ok
            })
            .collect()
    }
}
