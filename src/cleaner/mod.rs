//! Cleaner module - finds and removes stray thumbnail cache files
//!
//! This module scans a filesystem tree for files with a fixed name
//! (`Thumbs.db` by default), caches the result of the last scan, and deletes
//! the matches after an optional confirmation.

pub mod cache;
pub mod config;
pub mod confirm;
pub mod deleter;
pub mod error;
pub mod logger;
pub mod patterns;
pub mod pipeline;
pub mod scanner;
pub mod stats;
pub mod types;

pub use cache::CacheStore;
pub use config::{Overrides, RunConfig, Settings};
pub use confirm::confirm;
pub use deleter::Deleter;
pub use error::CleanerError;
pub use logger::{ConsoleLogger, Level, Logger, MemoryLogger};
pub use patterns::ExcludePrefixes;
pub use pipeline::{Outcome, Pipeline};
pub use scanner::Scanner;
pub use stats::DeleteReport;
pub use types::FileList;
