// Centralized error handling for the cleaner
// Every error carries the path it concerns and a suggestion for the user

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for the cleaner pipeline
#[derive(Debug)]
pub enum CleanerError {
    /// Cache reuse was requested but there is nothing to reuse
    CacheNotFound { path: PathBuf },
    CacheReadError { path: PathBuf, source: io::Error },
    CacheWriteError { path: PathBuf, source: io::Error },

    /// Scanning errors
    ScanRootNotFound { path: PathBuf },

    /// Settings file errors
    ConfigNotFound { path: PathBuf },
    ConfigParseError { path: PathBuf, reason: String },

    /// Confirmation prompt could not be written or read
    PromptError { source: io::Error },

    PermissionDenied { path: PathBuf, operation: String },
    IoError { path: Option<PathBuf>, operation: String, source: io::Error },
}

impl fmt::Display for CleanerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CleanerError::CacheNotFound { path } => {
                writeln!(f, "Cache file not found: {}", path.display())?;
                write!(f, "Suggestion: Run once without --cache to scan and build the cache")
            }
            CleanerError::CacheReadError { path, source } => {
                writeln!(f, "Failed to read cache file {}: {}", path.display(), source)?;
                write!(f, "Suggestion: Remove the cache file and rescan")
            }
            CleanerError::CacheWriteError { path, source } => {
                writeln!(f, "Failed to write cache file {}: {}", path.display(), source)?;
                write!(f, "Suggestion: Check disk space and write permissions, or pass --cache-dir")
            }
            CleanerError::ScanRootNotFound { path } => {
                writeln!(f, "Scan root not found: {}", path.display())?;
                write!(f, "Suggestion: Check that the --root directory exists")
            }
            CleanerError::ConfigNotFound { path } => {
                writeln!(f, "Settings file not found: {}", path.display())?;
                write!(f, "Suggestion: Check the --config path")
            }
            CleanerError::ConfigParseError { path, reason } => {
                writeln!(f, "Error parsing settings file {}: {}", path.display(), reason)?;
                write!(f, "Suggestion: Keys allowed are target_name, cache_dir, max_depth and excludes")
            }
            CleanerError::PromptError { source } => {
                writeln!(f, "Failed to read confirmation: {}", source)?;
                write!(f, "Suggestion: Pass --force to skip the prompt in non-interactive runs")
            }
            CleanerError::PermissionDenied { path, operation } => {
                writeln!(f, "Permission denied while {}: {}", operation, path.display())?;
                write!(f, "Suggestion: Check file permissions or run with appropriate privileges")
            }
            CleanerError::IoError { path, operation, source } => {
                if let Some(p) = path {
                    writeln!(f, "I/O error while {} {}: {}", operation, p.display(), source)?;
                } else {
                    writeln!(f, "I/O error while {}: {}", operation, source)?;
                }
                write!(f, "Suggestion: Check file permissions and disk space")
            }
        }
    }
}

impl std::error::Error for CleanerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CleanerError::CacheReadError { source, .. }
            | CleanerError::CacheWriteError { source, .. }
            | CleanerError::PromptError { source }
            | CleanerError::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl CleanerError {
    /// Create an error with context about the operation and optional path.
    /// Permission problems get their own variant.
    pub fn from_io_error(err: io::Error, operation: &str, path: Option<PathBuf>) -> Self {
        match (err.kind(), path) {
            (io::ErrorKind::PermissionDenied, Some(p)) => CleanerError::PermissionDenied {
                path: p,
                operation: operation.to_string(),
            },
            (_, path) => CleanerError::IoError {
                path,
                operation: operation.to_string(),
                source: err,
            },
        }
    }
}
