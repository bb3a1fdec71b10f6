//! Run configuration.
//!
//! `RunConfig` is resolved once at startup from command-line options, the
//! optional TOML settings file and built-in defaults (in that order of
//! precedence) and is never mutated afterwards.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::CleanerError;
use super::patterns::ExcludePrefixes;

/// Name of the file the cleaner hunts for by default.
pub const DEFAULT_TARGET_NAME: &str = "Thumbs.db";

/// Directory name used under the user's cache and config directories.
pub const APP_DIR_NAME: &str = "thumbs_cleaner";

/// Settings file name under the user's config directory.
pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// Contents of the optional settings file. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub target_name: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub max_depth: Option<usize>,
    pub excludes: Vec<PathBuf>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, CleanerError> {
        toml::from_str(content).map_err(|e| CleanerError::ConfigParseError {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load settings from `path`.
    ///
    /// When `required` is false a missing file yields the defaults; this is
    /// the case for the implicit per-user settings file.
    pub fn load(path: &Path, required: bool) -> Result<Self, CleanerError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if required {
                    Err(CleanerError::ConfigNotFound {
                        path: path.to_path_buf(),
                    })
                } else {
                    Ok(Self::default())
                }
            }
            Err(e) => Err(CleanerError::from_io_error(
                e,
                "reading settings file",
                Some(path.to_path_buf()),
            )),
        }
    }

    /// `<user config dir>/thumbs_cleaner/config.toml`, if a config dir is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
    }
}

/// Options as given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dry_run: bool,
    pub verbose: bool,
    pub force: bool,
    pub use_cache: bool,
    pub cache_dir: Option<PathBuf>,
    pub max_depth: Option<usize>,
    pub root: Option<PathBuf>,
    pub target_name: Option<String>,
    pub excludes: Vec<PathBuf>,
}

/// Fully resolved, immutable options for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub dry_run: bool,
    pub verbose: bool,
    pub force: bool,
    pub use_cache: bool,
    pub cache_dir: PathBuf,
    pub max_depth: Option<usize>,
    pub root: PathBuf,
    pub target_name: String,
    pub excludes: ExcludePrefixes,
}

impl RunConfig {
    /// Combine command-line overrides with the settings file.
    pub fn resolve(overrides: Overrides, settings: Settings) -> Self {
        let mut excludes = ExcludePrefixes::with_defaults();
        for prefix in settings.excludes.iter().chain(overrides.excludes.iter()) {
            excludes.add(prefix);
        }

        Self {
            dry_run: overrides.dry_run,
            verbose: overrides.verbose,
            force: overrides.force,
            use_cache: overrides.use_cache,
            cache_dir: overrides
                .cache_dir
                .or(settings.cache_dir)
                .unwrap_or_else(default_cache_dir),
            max_depth: overrides.max_depth.or(settings.max_depth),
            root: overrides.root.unwrap_or_else(|| PathBuf::from("/")),
            target_name: overrides
                .target_name
                .or(settings.target_name)
                .unwrap_or_else(|| DEFAULT_TARGET_NAME.to_string()),
            excludes,
        }
    }
}

/// `<user cache dir>/thumbs_cleaner`, falling back to `<home>/.cache/thumbs_cleaner`
/// and finally to a relative `.cache/thumbs_cleaner`.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".cache")))
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join(APP_DIR_NAME)
}
