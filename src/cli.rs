// Command-line interface definition
// Parsed once in main and turned into RunConfig overrides

use clap::Parser;
use std::path::PathBuf;

use crate::cleaner::{CleanerError, Overrides, Settings};

#[derive(Debug, Parser)]
#[command(
    name = "thumbs_cleaner",
    version,
    about = "Find and delete Thumbs.db files across a filesystem tree"
)]
pub struct Cli {
    /// Report what would be deleted without deleting anything
    #[arg(short, long)]
    pub dry_run: bool,

    /// Print the full list before acting and each path as it is deleted
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,

    /// Reuse the list from the previous scan instead of rescanning
    #[arg(short = 'c', long = "cache")]
    pub use_cache: bool,

    /// Directory holding the cached scan result
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Maximum traversal depth below the root
    #[arg(long, value_name = "LEVEL")]
    pub max_depth: Option<usize>,

    /// Directory to scan
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// File name to look for
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Additional path prefix to skip (repeatable)
    #[arg(long = "exclude", value_name = "PREFIX")]
    pub excludes: Vec<PathBuf>,

    /// Settings file (default: <config dir>/thumbs_cleaner/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Load the settings file. An explicit --config must exist, the default one may not.
    pub fn load_settings(&self) -> Result<Settings, CleanerError> {
        match (&self.config, Settings::default_path()) {
            (Some(path), _) => Settings::load(path, true),
            (None, Some(path)) => Settings::load(&path, false),
            (None, None) => Ok(Settings::default()),
        }
    }

    pub fn into_overrides(self) -> Overrides {
        Overrides {
            dry_run: self.dry_run,
            verbose: self.verbose,
            force: self.force,
            use_cache: self.use_cache,
            cache_dir: self.cache_dir,
            max_depth: self.max_depth,
            root: self.root,
            target_name: self.name,
            excludes: self.excludes,
        }
    }
}
