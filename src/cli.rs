//! CLI argument parsing with clap

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// page-tuner - Batch SEO and accessibility optimization for page sources
///
/// Walks the configured page tree, classifies each file by topic, applies
/// a fixed battery of idempotent rewrite rules and writes back only the
/// files that changed. All flags are optional; the built-in defaults
/// match the standard page layout.
#[derive(Parser, Debug)]
#[command(name = "page-tuner")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file (TOML format)
    ///
    /// When specified, settings from the config file are used as defaults.
    /// CLI arguments will override config file settings.
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Root directory of the page tree to optimize
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Include glob patterns, relative to the root directory
    #[arg(short, long, num_args = 1..)]
    pub include: Option<Vec<String>>,

    /// Directories to exclude from scanning (absolute paths or folder names)
    #[arg(short, long, num_args = 1..)]
    pub exclude: Option<Vec<PathBuf>>,

    /// Number of threads for parallel processing (0 = auto)
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Soft deadline in seconds; once exceeded, no new files are started
    #[arg(long)]
    pub deadline_secs: Option<u64>,

    /// Dry run mode - show what would be done without doing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,
}

impl Cli {
    /// Get config file name (without extension) for log naming
    pub fn config_name(&self) -> Option<String> {
        self.config.as_ref().and_then(|p| {
            p.file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
        })
    }

    /// Merge CLI arguments with config from file
    /// CLI arguments take precedence over config file settings
    pub fn merge_with_config(&self, mut config: Config) -> Config {
        if let Some(ref root) = self.root {
            config.root_dir = root.clone();
        }
        if let Some(ref include) = self.include {
            config.include = include.clone();
        }
        if let Some(ref exclude) = self.exclude {
            config.exclude_dirs = exclude.clone();
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if let Some(deadline_secs) = self.deadline_secs {
            config.deadline_secs = Some(deadline_secs);
        }
        if self.dry_run {
            config.dry_run = true;
        }
        if self.verbose {
            config.verbose = true;
        }

        config
    }

    /// Convert CLI arguments to Config (when no config file is used)
    pub fn to_config(&self) -> Config {
        self.merge_with_config(Config::default())
    }
}
