//! Configuration types for page-tuner

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for an optimization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root directory of the page tree to optimize
    pub root_dir: PathBuf,

    /// Include glob patterns, relative to the root directory.
    /// An entry naming a plain directory is walked recursively for
    /// files with a configured page extension.
    #[serde(default)]
    pub include: Vec<String>,

    /// Directories to exclude from scanning (absolute paths or folder names)
    #[serde(default)]
    pub exclude_dirs: Vec<PathBuf>,

    /// File extensions treated as page sources for directory includes
    #[serde(default)]
    pub page_extensions: Vec<String>,

    /// Number of threads for parallel processing (0 = auto)
    pub threads: usize,

    /// Soft deadline in seconds; once exceeded, no new files are started
    pub deadline_secs: Option<u64>,

    /// Dry run mode - report what would change without writing
    pub dry_run: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            include: vec![
                "app/**/*.tsx".into(),
                "app/**/*.jsx".into(),
                "pages/**/*.tsx".into(),
                "pages/**/*.jsx".into(),
            ],
            exclude_dirs: vec![
                "node_modules".into(),
                ".next".into(),
                "dist".into(),
                "build".into(),
                "coverage".into(),
                "__tests__".into(),
            ],
            page_extensions: vec!["tsx".into(), "jsx".into()],
            threads: 0, // Auto-detect
            deadline_secs: None,
            dry_run: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Check if a file extension is a supported page source format
    pub fn is_page_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.page_extensions.iter().any(|e| e == &ext_lower)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError { source: e })?;

        fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Generate a sample configuration file content
    pub fn sample_config() -> String {
        r#"# page-tuner Configuration File
# This file uses TOML format (https://toml.io)

# Root directory of the page tree to optimize
root_dir = "."

# Include glob patterns, relative to the root directory.
# An entry naming a plain directory is walked recursively for page files.
include = [
    "app/**/*.tsx",
    "app/**/*.jsx",
    "pages/**/*.tsx",
    "pages/**/*.jsx",
]

# Directories to exclude from scanning
# Can be absolute paths or folder names (will match any folder with that name)
exclude_dirs = [
    "node_modules",
    ".next",
    "dist",
    "build",
    "coverage",
    "__tests__",
]

# File extensions treated as page sources for directory includes
page_extensions = ["tsx", "jsx"]

# Number of threads for parallel processing (0 = auto-detect)
threads = 0

# Soft deadline in seconds; once exceeded, no new files are started
# deadline_secs = 300

# Dry run mode - report what would change without writing
dry_run = false

# Verbose output - show detailed processing information
verbose = false
"#
        .to_string()
    }
}

/// Errors that can occur when loading or saving configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read configuration file
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse configuration file
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to write configuration file
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to serialize configuration
    SerializeError { source: toml::ser::Error },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::WriteError { path, source } => {
                write!(
                    f,
                    "Failed to write config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::SerializeError { source } => {
                write!(f, "Failed to serialize config: {}", source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::WriteError { source, .. } => Some(source),
            ConfigError::SerializeError { source } => Some(source),
        }
    }
}
