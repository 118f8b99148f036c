//! Error types for page-tuner

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for page-tuner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for page-tuner
///
/// `Discovery`, `Pattern`, `Glob` and `WalkDir` are fatal: they abort the
/// whole run before any file is written. `Read`, `Rule` and `Write` are
/// per-file errors, recovered by the pipeline and surfaced in the final
/// report.
#[derive(Error, Debug)]
pub enum Error {
    #[error("File discovery failed for '{pattern}': {message}")]
    Discovery { pattern: String, message: String },

    #[error("Failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Rule '{rule}' failed: {message}")]
    Rule { rule: &'static str, message: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Glob expansion error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Directory traversal error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
