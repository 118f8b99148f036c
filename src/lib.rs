//! page-tuner - Batch SEO and accessibility optimization for page sources
//!
//! This library provides a single-run pipeline that:
//! - Expands include glob patterns into a deduplicated candidate file list
//! - Classifies each page by topic from its path keywords
//! - Applies a fixed ordered battery of idempotent text-rewrite rules
//! - Writes back only the files whose content actually changed
//! - Aggregates per-file outcomes into a final run report
//!
//! Per-file failures are isolated and reported at the end; only a file
//! discovery failure aborts the whole run.

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod resolve;
pub mod rules;

pub use classify::Category;
pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use pipeline::{FileOutcome, OutcomeStatus, Pipeline, RunStats};
pub use report::{RunSummary, print_summary};
pub use resolve::resolve_paths;
pub use rules::{RULES, RuleOutcome, apply_all};
