//! Batch optimization pipeline with Rayon parallel processing
//!
//! For each resolved path: load content, classify, run the rule battery,
//! and write back only when the content actually changed. Per-file
//! failures are isolated; one file failing never halts the run. The only
//! state shared across files is the live counter set, and the final
//! summary is folded from the collected outcomes at a single aggregation
//! point after the parallel phase.

use crate::classify::Category;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::report::RunSummary;
use crate::resolve::resolve_paths;
use crate::rules::apply_all;

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{Level, debug, error, info, span};

/// Result of processing a single file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// Absolute path of the file
    pub path: PathBuf,
    /// Category the classifier assigned
    pub category: Category,
    /// Final state of the file's processing
    pub status: OutcomeStatus,
}

/// Final state of a single file's processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Rules made no edits; nothing was written
    Unchanged,
    /// Content changed and was written back (edit count)
    Written(usize),
    /// Dry run - content would have been written back (edit count)
    DryRun(usize),
    /// Read, rule, or write failure; the file was left unwritten
    Failed(String),
    /// Not started because the run deadline was exceeded
    Skipped,
}

/// Live processing counters
#[derive(Debug, Default)]
pub struct RunStats {
    pub scanned: AtomicUsize,
    pub changed: AtomicUsize,
    pub failed: AtomicUsize,
    pub skipped: AtomicUsize,
}

impl RunStats {
    pub fn summary(&self) -> String {
        format!(
            "Scanned: {}, Changed: {}, Failed: {}, Skipped: {}",
            self.scanned.load(Ordering::Relaxed),
            self.changed.load(Ordering::Relaxed),
            self.failed.load(Ordering::Relaxed),
            self.skipped.load(Ordering::Relaxed)
        )
    }
}

/// Main pipeline for optimizing page files
pub struct Pipeline {
    config: Config,
    stats: Arc<RunStats>,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        // Configure Rayon thread pool
        if config.threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .build_global()
                .ok(); // Ignore if already initialized
        }

        Ok(Self {
            config,
            stats: Arc::new(RunStats::default()),
        })
    }

    /// Run the optimization pipeline
    ///
    /// Returns an error only for a fatal discovery failure, before any
    /// file is written. Per-file failures end up in the summary instead.
    pub fn run(&mut self) -> Result<RunSummary> {
        let _span = span!(Level::INFO, "pipeline_run").entered();

        info!("Resolving candidate files...");
        let files = resolve_paths(&self.config)?;
        info!(count = files.len(), "Found candidate page files");

        let mut summary = RunSummary::new(self.config.dry_run);
        if files.is_empty() {
            info!("No files to process");
            return Ok(summary);
        }

        let config = Arc::new(self.config.clone());
        let stats = Arc::clone(&self.stats);
        let deadline = config
            .deadline_secs
            .map(|secs| Instant::now() + Duration::from_secs(secs));

        info!("Processing files...");
        let outcomes: Vec<FileOutcome> = files
            .par_iter()
            .map(|path| {
                let _file_span = span!(Level::DEBUG, "process_file", ?path).entered();

                if let Some(deadline) = deadline
                    && Instant::now() >= deadline
                {
                    debug!(?path, "Run deadline exceeded, not starting file");
                    stats.skipped.fetch_add(1, Ordering::Relaxed);
                    return FileOutcome {
                        path: path.clone(),
                        category: Category::classify(path),
                        status: OutcomeStatus::Skipped,
                    };
                }

                process_single_file(path, &config, &stats)
            })
            .collect();

        // Single aggregation point for the run summary
        for outcome in &outcomes {
            summary.record(outcome);
        }

        info!("{}", self.stats.summary());
        Ok(summary)
    }

    /// Get processing statistics reference
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }
}

/// Process a single file (standalone function for parallel processing)
///
/// State machine: Loaded -> Classified -> Transformed -> Written |
/// Unchanged | Failed. At most one write per file, only on change, and
/// never after a rule failure (fail-closed).
fn process_single_file(path: &Path, config: &Arc<Config>, stats: &Arc<RunStats>) -> FileOutcome {
    let category = Category::classify(path);

    let original = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let err = Error::Read {
                path: path.to_path_buf(),
                message: e.to_string(),
            };
            error!(?path, error = %err, "Failed to read file");
            stats.scanned.fetch_add(1, Ordering::Relaxed);
            stats.failed.fetch_add(1, Ordering::Relaxed);
            return FileOutcome {
                path: path.to_path_buf(),
                category,
                status: OutcomeStatus::Failed(err.to_string()),
            };
        }
    };

    debug!(?path, category = category.name(), "Classified page");
    stats.scanned.fetch_add(1, Ordering::Relaxed);

    let outcome = match apply_all(&original, category) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(?path, error = %e, "Rule battery failed");
            stats.failed.fetch_add(1, Ordering::Relaxed);
            return FileOutcome {
                path: path.to_path_buf(),
                category,
                status: OutcomeStatus::Failed(e.to_string()),
            };
        }
    };

    if outcome.content == original {
        debug!(?path, "Content unchanged");
        return FileOutcome {
            path: path.to_path_buf(),
            category,
            status: OutcomeStatus::Unchanged,
        };
    }

    if config.dry_run {
        info!(?path, edits = outcome.edits, "Would rewrite file (dry run)");
        stats.changed.fetch_add(1, Ordering::Relaxed);
        return FileOutcome {
            path: path.to_path_buf(),
            category,
            status: OutcomeStatus::DryRun(outcome.edits),
        };
    }

    if let Err(e) = fs::write(path, &outcome.content) {
        let err = Error::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        error!(?path, error = %err, "Failed to write file");
        stats.failed.fetch_add(1, Ordering::Relaxed);
        return FileOutcome {
            path: path.to_path_buf(),
            category,
            status: OutcomeStatus::Failed(err.to_string()),
        };
    }

    info!(
        ?path,
        category = category.name(),
        edits = outcome.edits,
        "Rewrote file"
    );
    stats.changed.fetch_add(1, Ordering::Relaxed);

    FileOutcome {
        path: path.to_path_buf(),
        category,
        status: OutcomeStatus::Written(outcome.edits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn test_config(root: &Path) -> Config {
        Config {
            root_dir: root.to_path_buf(),
            threads: 1,
            ..Config::default()
        }
    }

    fn write_page(root: &Path, rel: &str, content: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    const PLAIN_PAGE: &str = "<head>\n</head>\n<h1>Dashboard</h1>\n<button>Go</button>\n";

    #[test]
    fn test_run_rewrites_changed_files() {
        let dir = tempfile::tempdir().unwrap();
        let page = write_page(dir.path(), "app/dashboard/page.tsx", PLAIN_PAGE);

        let mut pipeline = Pipeline::new(test_config(dir.path())).unwrap();
        let summary = pipeline.run().unwrap();

        assert_eq!(summary.files_scanned, 1);
        assert_eq!(summary.files_changed, 1);
        assert!(summary.total_edits >= 3);
        assert!(summary.errors.is_empty());

        let rewritten = fs::read_to_string(&page).unwrap();
        assert!(rewritten.contains("export const metadata"));
        assert!(rewritten.contains("application/ld+json"));
        assert!(!rewritten.contains("<h1>Dashboard</h1>"));
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let page = write_page(dir.path(), "app/dashboard/page.tsx", PLAIN_PAGE);

        let mut first = Pipeline::new(test_config(dir.path())).unwrap();
        first.run().unwrap();
        let after_first = fs::read_to_string(&page).unwrap();

        let mut second = Pipeline::new(test_config(dir.path())).unwrap();
        let summary = second.run().unwrap();

        assert_eq!(summary.files_scanned, 1);
        assert_eq!(summary.files_changed, 0);
        assert_eq!(summary.total_edits, 0);
        assert_eq!(fs::read_to_string(&page).unwrap(), after_first);
    }

    #[test]
    fn test_dry_run_leaves_files_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let page = write_page(dir.path(), "app/shop/page.tsx", PLAIN_PAGE);

        let mut config = test_config(dir.path());
        config.dry_run = true;

        let mut pipeline = Pipeline::new(config).unwrap();
        let summary = pipeline.run().unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.files_changed, 1);
        assert!(summary.total_edits >= 3);
        assert_eq!(fs::read_to_string(&page).unwrap(), PLAIN_PAGE);
    }

    #[test]
    fn test_failed_file_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        write_page(dir.path(), "app/a/page.tsx", PLAIN_PAGE);

        // Invalid UTF-8 forces a read failure for this file only
        let bad = dir.path().join("app/b/page.tsx");
        fs::create_dir_all(bad.parent().unwrap()).unwrap();
        fs::write(&bad, [0xff, 0xfe, 0xfd]).unwrap();

        let mut pipeline = Pipeline::new(test_config(dir.path())).unwrap();
        let summary = pipeline.run().unwrap();

        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.files_changed, 1);
        assert_eq!(summary.errors.len(), 1);
        assert!(summary.errors[0].0.ends_with("app/b/page.tsx"));
    }

    #[test]
    fn test_total_edits_matches_written_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        write_page(dir.path(), "app/a/page.tsx", PLAIN_PAGE);
        write_page(dir.path(), "app/b/page.tsx", "<h1>Welcome</h1>\n");
        write_page(
            dir.path(),
            "app/c/page.tsx",
            "export const metadata = {};\nnothing else\n",
        );

        let mut pipeline = Pipeline::new(test_config(dir.path())).unwrap();
        let summary = pipeline.run().unwrap();

        assert_eq!(summary.files_scanned, 3);
        assert_eq!(summary.files_changed, 2);
        assert!(summary.files_changed <= summary.files_scanned);
        assert!(summary.total_edits >= summary.files_changed);
        assert!(summary.errors.is_empty());
    }

    #[test]
    fn test_expired_deadline_skips_files() {
        let dir = tempfile::tempdir().unwrap();
        let page = write_page(dir.path(), "app/a/page.tsx", PLAIN_PAGE);

        let mut config = test_config(dir.path());
        config.deadline_secs = Some(0);

        let mut pipeline = Pipeline::new(config).unwrap();
        let summary = pipeline.run().unwrap();

        assert!(summary.timed_out);
        assert_eq!(summary.files_skipped, 1);
        assert_eq!(summary.files_scanned, 0);
        assert_eq!(fs::read_to_string(&page).unwrap(), PLAIN_PAGE);
    }

    #[test]
    fn test_missing_root_aborts_before_processing() {
        let mut config = Config::default();
        config.root_dir = PathBuf::from("/nonexistent/page-tuner-root");

        let mut pipeline = Pipeline::new(config).unwrap();
        assert!(pipeline.run().is_err());
    }
}
