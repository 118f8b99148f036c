//! Run summary aggregation and report rendering

use crate::pipeline::{FileOutcome, OutcomeStatus};
use crossterm::{
    ExecutableCommand,
    style::{Color, Print, Stylize, style},
};
use std::io::stdout;
use std::path::PathBuf;

/// Aggregate counts for a whole run
///
/// Built empty at run start and mutated monotonically: counts only
/// increase, errors are only appended. Invariants:
/// `files_changed <= files_scanned`, `total_edits` equals the edit sum
/// over changed files, and a failed file is never counted as changed.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Files read and fed through the rule battery
    pub files_scanned: usize,
    /// Files whose content changed (written, or would be in a dry run)
    pub files_changed: usize,
    /// Sum of edit counts over changed files
    pub total_edits: usize,
    /// Files not started because the deadline was exceeded
    pub files_skipped: usize,
    /// Per-file errors, by path and message
    pub errors: Vec<(PathBuf, String)>,
    /// True when the run deadline cut processing short
    pub timed_out: bool,
    /// True when the run was a dry run
    pub dry_run: bool,
}

impl RunSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Fold one file outcome into the summary
    pub fn record(&mut self, outcome: &FileOutcome) {
        match &outcome.status {
            OutcomeStatus::Unchanged => {
                self.files_scanned += 1;
            }
            OutcomeStatus::Written(edits) | OutcomeStatus::DryRun(edits) => {
                self.files_scanned += 1;
                self.files_changed += 1;
                self.total_edits += edits;
            }
            OutcomeStatus::Failed(message) => {
                self.files_scanned += 1;
                self.errors.push((outcome.path.clone(), message.clone()));
            }
            OutcomeStatus::Skipped => {
                self.files_skipped += 1;
                self.timed_out = true;
            }
        }
    }
}

/// Theme colors for the report
struct ReportTheme;

impl ReportTheme {
    const SUCCESS: Color = Color::Green;
    const WARNING: Color = Color::Yellow;
    const ERROR: Color = Color::Red;
    const HINT: Color = Color::DarkGrey;
    const ACCENT: Color = Color::Cyan;
}

fn print_separator() {
    let _ = stdout().execute(Print(&format!("{}\n", "─".repeat(60))));
}

fn print_title(title: &str) {
    let width = 60;
    let padding = (width - title.len()) / 2;
    let left_pad = " ".repeat(padding.saturating_sub(1));

    let _ = stdout().execute(Print(&format!(
        "{}{}\n",
        left_pad,
        title.bold().stylize()
    )));
}

fn print_stat(key: &str, value: &str, color: Color) {
    let key_styled = style(key).with(ReportTheme::HINT);
    let value_styled = style(value).with(color).bold();
    let _ = stdout().execute(Print("  "));
    let _ = stdout().execute(Print(key_styled));
    let _ = stdout().execute(Print(": "));
    let _ = stdout().execute(Print(value_styled));
    let _ = stdout().execute(Print("\n"));
}

fn print_warning(msg: &str) {
    let _ = stdout().execute(Print(style("⚠ ").with(ReportTheme::WARNING).bold()));
    let _ = stdout().execute(Print(format!("{}\n", msg)));
}

fn print_error_line(path: &str, message: &str) {
    let path_styled = style(path).italic();
    let message_styled = style(message).with(ReportTheme::ERROR);
    let _ = stdout().execute(Print("  "));
    let _ = stdout().execute(Print(path_styled));
    let _ = stdout().execute(Print(": "));
    let _ = stdout().execute(Print(message_styled));
    let _ = stdout().execute(Print("\n"));
}

fn print_blank() {
    let _ = stdout().execute(Print("\n"));
}

/// Render the final human-readable report to standard output
///
/// The summary always prints, including every file-level error by path
/// and message, even when zero files failed.
pub fn print_summary(summary: &RunSummary) {
    print_separator();
    print_title("Optimization Complete");
    print_separator();

    print_blank();
    print_stat(
        "Files scanned",
        &summary.files_scanned.to_string(),
        ReportTheme::ACCENT,
    );
    print_stat(
        "Files changed",
        &summary.files_changed.to_string(),
        ReportTheme::SUCCESS,
    );
    print_stat(
        "Total edits",
        &summary.total_edits.to_string(),
        ReportTheme::SUCCESS,
    );
    print_stat(
        "Errors",
        &summary.errors.len().to_string(),
        ReportTheme::ERROR,
    );
    if summary.files_skipped > 0 {
        print_stat(
            "Skipped",
            &summary.files_skipped.to_string(),
            ReportTheme::WARNING,
        );
    }
    print_blank();

    if !summary.errors.is_empty() {
        print_separator();
        for (path, message) in &summary.errors {
            print_error_line(&path.display().to_string(), message);
        }
        print_blank();
    }

    if summary.timed_out {
        print_warning("Run deadline exceeded; some files were not processed.");
    }

    if summary.dry_run {
        print_separator();
        print_warning("Dry run - no files were written.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Category;
    use std::path::Path;

    fn outcome(path: &str, status: OutcomeStatus) -> FileOutcome {
        FileOutcome {
            path: Path::new(path).to_path_buf(),
            category: Category::Default,
            status,
        }
    }

    #[test]
    fn test_record_counts_outcomes() {
        let mut summary = RunSummary::new(false);
        summary.record(&outcome("/a", OutcomeStatus::Unchanged));
        summary.record(&outcome("/b", OutcomeStatus::Written(3)));
        summary.record(&outcome("/c", OutcomeStatus::Written(2)));
        summary.record(&outcome("/d", OutcomeStatus::Failed("boom".into())));

        assert_eq!(summary.files_scanned, 4);
        assert_eq!(summary.files_changed, 2);
        assert_eq!(summary.total_edits, 5);
        assert_eq!(summary.errors.len(), 1);
        assert!(summary.files_changed <= summary.files_scanned);
    }

    #[test]
    fn test_failed_file_is_not_counted_as_changed() {
        let mut summary = RunSummary::new(false);
        summary.record(&outcome("/a", OutcomeStatus::Failed("boom".into())));

        assert_eq!(summary.files_changed, 0);
        assert_eq!(summary.errors.len(), 1);
    }

    #[test]
    fn test_skipped_sets_timeout_note() {
        let mut summary = RunSummary::new(false);
        summary.record(&outcome("/a", OutcomeStatus::Skipped));

        assert_eq!(summary.files_scanned, 0);
        assert_eq!(summary.files_skipped, 1);
        assert!(summary.timed_out);
    }

    #[test]
    fn test_dry_run_counts_as_changed() {
        let mut summary = RunSummary::new(true);
        summary.record(&outcome("/a", OutcomeStatus::DryRun(4)));

        assert!(summary.dry_run);
        assert_eq!(summary.files_changed, 1);
        assert_eq!(summary.total_edits, 4);
    }
}
