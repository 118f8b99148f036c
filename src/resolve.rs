//! Candidate file discovery
//!
//! Expands the configured include patterns into a deduplicated, sorted
//! list of absolute candidate paths, filtered against the excluded
//! directories. Discovery failures are fatal: the run aborts before any
//! file is touched, since no safe partial file list can be assumed.

use crate::config::Config;
use crate::error::{Error, Result};
use glob::glob;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Resolve all candidate files for a run
///
/// Each include entry is either a glob pattern (expanded relative to the
/// root directory) or a plain directory (walked recursively for files
/// with a configured page extension). A path matched by several patterns
/// appears once in the output.
pub fn resolve_paths(config: &Config) -> Result<Vec<PathBuf>> {
    let root = config
        .root_dir
        .canonicalize()
        .map_err(|e| Error::Discovery {
            pattern: config.root_dir.display().to_string(),
            message: format!("root directory is not readable: {e}"),
        })?;

    let mut candidates: BTreeSet<PathBuf> = BTreeSet::new();

    for pattern in &config.include {
        let rooted = root.join(pattern);

        // A plain directory include is walked recursively
        if rooted.is_dir() {
            collect_dir(&rooted, config, &mut candidates)?;
            continue;
        }

        for entry in glob(&rooted.to_string_lossy())? {
            let path = entry?;
            if path.is_file() && !is_excluded(&path, &config.exclude_dirs) {
                candidates.insert(path);
            }
        }
    }

    debug!(count = candidates.len(), "Resolved candidate files");
    Ok(candidates.into_iter().collect())
}

/// Walk a directory include, collecting files with a page extension
fn collect_dir(dir: &Path, config: &Config, candidates: &mut BTreeSet<PathBuf>) -> Result<()> {
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_excluded(e.path(), &config.exclude_dirs))
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && let Some(ext) = path.extension().and_then(|e| e.to_str())
            && config.is_page_extension(ext)
        {
            candidates.insert(path.to_path_buf());
        }
    }

    Ok(())
}

/// Check if a path falls under an excluded directory
///
/// An exclude entry is either an absolute path prefix or a folder name
/// matched against every path component.
pub fn is_excluded(path: &Path, exclude_dirs: &[PathBuf]) -> bool {
    if exclude_dirs.is_empty() {
        return false;
    }

    for exclude in exclude_dirs {
        if exclude.is_absolute() {
            if path.starts_with(exclude) {
                debug!(?path, ?exclude, "Excluding path (absolute prefix match)");
                return true;
            }
        } else if let Some(exclude_name) = exclude.file_name() {
            for component in path.components() {
                if let std::path::Component::Normal(name) = component
                    && name == exclude_name
                {
                    debug!(?path, ?exclude, "Excluding path (folder name match)");
                    return true;
                }
            }
        }
    }

    false
}
