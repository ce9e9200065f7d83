//! Project root scanning.
//!
//! Enumerates the top-level section directories that qualify for sitemap
//! entries, and probes for language-specific variants.

use std::{fs, path::Path};

use sitemark_core::Config;
use thiserror::Error;
use tracing::debug;

/// Directories never listed, regardless of configuration.
const SYSTEM_DIRS: &[&str] = &[".git", ".vscode"];

/// Scan errors.
#[derive(Debug, Error)]
pub enum ScanError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Directory names excluded from the top-level scan.
///
/// Disallowed prefixes are compared with leading and trailing slashes
/// stripped, so `/css/` excludes a top-level `css` directory.
pub(crate) fn excluded_names(config: &Config) -> Vec<String> {
    let mut names: Vec<String> = config
        .robots
        .disallow
        .iter()
        .map(|prefix| prefix.trim_matches('/').to_string())
        .collect();
    names.extend(config.site.languages.iter().cloned());
    names.extend(SYSTEM_DIRS.iter().map(ToString::to_string));
    names
}

/// List the immediate subdirectories of `root` eligible for sitemap entries.
///
/// Excluded: configured disallow prefixes (slash-stripped), language
/// directories, and version-control/editor metadata. Results are sorted by
/// name so repeated runs over an unchanged tree emit identical output.
pub fn scan_site_dirs(root: &Path, config: &Config) -> Result<Vec<String>> {
    let excluded = excluded_names(config);
    let mut dirs = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            debug!(name = ?entry.file_name(), "skipping non-UTF-8 directory name");
            continue;
        };
        if excluded.iter().any(|ex| *ex == name) {
            continue;
        }
        dirs.push(name);
    }

    dirs.sort();
    debug!(count = dirs.len(), "scanned site directories");
    Ok(dirs)
}

/// Whether a language-specific variant of `dir` exists under `root`.
///
/// A failed probe means "not present", never an error.
#[must_use]
pub fn language_variant_exists(root: &Path, lang: &str, dir: &str) -> bool {
    root.join(lang).join(dir).is_dir()
}
