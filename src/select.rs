//! Configuration-driven file selection.
//!
//! Include patterns are reduced to the text after their last `*.` and matched
//! as plain substrings of each file's path relative to the root. Exclude
//! patterns are not consulted.

use crate::config::ConfigError;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Reduce an include pattern to the suffix used for matching.
pub fn pattern_suffix(pattern: &str) -> &str {
    match pattern.rfind("*.") {
        Some(pos) => &pattern[pos + 2..],
        None => pattern,
    }
}

/// List every file under `root_dir` whose relative path contains one of the
/// include suffixes. Paths are returned relative to `root_dir`, in walk order
/// (directory entries sorted by name).
pub fn select_files(
    root_dir: Option<&Path>,
    include: &[String],
) -> Result<Vec<PathBuf>, ConfigError> {
    let root = root_dir.ok_or(ConfigError::MissingRootDir)?;

    let suffixes: Vec<&str> = include.iter().map(|p| pattern_suffix(p)).collect();
    if suffixes.is_empty() {
        log::warn!("No include patterns configured; nothing will be selected");
        return Ok(Vec::new());
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut selected = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let display = relative.to_string_lossy();
        if suffixes.iter().any(|suffix| display.contains(suffix)) {
            selected.push(relative.to_path_buf());
        }
    }

    log::debug!(
        "Selected {} file(s) under {}",
        selected.len(),
        root.display()
    );
    Ok(selected)
}
