//! Clean library API for dts-merge.
//!
//! Unlike the CLI command, which prints progress and returns an exit code,
//! these functions return `Result` types for calling code to handle.
//!
//! # Example
//!
//! ```no_run
//! use dts_merge::{generate, GenerateOptions};
//! use std::path::Path;
//!
//! let report = generate(Path::new("tsconfig.json"), &GenerateOptions::default())?;
//! println!("{} declarations written to {}", report.declarations, report.out_file.display());
//! # Ok::<(), dts_merge::DtsMergeError>(())
//! ```

use crate::config::{Config, ConfigError};
use crate::engine::{Engine, merge};
use crate::fs::{FileSystem, default_fs};
use crate::select::select_files;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum DtsMergeError {
    /// Configuration document missing, unreadable or incomplete.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The output file could not be replaced.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Re-emit named imports from package specifiers, deduplicated by name.
    pub emit_imports: bool,
}

/// A file that was selected but could not be read or parsed.
#[derive(Debug, Clone)]
pub struct ParseFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub out_file: PathBuf,
    /// Number of files the selector returned.
    pub selected: usize,
    /// Files that contributed at least one declaration.
    pub emitted_files: usize,
    pub declarations: usize,
    pub failures: Vec<ParseFailure>,
    /// The merged declaration document.
    pub document: String,
}

/// Load the configuration document at `config_path`.
pub fn load_config(config_path: &Path) -> Result<Config, DtsMergeError> {
    Ok(Config::load(config_path, default_fs())?)
}

/// Files the configuration selects, relative to its root directory.
///
/// A previous output at `config.out_file` is never selected, so rerunning
/// with the output under the root directory does not feed it back in.
pub fn select(config: &Config) -> Result<Vec<PathBuf>, DtsMergeError> {
    let mut files = select_files(Some(&config.root_dir), &config.include)?;
    files.retain(|relative| {
        let is_output = same_path(&config.root_dir.join(relative), &config.out_file);
        if is_output {
            log::debug!("Not selecting previous output {}", relative.display());
        }
        !is_output
    });
    Ok(files)
}

/// Component-wise comparison that ignores `.` segments.
fn same_path(a: &Path, b: &Path) -> bool {
    fn significant(p: &Path) -> Vec<Component<'_>> {
        p.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect::<Vec<_>>()
    }
    significant(a) == significant(b)
}

/// Emit and merge `files` (relative to `config.root_dir`) without writing.
///
/// A file that fails to read or parse is recorded in `failures` and skipped.
pub fn render_files(
    config: &Config,
    files: &[PathBuf],
    options: &GenerateOptions,
    fs: &dyn FileSystem,
) -> GenerateReport {
    let mut engine = Engine::new(options.emit_imports);
    let mut chunks = Vec::new();
    let mut failures = Vec::new();

    for relative in files {
        let path = config.root_dir.join(relative);
        log::debug!("Processing {}", path.display());

        let result = fs
            .read_to_string(&path)
            .map_err(Into::into)
            .and_then(|source| engine.process_source(&path, source));

        match result {
            Ok(None) => {}
            Ok(Some(emitted)) => chunks.push(emitted),
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                failures.push(ParseFailure {
                    path: relative.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let emitted_files = chunks.len();
    let declarations = engine.declaration_count();
    log::info!(
        "{} declaration(s) from {} of {} file(s)",
        declarations,
        emitted_files,
        files.len()
    );

    GenerateReport {
        out_file: config.out_file.clone(),
        selected: files.len(),
        emitted_files,
        declarations,
        failures,
        document: merge(chunks),
    }
}

/// Select and render without writing.
pub fn render(
    config: &Config,
    options: &GenerateOptions,
    fs: &dyn FileSystem,
) -> Result<GenerateReport, DtsMergeError> {
    let files = select(config)?;
    Ok(render_files(config, &files, options, fs))
}

/// Replace `report.out_file` with the merged document.
pub fn write_document(report: &GenerateReport, fs: &dyn FileSystem) -> Result<(), DtsMergeError> {
    let path = &report.out_file;
    let write_error = |source| DtsMergeError::Write {
        path: path.clone(),
        source,
    };

    if fs.exists(path) {
        fs.remove_file(path).map_err(write_error)?;
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent).map_err(write_error)?;
    }
    fs.write(path, &report.document).map_err(write_error)
}

/// Load, select, render and write, using the real filesystem.
pub fn generate(
    config_path: &Path,
    options: &GenerateOptions,
) -> Result<GenerateReport, DtsMergeError> {
    generate_with_fs(config_path, options, default_fs())
}

pub fn generate_with_fs(
    config_path: &Path,
    options: &GenerateOptions,
    fs: &dyn FileSystem,
) -> Result<GenerateReport, DtsMergeError> {
    let config = Config::load(config_path, fs)?;
    let report = render(&config, options, fs)?;
    write_document(&report, fs)?;
    Ok(report)
}
