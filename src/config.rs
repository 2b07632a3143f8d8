use crate::fs::FileSystem;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Missing required field `{field}` in {path}")]
    MissingField { field: &'static str, path: PathBuf },
    #[error("rootDir is not set")]
    MissingRootDir,
}

/// A validated configuration document.
///
/// `root_dir` and `out_file` are resolved against the directory holding the
/// document itself.
#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    pub root_dir: PathBuf,
    pub out_file: PathBuf,
    pub include: Vec<String>,
    /// Accepted for compatibility, never applied by the selector.
    pub exclude: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    compiler_options: Option<RawCompilerOptions>,
    #[serde(default)]
    include: Vec<String>,
    #[serde(default)]
    exclude: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCompilerOptions {
    root_dir: Option<String>,
    out_file: Option<String>,
}

impl Config {
    pub fn load(path: &Path, fs: &dyn FileSystem) -> Result<Self, ConfigError> {
        if !fs.exists(path) {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs.read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, &content)
    }

    /// Parse and validate a document that has already been read.
    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");
        let raw: RawConfig = if is_toml {
            toml::from_str(content).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            serde_json::from_str(content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?
        };

        let options = raw.compiler_options.unwrap_or_default();
        let root_dir = options.root_dir.ok_or_else(|| ConfigError::MissingField {
            field: "compilerOptions.rootDir",
            path: path.to_path_buf(),
        })?;
        let out_file = options.out_file.ok_or_else(|| ConfigError::MissingField {
            field: "compilerOptions.outFile",
            path: path.to_path_buf(),
        })?;

        let base = path.parent().unwrap_or(Path::new(""));

        Ok(Self {
            path: path.to_path_buf(),
            root_dir: base.join(root_dir),
            out_file: base.join(out_file),
            include: raw.include,
            exclude: raw.exclude,
        })
    }
}
