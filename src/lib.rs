pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod emit;
pub mod engine;
pub mod fs;
pub mod model;
pub mod parser;
pub mod select;
pub mod style;

pub use api::{
    DtsMergeError, GenerateOptions, GenerateReport, ParseFailure, generate, generate_with_fs,
    load_config, render, render_files, write_document,
};
pub use cli::Cli;
pub use commands::cmd_generate;
pub use config::{Config, ConfigError};
pub use engine::{Engine, merge};
pub use select::select_files;
