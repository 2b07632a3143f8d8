use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "dts-merge")]
#[command(about = "Merge the public type surface of TypeScript sources into one declaration file")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration document (JSON, or TOML by extension)
    #[arg(default_value = "tsconfig.json")]
    pub config: PathBuf,

    /// Re-emit named imports from package specifiers
    #[arg(long)]
    pub emit_imports: bool,

    /// Print the merged declarations instead of writing outFile
    #[arg(long)]
    pub stdout: bool,

    /// Increase diagnostic logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Turn diagnostic logging off
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Off;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
