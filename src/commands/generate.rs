use crate::api::{self, GenerateOptions};
use crate::cli::Cli;
use crate::fs::{FileSystem, default_fs};
use crate::style;

pub fn cmd_generate(cli: &Cli) -> i32 {
    cmd_generate_with_fs(cli, default_fs())
}

/// Fatal errors are reported, not turned into a failing exit status.
pub fn cmd_generate_with_fs(cli: &Cli, fs: &dyn FileSystem) -> i32 {
    let config = match crate::config::Config::load(&cli.config, fs) {
        Ok(config) => config,
        Err(e) => {
            style::error(&e.to_string());
            return 0;
        }
    };

    let files = match api::select(&config) {
        Ok(files) => files,
        Err(e) => {
            style::error(&e.to_string());
            return 0;
        }
    };

    if !cli.stdout {
        style::status(&format!(
            "Processing {} files under {}",
            files.len(),
            style::path(&config.root_dir)
        ));
    }

    let options = GenerateOptions {
        emit_imports: cli.emit_imports,
    };
    let report = api::render_files(&config, &files, &options, fs);

    for failure in &report.failures {
        style::warning(&format!(
            "Skipped {}: {}",
            style::path(&failure.path),
            failure.reason
        ));
    }

    if cli.stdout {
        print!("{}", report.document);
        return 0;
    }

    if let Err(e) = api::write_document(&report, fs) {
        style::error(&e.to_string());
        return 0;
    }

    style::success(&format!(
        "Wrote {} ({} declarations from {} files)",
        style::path(&report.out_file),
        report.declarations,
        report.emitted_files
    ));
    0
}
