use clap::Parser;
use dts_merge::{Cli, cmd_generate};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .init();

    std::process::exit(cmd_generate(&cli));
}
