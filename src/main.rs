//! antfustyle-config - check, dump and scaffold `theme.toml`.

use anyhow::Result;
use antfustyle_config::cli::{Cli, Commands, check, dump, init};
use antfustyle_config::logger;
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match cli.command {
        Commands::Check => check::check(&cli.config),
        Commands::Dump { format, compact } => dump::dump(&cli.config, format, compact),
        Commands::Init { dry, force } => init::init(&cli.config, dry, force),
    }
}
