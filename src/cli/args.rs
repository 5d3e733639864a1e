use crate::constants::verbosity;
use clap::{Parser, Subcommand};
use log::LevelFilter;

/// CLI arguments for laravel-skeleton.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new Laravel skeleton application.
    Run(RunArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// Subdirectory to create the application in (defaults to the current
    /// directory).
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Init with docker-compose file.
    #[arg(long = "with-docker")]
    pub with_docker: bool,

    /// Init docker-compose file only.
    #[arg(long = "docker-only")]
    pub docker_only: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
