use crate::constants::{verbosity, DEFAULT_EXTENSION, DEFAULT_ROOT_DIR};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for esmfix.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the compiled modules.
    #[arg(value_name = "ROOT", default_value = DEFAULT_ROOT_DIR)]
    pub root: PathBuf,

    /// File or directory names to skip at any depth (comma-separated or repeated).
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Extension appended to import specifiers lacking it.
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Report rewrites without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Parse command line arguments, exiting with usage on error.
pub fn get_args() -> Args {
    Args::parse()
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
