//! Command-line interface definition using clap.

use buildinfo_core::config::{BUILD_VERSION_ENV, DEFAULT_OUTPUT_PATH, OUTPUT_ENV};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    // Format: "0.1.0 (abc1234, 2026-01-29)"
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// build-info - Stamp git and version metadata into a JSON file
#[derive(Parser, Debug)]
#[command(name = "build-info")]
#[command(author, version = version_string(), about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,

    // Used when no subcommand is given
    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the build info file (default)
    Generate(GenerateArgs),

    /// Print an existing build info file
    Show {
        /// Path of the build info file
        #[arg(short, long, env = OUTPUT_ENV, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },
}

/// Options for generating a build info file.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path of the JSON file to write
    #[arg(short, long, env = OUTPUT_ENV, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Git working copy to read metadata from
    #[arg(short = 'C', long, default_value = ".")]
    pub repo: PathBuf,

    /// Version stamped into the record (default: 1.0.0-dev)
    #[arg(long, env = BUILD_VERSION_ENV)]
    pub build_version: Option<String>,
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
