//! Command handlers for CLI subcommands.

use std::path::Path;

use buildinfo_core::{config, generate, read_build_info, write_build_info, BuildInfo};
use buildinfo_git::GitRepository;
use chrono::Utc;
use tracing::info;

use crate::cli::{Commands, GenerateArgs};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command.
///
/// `default_args` are used when no subcommand was given.
pub fn execute(command: Option<Commands>, default_args: GenerateArgs) -> Result<()> {
    match command {
        Some(Commands::Generate(args)) => cmd_generate(&args).map(|_| ()),
        Some(Commands::Show { output }) => cmd_show(&output),
        None => cmd_generate(&default_args).map(|_| ()),
    }
}

/// Generate and write the build info file, echoing it to stdout.
pub fn cmd_generate(args: &GenerateArgs) -> Result<BuildInfo> {
    let version = config::resolve_version(args.build_version.clone());
    let repo = GitRepository::open(&args.repo);

    let generation = generate(&repo, &version, Utc::now());

    // Write failures are fatal and propagate to main.
    write_build_info(&args.output, &generation.info)?;

    info!(
        path = %args.output.display(),
        version = %generation.info.version,
        fallback = generation.used_fallback(),
        "build info generated"
    );

    println!("Build info generated: {}", args.output.display());
    println!("{}", generation.info.to_pretty_json()?);

    Ok(generation.info)
}

fn cmd_show(path: &Path) -> Result<()> {
    let info = read_build_info(path)?;
    println!("{}", info.to_pretty_json()?);
    Ok(())
}
