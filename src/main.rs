//! mlinstall - unattended MATLAB installer
//!
//! Resolves a MATLAB release from local media directories, validates the
//! file installation key and license file, and drives the vendor installer
//! to completion without interactive prompts.

use clap::Parser;

mod cli;
mod commands;
mod credentials;
mod driver;
mod error;
mod invocation;
#[cfg(unix)]
mod linker;
mod platform;
mod progress;
mod release;
mod resolver;

use cli::{Cli, Commands};
use error::InstallError;

/// Exit code for failures in the orchestration itself, as opposed to the
/// vendor installer running and failing (whose own exit code is mirrored)
const PIPELINE_FAILURE: i32 = 2;

/// Conventional exit code for death by terminal interrupt
const CANCELLED: i32 = 130;

fn exit_code_for(err: &InstallError) -> i32 {
    match err {
        InstallError::InstallerFailed { code, .. } if *code > 0 => *code,
        InstallError::Cancelled => CANCELLED,
        _ => PIPELINE_FAILURE,
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let InstallError::InstallerFailed {
            stderr_tail: Some(tail),
            ..
        } = &e
        {
            eprintln!("Installer stderr (tail):");
            eprintln!("{}", tail);
        }
        std::process::exit(exit_code_for(&e));
    }
}
