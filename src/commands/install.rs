//! Install command implementation
//!
//! Orchestrates the installation pipeline:
//! 1. Resolve which release directory to install from
//! 2. Locate and validate the file installation key and license file
//! 3. Build the vendor installer invocation for the requested mode
//! 4. Drive the installer process to completion
//! 5. Optionally link /usr/local/bin/matlab to the installed binary
//!
//! Stages run strictly in order; any failure is terminal for the run. There
//! is no retry: silently re-running a privileged, stateful installer is
//! unsafe without operator review.

use console::style;

use crate::cli::InstallArgs;
use crate::credentials;
use crate::driver;
use crate::error::{InstallError, Result};
use crate::invocation::{self, AutomationMode};
use crate::platform;
use crate::progress::InstallSpinner;
use crate::resolver;

/// Run the install command
pub fn run(args: InstallArgs, verbose: bool) -> Result<()> {
    let host = platform::host();
    let mode = args.mode();

    let base_dir = match args.dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let source = resolver::resolve(&base_dir, args.release.as_deref())?;
    println!(
        "Installing MATLAB {} from {}",
        style(&source.release).cyan().bold(),
        source.version_dir.display()
    );

    let install_root = args
        .to
        .clone()
        .unwrap_or_else(|| host.default_install_root(&source.release));
    let installed_binary = host.matlab_binary(&install_root);

    if !args.force && installed_binary.exists() {
        println!(
            "{} MATLAB {} is already installed at {} (use --force to reinstall)",
            style("✓").green(),
            source.release,
            install_root.display()
        );
        return Ok(());
    }

    let creds = credentials::locate(&source.version_dir)?;
    let spec = invocation::build(&source, &creds, mode, host, args.to.as_deref());

    if verbose {
        // Arguments stay unlogged: in batch mode they carry the install key
        println!("Installer: {}", spec.program.display());
        println!("Working directory: {}", spec.working_dir.display());
        println!("Elevation required: {}", spec.requires_elevation);
    }

    // Only silent mode gets a spinner; in the other modes the vendor
    // installer owns the terminal
    let spinner = (mode == AutomationMode::Batch)
        .then(|| InstallSpinner::start(format!("Running MATLAB {} installer", source.release)));

    let outcome = driver::run(&spec);
    match (spinner, &outcome) {
        (Some(s), Ok(_)) => s.finish(),
        (Some(s), Err(_)) => s.abandon(),
        (None, _) => {}
    }

    let result = outcome?;
    if !result.succeeded {
        return Err(InstallError::InstallerFailed {
            code: result.exit_code,
            stderr_tail: result.stderr_tail,
        });
    }

    println!(
        "{} MATLAB {} installed to {}",
        style("✓").green(),
        source.release,
        install_root.display()
    );

    if args.link {
        link_installed_binary(mode, &installed_binary)?;
    }

    Ok(())
}

#[cfg(unix)]
fn link_installed_binary(mode: AutomationMode, installed_binary: &std::path::Path) -> Result<()> {
    use crate::linker::{self, LinkRequest};
    use std::path::PathBuf;

    if mode == AutomationMode::Interactive {
        // The operator may have changed the destination inside the wizard,
        // so the installed path cannot be trusted here
        println!(
            "{} --link is only applied in --batch or --automate mode, skipping",
            style("!").yellow()
        );
        return Ok(());
    }

    let request = LinkRequest {
        target: PathBuf::from(platform::MATLAB_LINK_PATH),
        source: installed_binary.to_path_buf(),
    };
    linker::link(&request)?;
    println!(
        "{} Linked {} -> {}",
        style("✓").green(),
        request.target.display(),
        request.source.display()
    );
    Ok(())
}

#[cfg(not(unix))]
fn link_installed_binary(_mode: AutomationMode, _installed_binary: &std::path::Path) -> Result<()> {
    println!(
        "{} Making a symbolic link is only supported on POSIX systems, skipping",
        style("!").yellow()
    );
    Ok(())
}
