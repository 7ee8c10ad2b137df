//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::invocation::AutomationMode;

/// mlinstall - unattended MATLAB installer
///
/// Drives the vendor installer from local media without interactive prompts
/// for the file installation key or license file.
#[derive(Parser, Debug)]
#[command(
    name = "mlinstall",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Unattended MATLAB installer",
    long_about = "mlinstall resolves which MATLAB release to install from local media \
                  directories (R2019a, R2023b, ...), validates the file installation key \
                  and license file, and drives the vendor installer to completion without \
                  interactive prompts.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  mlinstall install --batch\n    \
                  mlinstall install /media/matlab --batch --link\n    \
                  mlinstall install --release R2019a --automate\n    \
                  mlinstall install --batch --to ~/MATLAB/R2019a\n\n\
                  \x1b[1m\x1b[32mMedia layout:\x1b[0m\n    \
                  <dir>/R2019a/install (or setup.exe)\n    \
                  <dir>/R2019a/file_install_key.txt\n    \
                  <dir>/R2019a/license.dat"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install MATLAB from local media
    Install(InstallArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Fully silent install from the current directory:\n    mlinstall install --batch\n\n\
                  Automated wizard with a symlink afterwards:\n    mlinstall install --automate --link\n\n\
                  Install a specific release:\n    mlinstall install --release R2018b --batch\n\n\
                  Install into a custom destination:\n    mlinstall install --batch --to /opt/matlab/R2019a\n\n\
                  Reinstall over an existing installation:\n    mlinstall install --batch --force")]
pub struct InstallArgs {
    /// Base directory containing release media directories (defaults to current directory)
    pub dir: Option<PathBuf>,

    /// Run the installer fully silent, no user interaction
    #[arg(long, short = 'b', conflicts_with = "automate")]
    pub batch: bool,

    /// Let the vendor wizard advance its screens automatically
    #[arg(long, short = 'a')]
    pub automate: bool,

    /// Release to install (e.g. R2019a), overriding auto-detection of the newest
    #[arg(long, short = 'r', value_name = "RELEASE")]
    pub release: Option<String>,

    /// Destination folder forwarded to the installer
    #[arg(long, short = 't', value_name = "PATH")]
    pub to: Option<PathBuf>,

    /// Create /usr/local/bin/matlab after a successful unattended install (POSIX)
    #[arg(long, short = 'l')]
    pub link: bool,

    /// Install even if this release already appears to be installed
    #[arg(long)]
    pub force: bool,
}

impl InstallArgs {
    /// Fold the mode flags into the closed automation mode set
    pub fn mode(&self) -> AutomationMode {
        if self.batch {
            AutomationMode::Batch
        } else if self.automate {
            AutomationMode::Automate
        } else {
            AutomationMode::Interactive
        }
    }
}

/// Arguments for completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
