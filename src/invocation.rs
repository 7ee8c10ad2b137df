//! Vendor installer invocation building
//!
//! `build` is a pure function from the resolved source, credentials, mode
//! and platform to the exact process invocation. It performs no I/O, so the
//! full flag matrix is unit-testable without installer media. The flag
//! vocabulary is the vendor's (`-mode silent`, `-fileInstallationKey`, ...).

use std::path::{Path, PathBuf};

use crate::credentials::Credentials;
use crate::platform::{self, HostPlatform};
use crate::resolver::InstallationSource;

/// Timeout forwarded to the vendor's automated wizard mode, in milliseconds
const AUTOMATED_MODE_TIMEOUT_MS: &str = "5000";

/// How much of the install the vendor installer runs unattended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationMode {
    /// Vendor wizard runs normally; the operator answers every prompt
    Interactive,
    /// Wizard screens advance automatically; the vendor may still prompt
    Automate,
    /// Fully silent, no interaction possible
    Batch,
}

/// Everything needed to launch the vendor installer, derived once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    pub requires_elevation: bool,
}

/// Build the installer invocation for the requested automation mode
pub fn build(
    source: &InstallationSource,
    credentials: &Credentials,
    mode: AutomationMode,
    host: HostPlatform,
    destination: Option<&Path>,
) -> InvocationSpec {
    let program = source.version_dir.join(host.installer_name());
    let install_root = destination
        .map(Path::to_path_buf)
        .unwrap_or_else(|| host.default_install_root(&source.release));

    let mut args: Vec<String> = Vec::new();
    match mode {
        // The operator supplies key and license through the wizard
        AutomationMode::Interactive => {}
        AutomationMode::Automate => {
            push_flag(&mut args, "agreeToLicense", "yes");
            push_flag(&mut args, "mode", "automated");
            push_flag(&mut args, "automatedModeTimeout", AUTOMATED_MODE_TIMEOUT_MS);
        }
        AutomationMode::Batch => {
            push_flag(&mut args, "agreeToLicense", "yes");
            push_flag(&mut args, "mode", "silent");
            push_flag(&mut args, "fileInstallationKey", &credentials.file_install_key);
            push_flag(
                &mut args,
                "licensePath",
                &credentials.license_file.display().to_string(),
            );
        }
    }
    if mode != AutomationMode::Interactive {
        if let Some(dest) = destination {
            push_flag(&mut args, "destinationFolder", &dest.display().to_string());
        }
    }

    let requires_elevation = match host {
        // setup.exe raises its own UAC prompt
        HostPlatform::Windows => false,
        HostPlatform::Unix => platform::needs_privilege(&install_root),
    };

    InvocationSpec {
        program,
        args,
        working_dir: source.version_dir.clone(),
        requires_elevation,
    }
}

fn push_flag(args: &mut Vec<String>, name: &str, value: &str) {
    args.push(format!("-{name}"));
    args.push(value.to_string());
}
