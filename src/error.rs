//! Error types and handling for mlinstall
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Every pipeline stage fails with a dedicated variant; nothing here is ever
//! retried or recovered from internally.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mlinstall operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallError {
    // Release resolution errors
    #[error("Invalid MATLAB release name: {name}")]
    #[diagnostic(
        code(mlinstall::release::invalid_name),
        help("Release names look like R2019a or R2023b")
    )]
    InvalidRelease { name: String },

    #[error("Release directory not found: {requested}")]
    #[diagnostic(
        code(mlinstall::release::not_found),
        help("Check that a directory with that release name exists under the base directory")
    )]
    ReleaseNotFound { requested: String },

    #[error("No MATLAB release directories found in {dir}")]
    #[diagnostic(
        code(mlinstall::release::none_found),
        help("Expected at least one subdirectory named like R2019a containing the installer media")
    )]
    NoReleasesFound { dir: String },

    // Credential errors
    #[error("File installation key in {path} is missing or malformed")]
    #[diagnostic(
        code(mlinstall::credentials::invalid_key),
        help("The key file must contain a single dash-separated digit key, e.g. 12345-67890-12345")
    )]
    InvalidKey { path: String },

    #[error("License file missing or empty: {path}")]
    #[diagnostic(
        code(mlinstall::credentials::missing_license),
        help("Place the license.dat issued with your file installation key next to the installer")
    )]
    MissingLicense { path: String },

    // Process driver errors
    #[error("Installation to a protected location requires elevated privileges")]
    #[diagnostic(
        code(mlinstall::driver::elevation_required),
        help("Re-run under sudo, or pass --to with a destination you can write to")
    )]
    ElevationRequired,

    #[error("Failed to start installer {program}: {reason}")]
    #[diagnostic(
        code(mlinstall::driver::spawn_failed),
        help("Check that the installer executable exists in the release directory and is executable")
    )]
    SpawnFailed { program: String, reason: String },

    #[error("MATLAB installer exited with code {code}")]
    #[diagnostic(code(mlinstall::driver::installer_failed))]
    InstallerFailed {
        code: i32,
        stderr_tail: Option<String>,
    },

    #[error("Installation cancelled")]
    #[diagnostic(code(mlinstall::driver::cancelled))]
    Cancelled,

    // Post-install link errors
    #[error("Link target already exists: {path}")]
    #[diagnostic(
        code(mlinstall::link::target_exists),
        help("Remove the existing file or link manually if it should point at this installation")
    )]
    LinkTargetExists { path: String },

    #[error("Installed MATLAB binary not found at {path}")]
    #[diagnostic(
        code(mlinstall::link::source_missing),
        help("The installer reported success but did not produce the expected layout")
    )]
    LinkSourceMissing { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mlinstall::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for InstallError {
    fn from(err: std::io::Error) -> Self {
        InstallError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallError>;
