//! Host platform detection and privilege helpers
//!
//! The only real cross-platform differences in this tool live here: the
//! installer executable name, the default installation root, the well-known
//! link location, and how elevated privileges are detected. Everything else
//! consumes these as plain values.

use std::path::{Path, PathBuf};

use crate::release::Release;

/// Well-known location for the post-install symlink (POSIX only)
pub const MATLAB_LINK_PATH: &str = "/usr/local/bin/matlab";

/// The platform the installer runs on, computed once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    Unix,
}

/// Detect the current host platform
pub fn host() -> HostPlatform {
    if cfg!(windows) {
        HostPlatform::Windows
    } else {
        HostPlatform::Unix
    }
}

impl HostPlatform {
    /// Vendor installer executable name inside a release media directory
    pub fn installer_name(self) -> &'static str {
        match self {
            HostPlatform::Windows => "setup.exe",
            HostPlatform::Unix => "install",
        }
    }

    /// Default installation root for a release when no `--to` is given
    pub fn default_install_root(self, release: &Release) -> PathBuf {
        match self {
            HostPlatform::Windows => {
                PathBuf::from(format!("C:\\Program Files\\MATLAB\\{release}"))
            }
            HostPlatform::Unix => PathBuf::from(format!("/usr/local/MATLAB/{release}")),
        }
    }

    /// Path of the MATLAB launcher inside an installation root
    pub fn matlab_binary(self, install_root: &Path) -> PathBuf {
        match self {
            HostPlatform::Windows => install_root.join("bin").join("matlab.exe"),
            HostPlatform::Unix => install_root.join("bin").join("matlab"),
        }
    }
}

/// Paths that typically require root access to write into
const PRIVILEGED_PREFIXES: &[&str] = &["/etc/", "/usr/local/", "/usr/bin/", "/usr/sbin/", "/opt/"];

/// Whether installing into `destination` needs elevated privileges (POSIX)
pub fn needs_privilege(destination: &Path) -> bool {
    let path = destination.to_string_lossy();
    PRIVILEGED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Check if the current process runs with elevated privileges
#[cfg(unix)]
pub fn is_elevated() -> bool {
    unsafe { libc::geteuid() == 0 }
}

/// Windows installers prompt for elevation themselves, so the check never gates
#[cfg(not(unix))]
pub fn is_elevated() -> bool {
    true
}
