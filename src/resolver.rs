//! Release resolution from the local media layout
//!
//! The base directory is expected to hold one subdirectory per release
//! (`R2018a/`, `R2018b/`, ...) containing the vendor installer media. With
//! an explicit release the matching directory must exist; without one the
//! newest release directory wins. Resolution only reads the filesystem.

use std::path::{Path, PathBuf};

use crate::error::{InstallError, Result};
use crate::release::Release;

/// A resolved installation source, immutable once built
#[derive(Debug, Clone)]
pub struct InstallationSource {
    pub base_dir: PathBuf,
    pub version_dir: PathBuf,
    pub release: Release,
}

/// Resolve which release directory to install from
pub fn resolve(base_dir: &Path, explicit: Option<&str>) -> Result<InstallationSource> {
    let (release, version_dir) = match explicit {
        Some(name) => {
            let release: Release = name.parse()?;
            let version_dir = base_dir.join(name);
            if !version_dir.is_dir() {
                return Err(InstallError::ReleaseNotFound {
                    requested: name.to_string(),
                });
            }
            (release, version_dir)
        }
        None => latest_release(base_dir)?,
    };

    Ok(InstallationSource {
        base_dir: base_dir.to_path_buf(),
        version_dir,
        release,
    })
}

/// Scan immediate subdirectories and pick the newest release
fn latest_release(base_dir: &Path) -> Result<(Release, PathBuf)> {
    let entries = std::fs::read_dir(base_dir).map_err(|_| InstallError::NoReleasesFound {
        dir: base_dir.display().to_string(),
    })?;

    let mut candidates: Vec<(Release, PathBuf)> = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(release) = entry.file_name().to_str().and_then(Release::parse) {
            candidates.push((release, path));
        }
    }

    candidates
        .into_iter()
        .max_by_key(|(release, _)| *release)
        .ok_or_else(|| InstallError::NoReleasesFound {
            dir: base_dir.display().to_string(),
        })
}
