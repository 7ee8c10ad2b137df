//! Post-install symlink creation (POSIX only)
//!
//! After a successful unattended install, `/usr/local/bin/matlab` can be
//! pointed at the installed launcher so `matlab` works from any shell. An
//! existing target is never overwritten unless it is already the desired
//! link; anything else is surfaced to the operator. The link is staged at a
//! temporary name and renamed into place, so a half-created link is never
//! observable.

#![cfg(unix)]

use std::io::ErrorKind;
use std::os::unix::fs::symlink;
use std::path::PathBuf;

use crate::error::{InstallError, Result};

/// A request to link the well-known launcher path to an installed binary
#[derive(Debug, Clone)]
pub struct LinkRequest {
    pub target: PathBuf,
    pub source: PathBuf,
}

/// Create the symlink described by `request`
pub fn link(request: &LinkRequest) -> Result<()> {
    if !request.source.exists() {
        return Err(InstallError::LinkSourceMissing {
            path: request.source.display().to_string(),
        });
    }

    match std::fs::symlink_metadata(&request.target) {
        Ok(meta) => {
            let already_linked = meta.file_type().is_symlink()
                && std::fs::read_link(&request.target)
                    .map(|existing| existing == request.source)
                    .unwrap_or(false);
            if already_linked {
                return Ok(());
            }
            return Err(InstallError::LinkTargetExists {
                path: request.target.display().to_string(),
            });
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let staged = staged_name(request)?;
    // Stale leftover from an interrupted earlier run
    let _ = std::fs::remove_file(&staged);
    symlink(&request.source, &staged)?;
    std::fs::rename(&staged, &request.target).inspect_err(|_| {
        let _ = std::fs::remove_file(&staged);
    })?;

    Ok(())
}

fn staged_name(request: &LinkRequest) -> Result<PathBuf> {
    let parent = request.target.parent().ok_or_else(|| InstallError::IoError {
        message: format!("link target has no parent: {}", request.target.display()),
    })?;
    let name = request
        .target
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("matlab");
    Ok(parent.join(format!(".{}.{}.tmp", name, std::process::id())))
}
