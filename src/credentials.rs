//! Credential location and validation
//!
//! Unattended installs need two artifacts next to the installer media: the
//! file installation key (`file_install_key.txt`, a single dash-separated
//! digit line) and the license file (`license.dat`, opaque, only checked for
//! existence and non-zero size). The key is sensitive and must never reach
//! logs or error messages; `Credentials` redacts it from `Debug` output.

use std::fmt;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{InstallError, Result};

/// Fixed name of the file installation key file
pub const KEY_FILE_NAME: &str = "file_install_key.txt";

/// Fixed name of the license file
pub const LICENSE_FILE_NAME: &str = "license.dat";

static KEY_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^\d+(-\d+)+$").unwrap()
});

/// Artifacts required for an unattended install
pub struct Credentials {
    pub file_install_key: String,
    pub license_file: PathBuf,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("file_install_key", &"<redacted>")
            .field("license_file", &self.license_file)
            .finish()
    }
}

/// Locate and validate the key and license inside a release media directory
pub fn locate(version_dir: &Path) -> Result<Credentials> {
    let key_path = version_dir.join(KEY_FILE_NAME);
    let invalid_key = || InstallError::InvalidKey {
        path: key_path.display().to_string(),
    };

    let key = std::fs::read_to_string(&key_path).map_err(|_| invalid_key())?;
    let key = key.trim();
    if !KEY_RE.is_match(key) {
        return Err(invalid_key());
    }

    let license_file = version_dir.join(LICENSE_FILE_NAME);
    let license_len = std::fs::metadata(&license_file).map(|m| m.len()).ok();
    if license_len.is_none_or(|len| len == 0) {
        return Err(InstallError::MissingLicense {
            path: license_file.display().to_string(),
        });
    }

    Ok(Credentials {
        file_install_key: key.to_string(),
        license_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_artifacts(dir: &Path, key: &str, license: &[u8]) {
        std::fs::write(dir.join(KEY_FILE_NAME), key).unwrap();
        std::fs::write(dir.join(LICENSE_FILE_NAME), license).unwrap();
    }

    #[test]
    fn test_locate_valid_credentials() {
        let temp = TempDir::new().unwrap();
        write_artifacts(temp.path(), "1234-5678-9012\n", b"SERVER host ANY 27000");

        let creds = locate(temp.path()).unwrap();
        assert_eq!(creds.file_install_key, "1234-5678-9012");
        assert_eq!(creds.license_file, temp.path().join(LICENSE_FILE_NAME));
    }

    #[test]
    fn test_locate_accepts_four_group_keys() {
        let temp = TempDir::new().unwrap();
        write_artifacts(temp.path(), "12345-67890-12345-67890", b"x");

        assert!(locate(temp.path()).is_ok());
    }

    #[test]
    fn test_empty_key_is_invalid() {
        let temp = TempDir::new().unwrap();
        write_artifacts(temp.path(), "", b"x");

        let err = locate(temp.path()).unwrap_err();
        assert!(matches!(err, InstallError::InvalidKey { .. }));
    }

    #[test]
    fn test_whitespace_key_is_invalid() {
        let temp = TempDir::new().unwrap();
        write_artifacts(temp.path(), "   \n\t", b"x");

        let err = locate(temp.path()).unwrap_err();
        assert!(matches!(err, InstallError::InvalidKey { .. }));
    }

    #[test]
    fn test_malformed_key_is_invalid_even_with_valid_license() {
        let temp = TempDir::new().unwrap();
        write_artifacts(temp.path(), "abcd-efgh", b"valid license content");

        let err = locate(temp.path()).unwrap_err();
        assert!(matches!(err, InstallError::InvalidKey { .. }));
    }

    #[test]
    fn test_missing_key_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(LICENSE_FILE_NAME), b"x").unwrap();

        let err = locate(temp.path()).unwrap_err();
        assert!(matches!(err, InstallError::InvalidKey { .. }));
    }

    #[test]
    fn test_missing_license_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(KEY_FILE_NAME), "1234-5678").unwrap();

        let err = locate(temp.path()).unwrap_err();
        assert!(matches!(err, InstallError::MissingLicense { .. }));
    }

    #[test]
    fn test_empty_license_file() {
        let temp = TempDir::new().unwrap();
        write_artifacts(temp.path(), "1234-5678", b"");

        let err = locate(temp.path()).unwrap_err();
        assert!(matches!(err, InstallError::MissingLicense { .. }));
    }

    #[test]
    fn test_debug_redacts_key() {
        let creds = Credentials {
            file_install_key: "1234-5678-9012".to_string(),
            license_file: PathBuf::from("/media/R2019a/license.dat"),
        };
        let debug = format!("{creds:?}");
        assert!(!debug.contains("1234-5678-9012"));
        assert!(debug.contains("<redacted>"));
    }
}
