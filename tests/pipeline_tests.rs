//! End-to-end pipeline tests against a fake vendor installer
//!
//! Each test builds a media directory layout (release directory, installer
//! script, key file, license file) in a tempdir and drives the real binary
//! over it. The fake installer records that it ran, which lets the tests
//! prove that credential failures halt the pipeline before any spawn.

#![cfg(unix)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn mlinstall_cmd() -> Command {
    Command::cargo_bin("mlinstall").unwrap()
}

/// Create a release media directory with a fake installer script
///
/// The script touches `ran.marker` in the media directory, then runs the
/// given shell body.
fn write_media(base: &Path, release: &str, script_body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let dir = base.join(release);
    std::fs::create_dir_all(&dir).unwrap();

    let installer = dir.join("install");
    std::fs::write(
        &installer,
        format!("#!/bin/sh\ntouch \"$(dirname \"$0\")/ran.marker\"\n{script_body}\n"),
    )
    .unwrap();
    std::fs::set_permissions(&installer, std::fs::Permissions::from_mode(0o755)).unwrap();

    std::fs::write(dir.join("file_install_key.txt"), "1234-5678-9012\n").unwrap();
    std::fs::write(dir.join("license.dat"), "SERVER host ANY 27000\n").unwrap();
    dir
}

fn installer_ran(version_dir: &Path) -> bool {
    version_dir.join("ran.marker").exists()
}

#[test]
fn test_batch_install_succeeds_end_to_end() {
    let temp = TempDir::new().unwrap();
    let version_dir = write_media(temp.path(), "R2019a", "exit 0");
    let dest = temp.path().join("dest");

    mlinstall_cmd()
        .arg("install")
        .arg(temp.path())
        .arg("--batch")
        .arg("--to")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("R2019a"))
        .stdout(predicate::str::contains("installed to"));

    assert!(installer_ran(&version_dir));
}

#[test]
fn test_picks_latest_release_without_explicit_version() {
    let temp = TempDir::new().unwrap();
    write_media(temp.path(), "R2017a", "exit 0");
    write_media(temp.path(), "R2018a", "exit 0");
    let latest = write_media(temp.path(), "R2018b", "exit 0");

    mlinstall_cmd()
        .arg("install")
        .arg(temp.path())
        .arg("--batch")
        .arg("--to")
        .arg(temp.path().join("dest"))
        .assert()
        .success()
        .stdout(predicate::str::contains("R2018b"));

    assert!(installer_ran(&latest));
    assert!(!installer_ran(&temp.path().join("R2017a")));
}

#[test]
fn test_explicit_release_overrides_detection() {
    let temp = TempDir::new().unwrap();
    let older = write_media(temp.path(), "R2018a", "exit 0");
    write_media(temp.path(), "R2019a", "exit 0");

    mlinstall_cmd()
        .arg("install")
        .arg(temp.path())
        .args(["--batch", "--release", "R2018a"])
        .arg("--to")
        .arg(temp.path().join("dest"))
        .assert()
        .success()
        .stdout(predicate::str::contains("R2018a"));

    assert!(installer_ran(&older));
}

#[test]
fn test_empty_key_halts_before_any_spawn() {
    let temp = TempDir::new().unwrap();
    let version_dir = write_media(temp.path(), "R2019a", "exit 0");
    std::fs::write(version_dir.join("file_install_key.txt"), "").unwrap();

    mlinstall_cmd()
        .arg("install")
        .arg(temp.path())
        .arg("--batch")
        .arg("--to")
        .arg(temp.path().join("dest"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("installation key"));

    assert!(!installer_ran(&version_dir));
}

#[test]
fn test_missing_license_halts_before_any_spawn() {
    let temp = TempDir::new().unwrap();
    let version_dir = write_media(temp.path(), "R2019a", "exit 0");
    std::fs::remove_file(version_dir.join("license.dat")).unwrap();

    mlinstall_cmd()
        .arg("install")
        .arg(temp.path())
        .arg("--batch")
        .arg("--to")
        .arg(temp.path().join("dest"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("License file"));

    assert!(!installer_ran(&version_dir));
}

#[test]
fn test_installer_failure_mirrors_exit_code() {
    let temp = TempDir::new().unwrap();
    write_media(temp.path(), "R2019a", "echo 'activation refused' >&2; exit 7");

    mlinstall_cmd()
        .arg("install")
        .arg(temp.path())
        .arg("--batch")
        .arg("--to")
        .arg(temp.path().join("dest"))
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("exited with code 7"))
        .stderr(predicate::str::contains("activation refused"));
}

#[test]
fn test_no_release_directories() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("downloads")).unwrap();

    mlinstall_cmd()
        .arg("install")
        .arg(temp.path())
        .arg("--batch")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No MATLAB release directories"));
}

#[test]
fn test_requested_release_directory_missing() {
    let temp = TempDir::new().unwrap();
    write_media(temp.path(), "R2018a", "exit 0");

    mlinstall_cmd()
        .arg("install")
        .arg(temp.path())
        .args(["--batch", "--release", "R2021b"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Release directory not found"));
}

#[test]
fn test_already_installed_short_circuits() {
    let temp = TempDir::new().unwrap();
    let version_dir = write_media(temp.path(), "R2019a", "exit 0");
    let dest = temp.path().join("dest");
    std::fs::create_dir_all(dest.join("bin")).unwrap();
    std::fs::write(dest.join("bin").join("matlab"), "#!/bin/sh\n").unwrap();

    mlinstall_cmd()
        .arg("install")
        .arg(temp.path())
        .arg("--batch")
        .arg("--to")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("already installed"));

    assert!(!installer_ran(&version_dir));
}

#[test]
fn test_force_reinstalls_over_existing() {
    let temp = TempDir::new().unwrap();
    let version_dir = write_media(temp.path(), "R2019a", "exit 0");
    let dest = temp.path().join("dest");
    std::fs::create_dir_all(dest.join("bin")).unwrap();
    std::fs::write(dest.join("bin").join("matlab"), "#!/bin/sh\n").unwrap();

    mlinstall_cmd()
        .arg("install")
        .arg(temp.path())
        .args(["--batch", "--force"])
        .arg("--to")
        .arg(&dest)
        .assert()
        .success();

    assert!(installer_ran(&version_dir));
}

#[test]
fn test_link_skipped_in_interactive_mode() {
    let temp = TempDir::new().unwrap();
    write_media(temp.path(), "R2019a", "exit 0");

    mlinstall_cmd()
        .arg("install")
        .arg(temp.path())
        .arg("--link")
        .arg("--to")
        .arg(temp.path().join("dest"))
        .assert()
        .success()
        .stdout(predicate::str::contains("--batch or --automate"));
}

#[test]
fn test_batch_invocation_carries_credentials() {
    let temp = TempDir::new().unwrap();
    // The fake installer echoes its arguments into a file for inspection
    let version_dir = write_media(temp.path(), "R2019a", "echo \"$@\" > \"$(dirname \"$0\")/args.txt\"");

    mlinstall_cmd()
        .arg("install")
        .arg(temp.path())
        .arg("--batch")
        .arg("--to")
        .arg(temp.path().join("dest"))
        .assert()
        .success();

    let args = std::fs::read_to_string(version_dir.join("args.txt")).unwrap();
    assert!(args.contains("-mode silent"));
    assert!(args.contains("-fileInstallationKey 1234-5678-9012"));
    assert!(args.contains("license.dat"));
    assert!(args.contains("-destinationFolder"));
}

#[test]
fn test_interactive_invocation_carries_no_credentials() {
    let temp = TempDir::new().unwrap();
    let version_dir = write_media(temp.path(), "R2019a", "echo \"$@\" > \"$(dirname \"$0\")/args.txt\"");

    mlinstall_cmd()
        .arg("install")
        .arg(temp.path())
        .arg("--to")
        .arg(temp.path().join("dest"))
        .assert()
        .success();

    let args = std::fs::read_to_string(version_dir.join("args.txt")).unwrap();
    assert!(!args.contains("fileInstallationKey"));
    assert!(!args.contains("licensePath"));
    assert!(!args.contains("-mode"));
}
