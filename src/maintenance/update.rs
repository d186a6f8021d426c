//! Self-update: fetch a release binary and replace the running one.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{confirm, MaintenanceError};

/// GitHub repository the release binaries are published under.
const RELEASE_REPO: &str = "https://github.com/Yuddhaa/mocker";

/// Download the requested release and replace the running binary.
///
/// With no version (or "latest") the latest release asset is used,
/// otherwise the given tag (e.g. `v1.1.0`). On Unix the running binary
/// is renamed over in place; a permission error offers a sudo retry. On
/// Windows the new binary is only downloaded, with instructions to swap
/// it manually.
pub async fn self_update(version: Option<&str>) -> Result<(), MaintenanceError> {
    let asset = asset_name(env::consts::OS, env::consts::ARCH)?;

    let url = match version {
        None | Some("") | Some("latest") => {
            println!("Updating to the latest version...");
            format!("{RELEASE_REPO}/releases/latest/download/{asset}")
        }
        Some(tag) => {
            println!("Updating to version {tag}...");
            format!("{RELEASE_REPO}/releases/download/{tag}/{asset}")
        }
    };

    let response = reqwest::get(&url).await?;
    if !response.status().is_success() {
        return Err(MaintenanceError::DownloadStatus(response.status().as_u16()));
    }
    let bytes = response.bytes().await?;

    // Stage the new binary next to the working directory before swapping.
    let tmp_file = if env::consts::OS == "windows" {
        PathBuf::from("mocker_new.exe")
    } else {
        PathBuf::from("mocker_new")
    };

    tokio::fs::write(&tmp_file, &bytes)
        .await
        .map_err(|source| MaintenanceError::Io {
            context: "failed to write downloaded binary",
            source,
        })?;
    make_executable(&tmp_file);

    let current_path = env::current_exe().map_err(|source| MaintenanceError::Io {
        context: "cannot locate current executable",
        source,
    })?;

    if env::consts::OS == "windows" {
        println!("Downloaded new version to {}", tmp_file.display());
        println!("On Windows, please manually replace the old binary with the new one.");
        return Ok(());
    }

    match std::fs::rename(&tmp_file, &current_path) {
        Ok(()) => {
            println!("Successfully updated mocker!");
            Ok(())
        }
        Err(error) if error.kind() == std::io::ErrorKind::PermissionDenied => {
            replace_with_sudo(&tmp_file, &current_path)
        }
        Err(source) => Err(MaintenanceError::Io {
            context: "failed to replace binary",
            source,
        }),
    }
}

/// Release asset name for an OS/arch pair.
fn asset_name(os: &str, arch: &str) -> Result<&'static str, MaintenanceError> {
    match (os, arch) {
        ("macos", "aarch64") => Ok("mocker-macos"),
        ("macos", _) => Ok("mocker-macos-amd"),
        ("linux", _) => Ok("mocker-linux"),
        ("windows", _) => Ok("mocker-windows.exe"),
        _ => Err(MaintenanceError::UnsupportedPlatform {
            os: os.to_string(),
            arch: arch.to_string(),
        }),
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(error) = std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)) {
        tracing::warn!(%error, path = %path.display(), "could not set executable permissions");
    }
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}

/// Permission-denied fallback: offer an elevated `sudo mv`.
fn replace_with_sudo(tmp_file: &Path, current_path: &Path) -> Result<(), MaintenanceError> {
    println!("Permission denied while trying to replace the binary.");
    println!("Current location: {}", current_path.display());
    println!("New binary:       {}", tmp_file.display());
    println!();

    if !confirm("Would you like mocker to try replacing it using sudo?")? {
        println!("Skipped automatic sudo replacement. You can manually run:");
        println!("  sudo mv {} {}", tmp_file.display(), current_path.display());
        return Ok(());
    }

    println!("Attempting to elevate privileges with sudo...");
    let status = Command::new("sudo")
        .arg("mv")
        .arg(tmp_file)
        .arg(current_path)
        .status()
        .map_err(|source| MaintenanceError::Io {
            context: "failed to run sudo",
            source,
        })?;

    if !status.success() {
        let _ = std::fs::remove_file(tmp_file);
        eprintln!("Failed to update even with sudo. Please try manually running:");
        eprintln!("  sudo mv {} {}", tmp_file.display(), current_path.display());
        return Err(MaintenanceError::Elevation { action: "replace" });
    }

    println!("Successfully updated mocker!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_names_per_platform() {
        assert_eq!(asset_name("macos", "aarch64").unwrap(), "mocker-macos");
        assert_eq!(asset_name("macos", "x86_64").unwrap(), "mocker-macos-amd");
        assert_eq!(asset_name("linux", "x86_64").unwrap(), "mocker-linux");
        assert_eq!(asset_name("linux", "aarch64").unwrap(), "mocker-linux");
        assert_eq!(asset_name("windows", "x86_64").unwrap(), "mocker-windows.exe");
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let err = asset_name("freebsd", "x86_64").unwrap_err();
        assert!(matches!(err, MaintenanceError::UnsupportedPlatform { .. }));
    }
}
