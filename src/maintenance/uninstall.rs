//! Uninstall: remove the running binary from the system.

use std::env;
use std::path::Path;
use std::process::Command;

use super::{confirm, MaintenanceError};

/// Remove the mocker binary after operator confirmation.
///
/// On Unix the executable deletes itself in place; a permission error
/// offers a sudo retry. On Windows a running .exe cannot delete itself,
/// so manual instructions are printed instead.
pub fn uninstall() -> Result<(), MaintenanceError> {
    let exec_path = env::current_exe().map_err(|source| MaintenanceError::Io {
        context: "cannot locate current executable",
        source,
    })?;

    println!("This will remove mocker from your system.");
    println!("Location: {}", exec_path.display());

    if !confirm("Are you sure you want to uninstall mocker?")? {
        println!("Uninstall cancelled.");
        return Ok(());
    }

    if env::consts::OS == "windows" {
        println!("On Windows, an application cannot delete itself while running.");
        println!("Please manually delete this file:");
        println!("{}", exec_path.display());
        return Ok(());
    }

    match std::fs::remove_file(&exec_path) {
        Ok(()) => {
            println!("Successfully uninstalled mocker.");
            Ok(())
        }
        Err(error) if error.kind() == std::io::ErrorKind::PermissionDenied => {
            remove_with_sudo(&exec_path)
        }
        Err(source) => Err(MaintenanceError::Io {
            context: "failed to uninstall",
            source,
        }),
    }
}

/// Permission-denied fallback: offer an elevated `sudo rm`.
fn remove_with_sudo(exec_path: &Path) -> Result<(), MaintenanceError> {
    println!("Permission denied while trying to uninstall mocker.");
    println!("Binary location: {}", exec_path.display());
    println!();

    if !confirm("Would you like mocker to try removing it using sudo?")? {
        println!("Skipped automatic sudo removal. You can manually run:");
        println!("  sudo rm {}", exec_path.display());
        return Ok(());
    }

    println!("Attempting to elevate privileges with sudo...");
    let status = Command::new("sudo")
        .arg("rm")
        .arg(exec_path)
        .status()
        .map_err(|source| MaintenanceError::Io {
            context: "failed to run sudo",
            source,
        })?;

    if !status.success() {
        eprintln!("Failed to uninstall with sudo. You can try manually running:");
        eprintln!("  sudo rm {}", exec_path.display());
        return Err(MaintenanceError::Elevation { action: "remove" });
    }

    println!("Successfully uninstalled mocker.");
    Ok(())
}
