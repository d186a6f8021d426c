//! Binary maintenance subsystem: self-update and uninstall.
//!
//! # Data Flow
//! ```text
//! --update [--download-version vX.Y.Z]
//!     → update.rs (download release asset → temp file → rename over
//!       the running binary; sudo fallback on permission denied)
//!
//! --uninstall
//!     → uninstall.rs (confirm on stdin → remove the running binary;
//!       sudo fallback on permission denied)
//! ```
//!
//! # Design Decisions
//! - Both flows are interactive and talk to the operator on stdout/stdin
//! - Windows cannot replace or delete a running .exe, so both flows
//!   degrade to printed manual instructions there
//! - Neither flow ever touches the routing core; they exit before it runs

pub mod update;
pub mod uninstall;

use std::io::{self, Write};

pub use update::self_update;
pub use uninstall::uninstall;

/// Error type for update/uninstall flows.
#[derive(Debug, thiserror::Error)]
pub enum MaintenanceError {
    #[error("unsupported platform: {os}/{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("failed to download binary: {0}")]
    Download(#[from] reqwest::Error),

    #[error("failed to download binary: HTTP {0}")]
    DownloadStatus(u16),

    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("privilege-escalated {action} failed")]
    Elevation { action: &'static str },
}

/// Ask the operator a yes/no question on stdout/stdin.
pub(crate) fn confirm(prompt: &str) -> Result<bool, MaintenanceError> {
    print!("{prompt} (y/N): ");
    io::stdout().flush().map_err(|source| MaintenanceError::Io {
        context: "failed to flush stdout",
        source,
    })?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .map_err(|source| MaintenanceError::Io {
            context: "failed to read confirmation",
            source,
        })?;

    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_variants_are_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y\n"));
        assert!(is_affirmative("  yes  "));
        assert!(is_affirmative("YES"));
    }

    #[test]
    fn anything_else_is_a_refusal() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yep"));
    }
}
