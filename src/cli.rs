//! Command-line interface definition.
//!
//! Every flag except `--path` short-circuits before the server starts:
//! uninstall and update flows run first, then example-config generation,
//! and only a plain invocation reads the config and serves.

use std::path::PathBuf;

use clap::Parser;

/// Spin up a mock HTTP server from a declarative JSON config.
#[derive(Debug, Parser)]
#[command(name = "mocker", version, about, long_about = None)]
pub struct Cli {
    /// Path of the JSON config file to serve.
    #[arg(long, default_value = "./example.json")]
    pub path: PathBuf,

    /// Generate an example config file at the given path and exit.
    #[arg(long, value_name = "FILE")]
    pub download: Option<PathBuf>,

    /// Update the running binary to the latest (or a specific) release.
    #[arg(long)]
    pub update: bool,

    /// Release tag to update to (e.g. "v1.1.0"); defaults to latest.
    #[arg(long, value_name = "TAG", requires = "update")]
    pub download_version: Option<String>,

    /// Remove the mocker binary from this system.
    #[arg(long)]
    pub uninstall: bool,
}
