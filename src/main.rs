//! Mocker CLI entry point.
//!
//! Handles flag dispatch (uninstall, update, example download), then the
//! normal run: load config, compile the route table, bind the listener
//! and serve. All configuration errors are reported before the listener
//! opens; a running server always has a valid, conflict-free table.

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mocker::cli::Cli;
use mocker::config::loader::{load_config, write_example};
use mocker::http::HttpServer;
use mocker::maintenance::{self_update, uninstall};
use mocker::routing::compile;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mocker=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Maintenance flows run first so nothing else does.
    if cli.uninstall {
        uninstall()?;
        return Ok(());
    }

    if cli.update {
        self_update(cli.download_version.as_deref()).await?;
        return Ok(());
    }

    // Generate an example config and exit.
    if let Some(download_path) = cli.download {
        if let Err(error) = write_example(&download_path) {
            eprintln!("Error creating example file: {error}");
            std::process::exit(1);
        }
        println!(
            "Example configuration downloaded to: {}",
            download_path.display()
        );
        println!("Run it with: mocker --path={}", download_path.display());
        return Ok(());
    }

    // Normal run: load, compile, serve.
    let config = match load_config(&cli.path) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(path = %cli.path.display(), %error, "failed to load configuration");
            std::process::exit(1);
        }
    };

    let table = match compile(&config.routes) {
        Ok(table) => table,
        Err(error) => {
            tracing::error!(%error, "failed to compile routes");
            std::process::exit(1);
        }
    };

    for route in table.routes() {
        tracing::info!(method = %route.method, path = %route.pattern(), "route set");
    }
    tracing::info!(
        port = %config.port,
        routes = table.len(),
        "configuration loaded"
    );

    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port.trim())).await?;
    HttpServer::new(table).run(listener).await?;

    Ok(())
}
