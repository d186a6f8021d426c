//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with a catch-all handler
//! - Wire up middleware (request tracing)
//! - Dispatch every request through matcher → dispatcher
//! - Serve with graceful shutdown on Ctrl+C
//!
//! # Design Decisions
//! - One catch-all route; the mock route table, not Axum, decides what
//!   exists. This keeps matching semantics fully specified and portable
//! - The table is shared via Arc: built once before the listener opens,
//!   never written afterwards, so handlers need no locks
//! - A failed connection never takes the server down (hyper semantics);
//!   only a bind failure at startup is fatal

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::http::dispatch::dispatch;
use crate::routing::{match_request, RouteTable};

/// Application state injected into the handler.
#[derive(Clone)]
struct AppState {
    table: Arc<RouteTable>,
}

/// HTTP server for the mock API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around a compiled route table.
    pub fn new(table: RouteTable) -> Self {
        let state = AppState {
            table: Arc::new(table),
        };
        let router = Router::new()
            .route("/{*path}", any(mock_handler))
            .route("/", any(mock_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http());
        Self { router }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "mock server is up and running");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("mock server stopped");
        Ok(())
    }
}

/// The single handler behind every path: look up the route table and
/// render the configured response (or the 404/405 fallback).
async fn mock_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let method = request.method().as_str();
    let path = request.uri().path();

    tracing::debug!(method = %method, path = %path, "request received");

    dispatch(match_request(&state.table, method, path))
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
