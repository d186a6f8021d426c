//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all route)
//!     → routing::match_request (table lookup)
//!     → dispatch.rs (outcome → status/headers/JSON body)
//!     → Send to client
//! ```

pub mod dispatch;
pub mod server;

pub use server::HttpServer;
