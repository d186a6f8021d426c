//! Mocker: a mock HTTP server driven by a declarative JSON config.
//!
//! # Architecture Overview
//!
//! ```text
//! config file (JSON)
//!     → config::loader (parse + validate)
//!     → routing::compile (RouteSpec[] → immutable RouteTable)
//!     → http::HttpServer (Axum catch-all)
//!         per request:
//!         routing::match_request (Matched | MethodNotAllowed | NotFound)
//!         → http::dispatch (status + JSON body + headers)
//! ```
//!
//! The route table is built once before the listener opens and shared
//! read-only by every request handler; matching and dispatch are pure
//! in-memory computations with no locks in the hot path.

pub mod cli;
pub mod config;
pub mod http;
pub mod maintenance;
pub mod routing;

pub use config::MockConfig;
pub use http::HttpServer;
pub use routing::RouteTable;
