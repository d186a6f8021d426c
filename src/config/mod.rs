//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → MockConfig (validated, immutable)
//!     → routing::compile builds the RouteTable from it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot-reload
//! - Validation separates syntactic (serde) from semantic checks
//! - All configuration errors are fatal before the listener opens

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{MockConfig, ResponseSpec, RouteSpec};
