//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteSpec[]
//!     → compiler.rs (segment templates, detect conflicts)
//!     → Freeze as immutable RouteTable
//!
//! Incoming Request (method, path):
//!     → matcher.rs (scan table in registration order)
//!     → Return: Matched{route, params} | MethodNotAllowed | NotFound
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in the hot path (segment comparison only)
//! - Deterministic: same input always matches the same route
//! - First match wins (ordered by registration)

pub mod compiler;
pub mod matcher;
pub mod table;

pub use compiler::{compile, CompileError};
pub use matcher::{match_request, MatchOutcome};
pub use table::{CompiledRoute, PathSegment, RouteTable};
