//! Configuration schema definitions.
//!
//! This module defines the JSON configuration structure for the mock
//! server. All types derive Serde traits for deserialization from the
//! config file.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root configuration for the mock server.
///
/// Example JSON:
///
/// ```json
/// {
///   "port": "6969",
///   "routes": [
///     {
///       "path": "/api/users",
///       "method": "GET",
///       "response": { "status": 200, "body": { "users": ["alice", "bob"] } }
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MockConfig {
    /// Port the mock server listens on.
    pub port: String,

    /// List of routes to serve.
    pub routes: Vec<RouteSpec>,
}

/// One mocked route defined in the JSON config.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteSpec {
    /// HTTP method to match (GET, POST, PATCH, etc.).
    pub method: String,

    /// Path template to match. Static (`/api/users`) or parameterized
    /// (`/api/users/{id}`).
    pub path: String,

    /// Response definition containing status and body.
    pub response: ResponseSpec,
}

/// The canned HTTP response returned for a mocked route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResponseSpec {
    /// HTTP status code to return (e.g. 200, 201, 404).
    pub status: u16,

    /// JSON body to return. Can be any JSON value: object, array,
    /// string, number, boolean or null.
    pub body: Value,
}
