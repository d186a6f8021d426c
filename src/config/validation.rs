//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (port parses, status codes valid)
//! - Check per-route invariants (method non-empty, path shape)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: MockConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use crate::config::schema::MockConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("port `{0}` is not a valid TCP port")]
    InvalidPort(String),

    #[error("route #{index}: method must not be empty")]
    EmptyMethod { index: usize },

    #[error("route #{index}: path `{path}` must start with `/`")]
    PathMissingSlash { index: usize, path: String },

    #[error("route #{index}: status {status} is outside the valid range 100-599")]
    StatusOutOfRange { index: usize, status: u16 },
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &MockConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.port.trim().parse::<u16>() {
        Ok(0) | Err(_) => errors.push(ValidationError::InvalidPort(config.port.clone())),
        Ok(_) => {}
    }

    for (index, route) in config.routes.iter().enumerate() {
        if route.method.trim().is_empty() {
            errors.push(ValidationError::EmptyMethod { index });
        }
        if !route.path.starts_with('/') {
            errors.push(ValidationError::PathMissingSlash {
                index,
                path: route.path.clone(),
            });
        }
        let status = route.response.status;
        if !(100..=599).contains(&status) {
            errors.push(ValidationError::StatusOutOfRange { index, status });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
