//! Response dispatch.
//!
//! # Responsibilities
//! - Turn a `MatchOutcome` into exactly one HTTP response
//! - Serialize the configured body with `Content-Type: application/json`
//! - Render the 404/405 fallbacks, with `Allow` on 405
//!
//! # Design Decisions
//! - 404/405 are expected outcomes, logged at debug level only
//! - A body that fails to serialize becomes a request-scoped 500; it is
//!   logged and never crashes the process
//! - Captured path parameters are not substituted into the body; the
//!   configured body is returned verbatim

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::routing::MatchOutcome;

const JSON: (header::HeaderName, &str) = (header::CONTENT_TYPE, "application/json");

/// Convert a match outcome into the response to write.
pub fn dispatch(outcome: MatchOutcome<'_>) -> Response {
    match outcome {
        MatchOutcome::Matched { route, params } => {
            tracing::debug!(
                method = %route.method,
                pattern = %route.pattern(),
                ?params,
                "route matched"
            );
            let body = match serde_json::to_vec(&route.body) {
                Ok(bytes) => bytes,
                Err(error) => {
                    tracing::error!(%error, pattern = %route.pattern(), "failed to serialize response body");
                    return internal_error();
                }
            };
            let Ok(status) = StatusCode::from_u16(route.status) else {
                // Unreachable for a validated config; recover anyway.
                tracing::error!(status = route.status, "configured status is not a valid HTTP status");
                return internal_error();
            };
            (status, [JSON], body).into_response()
        }
        MatchOutcome::MethodNotAllowed { allowed } => {
            let allow = allowed.into_iter().collect::<Vec<_>>().join(", ");
            tracing::debug!(allow = %allow, "method not allowed");
            (
                StatusCode::METHOD_NOT_ALLOWED,
                [
                    (header::ALLOW, allow),
                    (header::CONTENT_TYPE, "application/json".to_string()),
                ],
                r#"{"error":"method not allowed"}"#,
            )
                .into_response()
        }
        MatchOutcome::NotFound => {
            tracing::debug!("no route matched");
            (
                StatusCode::NOT_FOUND,
                [JSON],
                r#"{"error":"not found"}"#,
            )
                .into_response()
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [JSON],
        r#"{"error":"internal serialization error"}"#,
    )
        .into_response()
}
