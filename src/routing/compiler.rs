//! Route compilation.
//!
//! # Responsibilities
//! - Split path templates into literal and parameter segments
//! - Normalize methods (trim + uppercase)
//! - Reject malformed templates and conflicting route pairs
//!
//! # Design Decisions
//! - Compilation is deterministic: same spec list, same table or error
//! - Conflict detection compares shapes (param names ignored), so
//!   `GET /a/{x}` and `GET /a/{y}` are rejected as duplicates
//! - Distinct-shape overlaps (`/users/{id}` vs `/users/me`) are NOT
//!   conflicts; they resolve by registration order at match time
//! - Methods stay strings, not an enum, so custom verbs pass through

use std::collections::HashSet;

use crate::config::RouteSpec;
use crate::routing::table::{CompiledRoute, PathSegment, RouteTable};

/// Error type for route compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("route `{path}`: empty `{{}}` parameter")]
    EmptyParam { path: String },

    #[error("route `{path}`: unterminated `{{` in segment `{segment}`")]
    UnterminatedParam { path: String, segment: String },

    #[error("route `{path}`: duplicate parameter name `{name}`")]
    DuplicateParamName { path: String, name: String },

    #[error("route `{path}`: method must not be empty")]
    EmptyMethod { path: String },

    #[error("duplicate route: `{method} {pattern}` is registered twice")]
    DuplicateRoute { method: String, pattern: String },
}

/// Compile validated route specs into an immutable [`RouteTable`].
///
/// Fails fast on the first malformed template or conflicting pair;
/// nothing is served until the whole set compiles.
pub fn compile(specs: &[RouteSpec]) -> Result<RouteTable, CompileError> {
    let mut routes: Vec<CompiledRoute> = Vec::with_capacity(specs.len());

    for spec in specs {
        let method = spec.method.trim().to_uppercase();
        if method.is_empty() {
            return Err(CompileError::EmptyMethod {
                path: spec.path.clone(),
            });
        }

        let segments = parse_segments(&spec.path)?;

        let mut seen = HashSet::new();
        for segment in &segments {
            if let PathSegment::Param(name) = segment {
                if !seen.insert(name.clone()) {
                    return Err(CompileError::DuplicateParamName {
                        path: spec.path.clone(),
                        name: name.clone(),
                    });
                }
            }
        }

        let candidate = CompiledRoute {
            method,
            segments,
            status: spec.response.status,
            body: spec.response.body.clone(),
        };

        for existing in &routes {
            if existing.method == candidate.method && same_shape(existing, &candidate) {
                return Err(CompileError::DuplicateRoute {
                    pattern: candidate.pattern(),
                    method: candidate.method,
                });
            }
        }

        routes.push(candidate);
    }

    Ok(RouteTable::new(routes))
}

/// Split a path template on `/` into segments.
///
/// Empty segments from leading/trailing slashes are dropped, so `/a/b`
/// and `/a/b/` compile identically. A segment wrapped in `{`...`}` with
/// non-empty interior becomes a parameter; anything else is a literal.
fn parse_segments(path: &str) -> Result<Vec<PathSegment>, CompileError> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|raw| {
            if let Some(rest) = raw.strip_prefix('{') {
                match rest.strip_suffix('}') {
                    Some("") => Err(CompileError::EmptyParam {
                        path: path.to_string(),
                    }),
                    Some(name) => Ok(PathSegment::Param(name.to_string())),
                    None => Err(CompileError::UnterminatedParam {
                        path: path.to_string(),
                        segment: raw.to_string(),
                    }),
                }
            } else {
                Ok(PathSegment::Literal(raw.to_string()))
            }
        })
        .collect()
}

fn same_shape(a: &CompiledRoute, b: &CompiledRoute) -> bool {
    a.segments.len() == b.segments.len()
        && a.segments
            .iter()
            .zip(&b.segments)
            .all(|(x, y)| x.same_shape(y))
}
