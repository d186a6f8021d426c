//! The compiled route table.
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Insertion order preserved: earlier routes take precedence
//! - Explicit match outcome rather than silent default

use serde_json::Value;

/// One `/`-delimited component of a compiled path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Must match the exact text, case-sensitively.
    Literal(String),
    /// Matches any single non-empty segment, capturing it under the name.
    Param(String),
}

impl PathSegment {
    /// Whether two segments have the same shape for conflict detection.
    ///
    /// Literal text is compared; param names are ignored, so
    /// `/a/{x}` and `/a/{y}` collide.
    pub fn same_shape(&self, other: &PathSegment) -> bool {
        match (self, other) {
            (PathSegment::Literal(a), PathSegment::Literal(b)) => a == b,
            (PathSegment::Param(_), PathSegment::Param(_)) => true,
            _ => false,
        }
    }
}

/// A route compiled from a [`RouteSpec`](crate::config::RouteSpec).
///
/// Owned exclusively by the [`RouteTable`]; never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledRoute {
    /// Uppercased HTTP method, kept as a string so custom verbs work.
    pub method: String,
    /// Segmented path pattern.
    pub segments: Vec<PathSegment>,
    /// Status code to respond with.
    pub status: u16,
    /// JSON body to respond with.
    pub body: Value,
}

impl CompiledRoute {
    /// Render the pattern back to a path template, for logs and errors.
    pub fn pattern(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                PathSegment::Literal(text) => out.push_str(text),
                PathSegment::Param(name) => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            }
        }
        out
    }
}

/// The immutable, queryable collection of compiled routes.
///
/// Built exactly once at startup by [`compile`](crate::routing::compile),
/// then shared read-only (via `Arc`) by every request handler. No locks
/// are needed because no writer exists after startup.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    pub(crate) fn new(routes: Vec<CompiledRoute>) -> Self {
        Self { routes }
    }

    /// Routes in insertion (configuration) order.
    pub fn routes(&self) -> &[CompiledRoute] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_ignores_param_names_but_not_literal_text() {
        let x = PathSegment::Param("x".into());
        let y = PathSegment::Param("y".into());
        let a = PathSegment::Literal("a".into());
        let b = PathSegment::Literal("b".into());
        assert!(x.same_shape(&y));
        assert!(a.same_shape(&a.clone()));
        assert!(!a.same_shape(&b));
        assert!(!a.same_shape(&x));
    }

    #[test]
    fn pattern_round_trips_template_text() {
        let route = CompiledRoute {
            method: "GET".into(),
            segments: vec![
                PathSegment::Literal("api".into()),
                PathSegment::Literal("users".into()),
                PathSegment::Param("id".into()),
            ],
            status: 200,
            body: serde_json::Value::Null,
        };
        assert_eq!(route.pattern(), "/api/users/{id}");
    }
}
