//! Route matching logic.
//!
//! # Responsibilities
//! - Normalize the request path (trailing-slash-insensitive)
//! - Find the first route whose path and method both match
//! - Distinguish "wrong method" from "no such path"
//!
//! # Design Decisions
//! - Path matching is case-sensitive; methods are uppercased
//! - First match wins, in registration order
//! - Pure function over the immutable table: no I/O, no locks, safe to
//!   call from any number of tasks concurrently
//! - No regex, to guarantee O(routes × segments) matching

use std::collections::{BTreeMap, BTreeSet};

use crate::routing::table::{CompiledRoute, PathSegment, RouteTable};

/// The result of matching one request against the table.
///
/// Constructed fresh per request and dropped when the response is
/// written.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome<'t> {
    /// A route matched; `params` holds the captured path parameters.
    Matched {
        route: &'t CompiledRoute,
        params: BTreeMap<String, String>,
    },
    /// The path exists but not for this method.
    MethodNotAllowed { allowed: BTreeSet<String> },
    /// No route matches the path at all.
    NotFound,
}

/// Match a request's method and path against the table.
///
/// Scans routes in registration order. A route matches when the segment
/// counts are equal, every literal segment compares equal, and every
/// parameter segment captures the corresponding request segment. If some
/// route's path matches but none with the right method, the outcome is
/// [`MatchOutcome::MethodNotAllowed`] carrying every method registered
/// for that path.
pub fn match_request<'t>(table: &'t RouteTable, method: &str, path: &str) -> MatchOutcome<'t> {
    let request_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let method = method.trim().to_uppercase();

    let mut allowed = BTreeSet::new();

    for route in table.routes() {
        let Some(params) = match_path(route, &request_segments) else {
            continue;
        };
        if route.method == method {
            return MatchOutcome::Matched { route, params };
        }
        allowed.insert(route.method.clone());
    }

    if allowed.is_empty() {
        MatchOutcome::NotFound
    } else {
        MatchOutcome::MethodNotAllowed { allowed }
    }
}

/// Path-only match: returns captured params on success.
fn match_path(route: &CompiledRoute, request: &[&str]) -> Option<BTreeMap<String, String>> {
    if route.segments.len() != request.len() {
        return None;
    }

    let mut params = BTreeMap::new();
    for (pattern, value) in route.segments.iter().zip(request) {
        match pattern {
            PathSegment::Literal(text) => {
                if text != value {
                    return None;
                }
            }
            PathSegment::Param(name) => {
                params.insert(name.clone(), (*value).to_string());
            }
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ResponseSpec, RouteSpec};
    use crate::routing::compiler::compile;
    use serde_json::json;

    fn spec(method: &str, path: &str, status: u16) -> RouteSpec {
        RouteSpec {
            method: method.into(),
            path: path.into(),
            response: ResponseSpec {
                status,
                body: json!(null),
            },
        }
    }

    fn table(specs: &[RouteSpec]) -> RouteTable {
        compile(specs).unwrap()
    }

    #[test]
    fn literal_route_matches_exactly() {
        let table = table(&[spec("GET", "/api/users", 200)]);
        let outcome = match_request(&table, "GET", "/api/users");
        assert!(matches!(
            outcome,
            MatchOutcome::Matched { route, ref params } if route.status == 200 && params.is_empty()
        ));
    }

    #[test]
    fn matching_is_trailing_slash_insensitive() {
        let table = table(&[spec("GET", "/api/users", 200)]);
        let with = match_request(&table, "GET", "/api/users/");
        let without = match_request(&table, "GET", "/api/users");
        assert_eq!(with, without);
        assert!(matches!(with, MatchOutcome::Matched { .. }));
    }

    #[test]
    fn method_comparison_is_case_insensitive() {
        let table = table(&[spec("GET", "/api/users", 200)]);
        assert!(matches!(
            match_request(&table, "get", "/api/users"),
            MatchOutcome::Matched { .. }
        ));
    }

    #[test]
    fn path_comparison_is_case_sensitive() {
        let table = table(&[spec("GET", "/api/users", 200)]);
        assert_eq!(
            match_request(&table, "GET", "/API/users"),
            MatchOutcome::NotFound
        );
    }

    #[test]
    fn params_are_captured() {
        let table = table(&[spec("PATCH", "/api/users/{id}", 200)]);
        let outcome = match_request(&table, "PATCH", "/api/users/123");
        match outcome {
            MatchOutcome::Matched { params, .. } => {
                assert_eq!(params.get("id").map(String::as_str), Some("123"));
            }
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn wrong_segment_count_is_not_found() {
        let table = table(&[spec("PATCH", "/api/users/{id}", 200)]);
        assert_eq!(
            match_request(&table, "PATCH", "/api/users"),
            MatchOutcome::NotFound
        );
        assert_eq!(
            match_request(&table, "PATCH", "/api/users/1/extra"),
            MatchOutcome::NotFound
        );
    }

    #[test]
    fn wrong_method_reports_allowed_set() {
        let table = table(&[
            spec("GET", "/api/users", 200),
            spec("POST", "/api/users", 201),
        ]);
        let outcome = match_request(&table, "DELETE", "/api/users");
        match outcome {
            MatchOutcome::MethodNotAllowed { allowed } => {
                let allowed: Vec<_> = allowed.into_iter().collect();
                assert_eq!(allowed, vec!["GET".to_string(), "POST".to_string()]);
            }
            other => panic!("expected 405 outcome, got {other:?}"),
        }
    }

    #[test]
    fn single_method_allowed_set() {
        let table = table(&[spec("GET", "/api/users", 200)]);
        let outcome = match_request(&table, "POST", "/api/users");
        assert_eq!(
            outcome,
            MatchOutcome::MethodNotAllowed {
                allowed: BTreeSet::from(["GET".to_string()]),
            }
        );
    }

    #[test]
    fn registration_order_breaks_overlap_ties() {
        // /users/me satisfies both shapes; the earlier registration wins.
        let first_literal = table(&[spec("GET", "/users/me", 200), spec("GET", "/users/{id}", 201)]);
        match match_request(&first_literal, "GET", "/users/me") {
            MatchOutcome::Matched { route, params } => {
                assert_eq!(route.status, 200);
                assert!(params.is_empty());
            }
            other => panic!("expected a match, got {other:?}"),
        }

        let first_param = table(&[spec("GET", "/users/{id}", 201), spec("GET", "/users/me", 200)]);
        match match_request(&first_param, "GET", "/users/me") {
            MatchOutcome::Matched { route, params } => {
                assert_eq!(route.status, 201);
                assert_eq!(params.get("id").map(String::as_str), Some("me"));
            }
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn repeated_calls_yield_identical_outcomes() {
        let table = table(&[
            spec("GET", "/users/{id}", 200),
            spec("POST", "/users", 201),
        ]);
        let first = match_request(&table, "GET", "/users/42");
        for _ in 0..10 {
            assert_eq!(match_request(&table, "GET", "/users/42"), first);
        }
    }

    #[test]
    fn root_path_matches_root_route() {
        let table = table(&[spec("GET", "/", 204)]);
        assert!(matches!(
            match_request(&table, "GET", "/"),
            MatchOutcome::Matched { route, .. } if route.status == 204
        ));
    }

    #[test]
    fn empty_table_is_always_not_found() {
        let table = RouteTable::default();
        assert_eq!(match_request(&table, "GET", "/"), MatchOutcome::NotFound);
        assert_eq!(
            match_request(&table, "GET", "/anything"),
            MatchOutcome::NotFound
        );
    }
}
