//! Route table validation.
//!
//! # Responsibilities
//! - Exactly one wildcard, in last position, never nested
//! - Unique sibling paths
//! - Absolute top-level paths, relative child paths
//! - Parameter names unique along each root-to-leaf chain
//! - `props_from_params` only where a parameter exists to forward
//!
//! # Design Decisions
//! - Returns all violations, not just the first
//! - Pure function over declared routes
//! - A malformed pattern is reported once; parameter checks skip it and its
//!   descendants, whose bound parameters are unknown

use std::collections::HashSet;

use thiserror::Error;

use crate::routing::matcher::PatternError;
use crate::routing::route::{join_path, Route};

/// Label used in messages for the top level of the table.
const ROOT: &str = "<root>";

/// A violated route table invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route table has no wildcard (`*`) route")]
    MissingWildcard,

    #[error("route table declares {count} wildcard routes, expected exactly one")]
    DuplicateWildcard { count: usize },

    #[error("wildcard route at position {position} must be the last entry")]
    WildcardNotLast { position: usize },

    #[error("wildcard route cannot be nested under `{parent}`")]
    NestedWildcard { parent: String },

    #[error("wildcard route cannot have children")]
    WildcardWithChildren,

    #[error("top-level route `{path}` must start with `/`")]
    RelativeRootPath { path: String },

    #[error("child route `{path}` under `{parent}` must be relative")]
    AbsoluteChildPath { parent: String, path: String },

    #[error("duplicate route path `{path}` under `{parent}`")]
    DuplicatePath { parent: String, path: String },

    #[error("parameter `{name}` in `{path}` is already bound by a parent route")]
    DuplicateParam { path: String, name: String },

    #[error("route `{path}` forwards params as props but binds no path parameter")]
    PropsWithoutParams { path: String },

    #[error("invalid path pattern `{path}`: {source}")]
    InvalidPattern { path: String, source: PatternError },

    #[error("route `{path}` references unknown component `{specifier}`")]
    UnknownComponent { path: String, specifier: String },
}

/// Check compiled top-level routes against the table invariants.
pub fn validate_routes(routes: &[Route]) -> Vec<RouteError> {
    let mut errors = Vec::new();

    let wildcards: Vec<usize> = routes
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_wildcard())
        .map(|(i, _)| i)
        .collect();

    match wildcards.as_slice() {
        [] => errors.push(RouteError::MissingWildcard),
        [position] if *position + 1 != routes.len() => {
            errors.push(RouteError::WildcardNotLast {
                position: *position,
            });
        }
        [_] => {}
        many => errors.push(RouteError::DuplicateWildcard { count: many.len() }),
    }

    check_level(routes, None, Some(&[]), &mut errors);
    errors
}

fn check_level(
    routes: &[Route],
    parent: Option<&str>,
    bound_params: Option<&[&str]>,
    errors: &mut Vec<RouteError>,
) {
    let mut seen = HashSet::new();

    for route in routes {
        let full_path = join_path(parent.unwrap_or(""), route.path());
        let parent_label = parent.unwrap_or(ROOT).to_string();

        if route.is_wildcard() {
            if let Some(parent) = parent {
                errors.push(RouteError::NestedWildcard {
                    parent: parent.to_string(),
                });
            }
            if !route.children().is_empty() {
                errors.push(RouteError::WildcardWithChildren);
            }
            continue;
        }

        match parent {
            None if !route.path().starts_with('/') => {
                errors.push(RouteError::RelativeRootPath {
                    path: route.path().to_string(),
                });
            }
            Some(parent) if route.path().starts_with('/') => {
                errors.push(RouteError::AbsoluteChildPath {
                    parent: parent.to_string(),
                    path: route.path().to_string(),
                });
            }
            _ => {}
        }

        let key = route.path().trim_matches('/').to_ascii_lowercase();
        if !seen.insert(key) {
            errors.push(RouteError::DuplicatePath {
                parent: parent_label,
                path: route.path().to_string(),
            });
        }

        if let Some(source) = route.pattern_error() {
            errors.push(RouteError::InvalidPattern {
                path: full_path.clone(),
                source: source.clone(),
            });
        }

        let chain = match (bound_params, route.pattern()) {
            (Some(bound), Some(pattern)) => {
                let mut chain: Vec<&str> = bound.to_vec();
                for name in pattern.param_names() {
                    if chain.contains(&name) {
                        errors.push(RouteError::DuplicateParam {
                            path: full_path.clone(),
                            name: name.to_string(),
                        });
                    } else {
                        chain.push(name);
                    }
                }

                if route.props_from_params() && chain.is_empty() {
                    errors.push(RouteError::PropsWithoutParams {
                        path: full_path.clone(),
                    });
                }
                Some(chain)
            }
            _ => None,
        };

        check_level(route.children(), Some(&full_path), chain.as_deref(), errors);
    }
}

#[cfg(test)]
mod tests {
    use crate::routing::route::{Route, RouteTable};
    use crate::routing::validation::RouteError;
    use crate::view::ComponentRef;

    fn page(specifier: &str) -> ComponentRef {
        ComponentRef::import(specifier)
    }

    fn errors_of(routes: Vec<Route>) -> Vec<RouteError> {
        RouteTable::new(routes).unwrap_err().errors
    }

    #[test]
    fn test_missing_wildcard() {
        let errors = errors_of(vec![Route::new("/", page("pages/index"))]);
        assert_eq!(errors, vec![RouteError::MissingWildcard]);
    }

    #[test]
    fn test_wildcard_not_last() {
        let errors = errors_of(vec![
            Route::wildcard(page("pages/404")),
            Route::new("/", page("pages/index")),
        ]);
        assert_eq!(errors, vec![RouteError::WildcardNotLast { position: 0 }]);
    }

    #[test]
    fn test_duplicate_wildcard() {
        let errors = errors_of(vec![
            Route::wildcard(page("pages/404")),
            Route::wildcard(page("pages/404")),
        ]);
        assert_eq!(errors, vec![RouteError::DuplicateWildcard { count: 2 }]);
    }

    #[test]
    fn test_nested_wildcard() {
        let errors = errors_of(vec![
            Route::new("/", page("layouts/default"))
                .with_children(vec![Route::wildcard(page("pages/404"))]),
            Route::wildcard(page("pages/404")),
        ]);
        assert_eq!(
            errors,
            vec![RouteError::NestedWildcard { parent: "/".into() }]
        );
    }

    #[test]
    fn test_wildcard_with_children() {
        let errors = errors_of(vec![Route::wildcard(page("pages/404"))
            .with_children(vec![Route::new("", page("pages/index"))])]);
        assert_eq!(errors, vec![RouteError::WildcardWithChildren]);
    }

    #[test]
    fn test_path_shape() {
        let errors = errors_of(vec![
            Route::new("build", page("pages/buildStrategy")),
            Route::new("/", page("layouts/default"))
                .with_children(vec![Route::new("/monitor", page("pages/monitor"))]),
            Route::wildcard(page("pages/404")),
        ]);
        assert_eq!(
            errors,
            vec![
                RouteError::RelativeRootPath {
                    path: "build".into()
                },
                RouteError::AbsoluteChildPath {
                    parent: "/".into(),
                    path: "/monitor".into()
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_sibling_paths() {
        let errors = errors_of(vec![
            Route::new("/", page("layouts/default")).with_children(vec![
                Route::new("build", page("pages/buildStrategy")),
                Route::new("Build/", page("pages/buildStrategy")),
            ]),
            Route::wildcard(page("pages/404")),
        ]);
        assert_eq!(
            errors,
            vec![RouteError::DuplicatePath {
                parent: "/".into(),
                path: "Build/".into()
            }]
        );
    }

    #[test]
    fn test_same_path_at_different_levels_is_allowed() {
        let table = RouteTable::new(vec![
            Route::new("/", page("layouts/default"))
                .with_children(vec![Route::new("", page("pages/index"))]),
            Route::wildcard(page("pages/404")),
        ]);
        assert!(table.is_ok());
    }

    #[test]
    fn test_duplicate_param_along_chain() {
        let errors = errors_of(vec![
            Route::new("/strategy/:id", page("layouts/default"))
                .with_children(vec![Route::new("run/:id", page("pages/monitor"))]),
            Route::wildcard(page("pages/404")),
        ]);
        assert_eq!(
            errors,
            vec![RouteError::DuplicateParam {
                path: "/strategy/:id/run/:id".into(),
                name: "id".into()
            }]
        );
    }

    #[test]
    fn test_props_without_params() {
        let errors = errors_of(vec![
            Route::new("/", page("layouts/default")).with_children(vec![
                Route::new("build", page("pages/buildStrategy")).with_props(true)
            ]),
            Route::wildcard(page("pages/404")),
        ]);
        assert_eq!(
            errors,
            vec![RouteError::PropsWithoutParams {
                path: "/build".into()
            }]
        );
    }

    #[test]
    fn test_props_may_forward_parent_params() {
        let table = RouteTable::new(vec![
            Route::new("/strategy/:stratId", page("layouts/default"))
                .with_children(vec![Route::new("", page("pages/monitor")).with_props(true)]),
            Route::wildcard(page("pages/404")),
        ]);
        assert!(table.is_ok());
    }

    #[test]
    fn test_reports_every_violation() {
        let errors = errors_of(vec![
            Route::new("build", page("pages/buildStrategy")).with_props(true),
            Route::new("/", page("layouts/default")),
        ]);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], RouteError::MissingWildcard);
    }
}
