//! Route declarations and the route table.
//!
//! # Responsibilities
//! - Declare routes (path, deferred component, children, props flag)
//! - Compile each path pattern once, when the route is declared
//! - Refuse tables that break the table invariants
//!
//! # Design Decisions
//! - A `RouteTable` only exists in validated form; it has no mutators
//! - Every violation is reported, not just the first
//! - Config-declared routes bind their components through a `ModuleRegistry`

use serde::Serialize;
use thiserror::Error;

use crate::config::RouteConfig;
use crate::routing::matcher::{PathPattern, PatternError, WILDCARD};
use crate::routing::validation::{validate_routes, RouteError};
use crate::view::{ComponentRef, ModuleRegistry};

/// A binding from a path pattern to a deferred view component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    path: String,
    component: ComponentRef,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Route>,
    props_from_params: bool,
    #[serde(skip)]
    pattern: Result<PathPattern, PatternError>,
}

impl Route {
    /// Declare a route. Children and props are added with the builder methods.
    ///
    /// A malformed path is accepted here and rejected when the route is put
    /// into a [`RouteTable`].
    pub fn new(path: impl Into<String>, component: ComponentRef) -> Self {
        let path: String = path.into();
        let pattern = PathPattern::parse(&path);
        Self {
            path,
            component,
            children: Vec::new(),
            props_from_params: false,
            pattern,
        }
    }

    /// Declare the catch-all route.
    pub fn wildcard(component: ComponentRef) -> Self {
        Self::new(WILDCARD, component)
    }

    /// Nest `children` under this route. Their paths are relative to this one.
    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }

    /// Forward matched path parameters to the component as input properties.
    pub fn with_props(mut self, props_from_params: bool) -> Self {
        self.props_from_params = props_from_params;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn component(&self) -> &ComponentRef {
        &self.component
    }

    pub fn children(&self) -> &[Route] {
        &self.children
    }

    pub fn props_from_params(&self) -> bool {
        self.props_from_params
    }

    pub fn is_wildcard(&self) -> bool {
        self.path == WILDCARD
    }

    /// Compiled pattern, or `None` if the path is malformed.
    pub fn pattern(&self) -> Option<&PathPattern> {
        self.pattern.as_ref().ok()
    }

    pub(crate) fn pattern_error(&self) -> Option<&PatternError> {
        self.pattern.as_ref().err()
    }

    fn from_config(
        config: &RouteConfig,
        registry: &ModuleRegistry,
        parent: &str,
        errors: &mut Vec<RouteError>,
    ) -> Self {
        let full_path = join_path(parent, &config.path);
        let component = match registry.get(&config.component) {
            Some(component) => component,
            None => {
                errors.push(RouteError::UnknownComponent {
                    path: full_path.clone(),
                    specifier: config.component.clone(),
                });
                ComponentRef::missing(config.component.clone())
            }
        };

        let children = config
            .children
            .iter()
            .map(|child| Self::from_config(child, registry, &full_path, errors))
            .collect();

        Self::new(config.path.clone(), component)
            .with_children(children)
            .with_props(config.props)
    }
}

/// Error returned when a route table cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("route table rejected: {}", join_errors(.errors))]
pub struct TableError {
    pub errors: Vec<RouteError>,
}

fn join_errors(errors: &[RouteError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// The ordered, validated set of top-level routes.
///
/// Order is significant: the first structural match wins and the wildcard is
/// always the last entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from route declarations.
    pub fn new(routes: Vec<Route>) -> Result<Self, TableError> {
        let errors = validate_routes(&routes);

        if !errors.is_empty() {
            return Err(TableError { errors });
        }

        Ok(Self { routes })
    }

    /// Build a table from configuration, resolving components in `registry`.
    pub fn from_config(
        configs: &[RouteConfig],
        registry: &ModuleRegistry,
    ) -> Result<Self, TableError> {
        let mut errors = Vec::new();
        let routes = configs
            .iter()
            .map(|config| Route::from_config(config, registry, "", &mut errors))
            .collect();

        match Self::new(routes) {
            Ok(table) if errors.is_empty() => Ok(table),
            Ok(_) => Err(TableError { errors }),
            Err(table_error) => {
                errors.extend(table_error.errors);
                Err(TableError { errors })
            }
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Always false: a valid table holds at least the wildcard.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    /// The trailing wildcard route.
    pub fn fallback(&self) -> &Route {
        &self.routes[self.routes.len() - 1]
    }

    /// Every route in depth-first declaration order, paired with its full
    /// path pattern.
    pub fn flatten(&self) -> Vec<(String, &Route)> {
        let mut out = Vec::new();
        flatten_into(&self.routes, "", &mut out);
        out
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// Join a parent path and a relative child path.
///
/// `join_path("/", "build") == "/build"`, `join_path("/", "") == "/"`.
pub fn join_path(parent: &str, child: &str) -> String {
    if parent.is_empty() || child == WILDCARD {
        return child.to_string();
    }
    let child = child.trim_matches('/');
    if child.is_empty() {
        return parent.to_string();
    }
    format!("{}/{}", parent.trim_end_matches('/'), child)
}

fn flatten_into<'a>(routes: &'a [Route], parent: &str, out: &mut Vec<(String, &'a Route)>) {
    for route in routes {
        let full_path = join_path(parent, &route.path);
        out.push((full_path.clone(), route));
        flatten_into(&route.children, &full_path, out);
    }
}
