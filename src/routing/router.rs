//! Route lookup and navigation.
//!
//! # Responsibilities
//! - Resolve a path against the table (first structural match wins)
//! - Capture path parameters and compute per-route props
//! - Load the matched components through the module cache
//!
//! # Design Decisions
//! - Immutable after construction (shared without locks)
//! - Resolution never fails: unmatched paths land on the wildcard route
//! - Resolution never loads components; only `navigate` does

use std::collections::BTreeMap;
use std::sync::Arc;

use futures_util::future::try_join_all;
use serde::Serialize;

use crate::routing::matcher::split_path;
use crate::routing::route::{join_path, Route, RouteTable};
use crate::view::{LoadError, ModuleCache, ViewModule};

/// Properties forwarded to a component, keyed by parameter name.
pub type Props = BTreeMap<String, String>;

/// A resolved path: the matched route chain and captured parameters.
///
/// Only [`Router::resolve`] builds one, so the chain is never empty.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    path: String,
    matched: Vec<&'a Route>,
    params: Vec<(&'a str, String)>,
    view: &'a Route,
}

impl<'a> RouteMatch<'a> {
    /// Normalized request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Matched routes, outermost layout first.
    pub fn matched(&self) -> &[&'a Route] {
        &self.matched
    }

    /// Captured parameters in match order.
    pub fn params(&self) -> &[(&'a str, String)] {
        &self.params
    }

    /// Get a parameter value by name.
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The innermost matched route, i.e. the page being shown.
    pub fn view(&self) -> &'a Route {
        self.view
    }

    /// Returns true if no declared route matched and the wildcard was used.
    pub fn is_fallback(&self) -> bool {
        self.view().is_wildcard()
    }

    /// All captured parameters as a map.
    pub fn params_map(&self) -> Props {
        self.params
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    /// Input properties for the route at `depth` in the matched chain.
    ///
    /// `None` unless that route forwards params as props.
    pub fn props_at(&self, depth: usize) -> Option<Props> {
        self.matched
            .get(depth)
            .filter(|route| route.props_from_params())
            .map(|_| self.params_map())
    }

    /// Input properties for the innermost view.
    pub fn view_props(&self) -> Option<Props> {
        self.props_at(self.matched.len().saturating_sub(1))
    }

    /// Owned, serializable form of this match.
    pub fn to_resolution(&self) -> Resolution {
        let mut parent = String::new();
        let views = self
            .matched
            .iter()
            .enumerate()
            .map(|(depth, route)| {
                parent = join_path(&parent, route.path());
                ResolvedView {
                    path: parent.clone(),
                    component: route.component().specifier().to_string(),
                    props: self.props_at(depth),
                }
            })
            .collect();

        Resolution {
            path: self.path.clone(),
            views,
            params: self.params_map(),
            fallback: self.is_fallback(),
        }
    }
}

/// One entry of a resolved route chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedView {
    /// Full path pattern of the route, e.g. `/monitor/:stratId`.
    pub path: String,
    /// Component specifier.
    pub component: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,
}

/// Serializable result of a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub path: String,
    pub views: Vec<ResolvedView>,
    pub params: Props,
    pub fallback: bool,
}

/// A completed navigation: the resolution plus the loaded modules, one per
/// matched route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    #[serde(flatten)]
    pub resolution: Resolution,
    pub modules: Vec<ViewModule>,
}

/// Resolver over an immutable route table.
#[derive(Debug, Clone)]
pub struct Router {
    table: Arc<RouteTable>,
    cache: ModuleCache,
}

impl Router {
    /// Freeze `table` for lookups.
    pub fn new(table: RouteTable) -> Self {
        Self {
            table: Arc::new(table),
            cache: ModuleCache::new(),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn cache(&self) -> &ModuleCache {
        &self.cache
    }

    /// Resolve `path` to a route chain.
    pub fn resolve<'a>(&'a self, path: &str) -> RouteMatch<'a> {
        let segments = split_path(path);
        let mut matched = Vec::new();
        let mut params = Vec::new();

        let view = if match_routes(self.table.routes(), &segments, &mut matched, &mut params) {
            matched.last().copied()
        } else {
            None
        };
        let view = match view {
            Some(view) => view,
            None => {
                let fallback = self.table.fallback();
                if let Some(pattern) = fallback.pattern() {
                    pattern.match_prefix(&segments, &mut params);
                }
                matched.push(fallback);
                fallback
            }
        };

        let route_match = RouteMatch {
            path: format!("/{}", segments.join("/")),
            matched,
            params,
            view,
        };

        if route_match.is_fallback() {
            tracing::warn!(path = %route_match.path, "No route matched, using fallback");
        } else {
            tracing::debug!(
                path = %route_match.path,
                view = route_match.view().component().specifier(),
                params = route_match.params.len(),
                "Route resolved"
            );
        }

        route_match
    }

    /// Resolve `path` and load every matched component.
    pub async fn navigate(&self, path: &str) -> Result<Navigation, LoadError> {
        let route_match = self.resolve(path);
        let loaded = try_join_all(
            route_match
                .matched
                .iter()
                .map(|route| self.cache.load(route.component())),
        )
        .await?;

        Ok(Navigation {
            resolution: route_match.to_resolution(),
            modules: loaded.iter().map(|module| (**module).clone()).collect(),
        })
    }
}

/// Depth-first, first-match-wins walk. On failure `matched` and `params` are
/// restored to their state on entry.
fn match_routes<'a>(
    routes: &'a [Route],
    segments: &[&str],
    matched: &mut Vec<&'a Route>,
    params: &mut Vec<(&'a str, String)>,
) -> bool {
    for route in routes {
        let mark = params.len();
        let Some(consumed) = route
            .pattern()
            .and_then(|pattern| pattern.match_prefix(segments, params))
        else {
            continue;
        };
        let rest = &segments[consumed..];
        matched.push(route);

        let found = if route.children().is_empty() {
            rest.is_empty()
        } else {
            match_routes(route.children(), rest, matched, params) || rest.is_empty()
        };
        if found {
            return true;
        }

        matched.pop();
        params.truncate(mark);
    }
    false
}
