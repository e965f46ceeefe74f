//! Declarative client-side route table for the heroes views.
//!
//! # Design
//! The table is a fixed, ordered list of `{pattern, name, view}` records
//! built once and immutable afterwards; there is no dynamic registration.
//! Matching is delegated to `matchit`: exact segments take priority over
//! `{id}` captures, and a captured segment is exposed as a raw, untyped
//! string parameter. An unmatched path resolves to the catch-all
//! `not-found` view, so [`Router::resolve`] is total.

use std::fmt;

/// The view a matched route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    HeroList,
    HeroCreate,
    HeroDetail,
    HeroEdit,
    NotFound,
}

/// One record of the route table.
#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub name: &'static str,
    pub view: View,
}

/// The navigable routes, in declaration order.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        pattern: "/",
        name: "home",
        view: View::Home,
    },
    RouteEntry {
        pattern: "/heroes",
        name: "heroes",
        view: View::HeroList,
    },
    RouteEntry {
        pattern: "/heroes/create",
        name: "create-hero",
        view: View::HeroCreate,
    },
    RouteEntry {
        pattern: "/heroes/{id}",
        name: "hero-detail",
        view: View::HeroDetail,
    },
    RouteEntry {
        pattern: "/heroes/{id}/edit",
        name: "edit-hero",
        view: View::HeroEdit,
    },
];

/// Route name reported for unmatched paths.
pub const NOT_FOUND: &str = "not-found";

/// Parameters captured from the matched path.
///
/// Values are the raw path segments: no percent-decoding, no typing, no
/// validation. The view decides what to make of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    /// The value captured under `key`, if the matched pattern names it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome of resolving a navigated path: exactly one named view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: &'static str,
    pub view: View,
    pub params: RouteParams,
}

/// A pattern conflict found while building the route table.
#[derive(Debug)]
pub struct RouterError(matchit::InsertError);

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid route table: {}", self.0)
    }
}

impl std::error::Error for RouterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Path-based router over [`ROUTES`].
#[derive(Clone)]
pub struct Router {
    table: matchit::Router<usize>,
    base: String,
}

impl Router {
    /// Router rooted at `/`.
    pub fn new() -> Result<Self, RouterError> {
        Self::with_base("")
    }

    /// Router rooted at `base`, which is stripped from every navigated path
    /// before matching (path-based history with an externally supplied base,
    /// for example `/heroes-app`).
    pub fn with_base(base: &str) -> Result<Self, RouterError> {
        let mut table = matchit::Router::new();
        for (index, route) in ROUTES.iter().enumerate() {
            table.insert(route.pattern, index).map_err(RouterError)?;
        }
        Ok(Self {
            table,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a navigated path to exactly one view.
    ///
    /// Paths outside the configured base, and paths matching no pattern,
    /// resolve to the `not-found` view.
    pub fn resolve(&self, path: &str) -> RouteMatch {
        let Some(path) = self.strip_base(path) else {
            return not_found();
        };
        match self.table.at(path) {
            Ok(matched) => {
                let route = &ROUTES[*matched.value];
                let params = RouteParams(
                    matched
                        .params
                        .iter()
                        .map(|(key, value)| (key.to_string(), value.to_string()))
                        .collect(),
                );
                RouteMatch {
                    name: route.name,
                    view: route.view,
                    params,
                }
            }
            Err(_) => not_found(),
        }
    }

    fn strip_base<'p>(&self, path: &'p str) -> Option<&'p str> {
        if self.base.is_empty() {
            return Some(if path.is_empty() { "/" } else { path });
        }
        match path.strip_prefix(self.base.as_str()) {
            Some("") => Some("/"),
            Some(rest) if rest.starts_with('/') => Some(rest),
            _ => None,
        }
    }
}

fn not_found() -> RouteMatch {
    RouteMatch {
        name: NOT_FOUND,
        view: View::NotFound,
        params: RouteParams::default(),
    }
}
