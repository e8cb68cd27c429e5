//! Static route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is the single list of navigable pages. The router outlet in
//! `app` picks the page by `match_path`, detail pages read their parameters
//! from the same match, and the `RouteMetadata` guard policy reads the
//! `requires_auth` flag from the matched entry.
//!
//! The default guard policy does NOT consult `requires_auth`; it compares
//! against a literal path list instead (see `util::guard`).

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::BTreeMap;

use thiserror::Error;

/// Page component rendered for a route. Opaque to the table; `app` maps it
/// to a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Signin,
    About,
    Signup,
    Discover,
    Genres,
    MovieDetail,
    TvDetail,
    GenresDetail,
}

/// One route: path pattern, unique name, page, and auth metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern; `:name` segments are parameters.
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
    pub requires_auth: bool,
}

/// Every route, in match order.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: "/", name: "Home", page: Page::Home, requires_auth: false },
    RouteEntry { path: "/login", name: "Signin", page: Page::Signin, requires_auth: false },
    RouteEntry { path: "/about", name: "About", page: Page::About, requires_auth: true },
    RouteEntry { path: "/register", name: "Signup", page: Page::Signup, requires_auth: false },
    RouteEntry { path: "/discover", name: "Discover", page: Page::Discover, requires_auth: true },
    RouteEntry { path: "/genres", name: "Genres", page: Page::Genres, requires_auth: true },
    RouteEntry { path: "/movie/:id", name: "MovieDetail", page: Page::MovieDetail, requires_auth: true },
    RouteEntry { path: "/tv/:id", name: "TvDetail", page: Page::TvDetail, requires_auth: true },
    RouteEntry {
        path: "/detail/:type/:id",
        name: "GenresDetail",
        page: Page::GenresDetail,
        requires_auth: true,
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("route `{route}` is missing parameter `{param}`")]
    MissingParam { route: &'static str, param: String },
}

/// A route entry matched against a concrete path, with captured parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub entry: &'static RouteEntry,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

pub fn routes() -> &'static [RouteEntry] {
    ROUTES
}

pub fn find_by_name(name: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|entry| entry.name == name)
}

/// Find the first route whose pattern matches `path`.
///
/// Query string and fragment are ignored, and a single trailing slash is
/// tolerated (`/genres/` matches `/genres`).
pub fn match_path(path: &str) -> Option<RouteMatch> {
    let path = strip_query_and_fragment(path);
    ROUTES.iter().find_map(|entry| {
        entry.captures(path).map(|params| RouteMatch { entry, params })
    })
}

/// Drop everything from the first `?` or `#`.
pub fn strip_query_and_fragment(path: &str) -> &str {
    path.find(['?', '#']).map_or(path, |idx| &path[..idx])
}

fn segments(path: &str) -> Vec<&str> {
    path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect()
}

impl RouteEntry {
    /// Names of the `:param` segments, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter_map(|segment| segment.strip_prefix(':'))
    }

    fn captures(&self, path: &str) -> Option<BTreeMap<String, String>> {
        if !path.starts_with('/') {
            return None;
        }
        let pattern = segments(self.path);
        let actual = segments(path);
        if pattern.len() != actual.len() {
            return None;
        }
        let mut params = BTreeMap::new();
        for (expected, value) in pattern.iter().zip(actual) {
            match expected.strip_prefix(':') {
                Some(name) => {
                    params.insert(name.to_owned(), value.to_owned());
                }
                None if *expected == value => {}
                None => return None,
            }
        }
        Some(params)
    }

    /// Build a concrete path from this pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MissingParam`] if a `:param` segment has no
    /// non-empty value in `params`.
    pub fn href(&self, params: &[(&str, &str)]) -> Result<String, RouteError> {
        if self.path == "/" {
            return Ok("/".to_owned());
        }
        let mut out = String::new();
        for segment in segments(self.path) {
            out.push('/');
            match segment.strip_prefix(':') {
                Some(name) => {
                    let value = params
                        .iter()
                        .find(|(key, value)| *key == name && !value.is_empty())
                        .map(|(_, value)| *value)
                        .ok_or_else(|| RouteError::MissingParam {
                            route: self.name,
                            param: name.to_owned(),
                        })?;
                    out.push_str(value);
                }
                None => out.push_str(segment),
            }
        }
        Ok(out)
    }
}
