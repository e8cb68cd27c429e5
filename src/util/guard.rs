//! Navigation guard run before every route transition.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every location change is re-checked independently: if the target is
//! protected and the session holds no token, navigation is replaced with a
//! redirect to `/login`. Nothing else is decided here.
//!
//! The router outlet calls `resolve_outlet` while rendering, so a blocked page
//! is never built and never issues its requests. `NavigationGuard` performs
//! the redirect itself.
//!
//! This is a UX-only gate. It reads a client-side token and provides no
//! access control; the API enforces that.
//!
//! POLICIES
//! ========
//! `LiteralList` compares the target against `PROTECTED_PATHS` verbatim, so
//! parameterized routes (`/movie/42`) are never gated even though their route
//! entries carry `requires_auth`. `RouteMetadata` instead consults
//! `requires_auth` on the matched route. `LiteralList` is the default.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{Page, match_path, strip_query_and_fragment};
use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";

/// Literal paths gated by the `LiteralList` policy.
pub const PROTECTED_PATHS: &[&str] = &["/discover", "/genres", "/about"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(&'static str),
}

/// Which source of truth decides whether a path is protected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardPolicy {
    #[default]
    LiteralList,
    RouteMetadata,
}

impl GuardPolicy {
    /// Parse `literal` / `metadata` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "literal" | "literal-list" => Some(Self::LiteralList),
            "metadata" | "route-metadata" => Some(Self::RouteMetadata),
            _ => None,
        }
    }

    pub fn is_protected(self, path: &str) -> bool {
        let path = strip_query_and_fragment(path);
        match self {
            Self::LiteralList => PROTECTED_PATHS.contains(&path),
            Self::RouteMetadata => match_path(path).is_some_and(|m| m.entry.requires_auth),
        }
    }
}

/// Decide whether navigation to `target` proceeds.
pub fn decide(target: &str, has_token: bool, policy: GuardPolicy) -> NavigationDecision {
    if !has_token && policy.is_protected(target) {
        NavigationDecision::Redirect(LOGIN_PATH)
    } else {
        NavigationDecision::Proceed
    }
}

/// What the router outlet shows for a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outlet {
    Page(Page),
    /// Protected and no token: render nothing while the redirect happens.
    Blocked,
    NotFound,
}

/// Resolve `path` against the route table and the guard in one step, before
/// any page is built.
pub fn resolve_outlet(path: &str, has_token: bool, policy: GuardPolicy) -> Outlet {
    let Some(matched) = match_path(path) else {
        return Outlet::NotFound;
    };
    match decide(path, has_token, policy) {
        NavigationDecision::Proceed => Outlet::Page(matched.entry.page),
        NavigationDecision::Redirect(_) => Outlet::Blocked,
    }
}

/// Apply [`decide`] to one navigation, calling `navigate` on redirect.
pub fn guard_navigation<F>(
    session: &Session,
    policy: GuardPolicy,
    target: &str,
    navigate: &F,
) -> NavigationDecision
where
    F: Fn(&str, NavigateOptions),
{
    let decision = decide(target, session.has_token(), policy);
    match decision {
        NavigationDecision::Proceed => log::debug!("navigation to {target} allowed"),
        NavigationDecision::Redirect(to) => {
            log::info!("navigation to {target} requires a token; redirecting to {to}");
            navigate(
                to,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    }
    decision
}

/// Re-run the guard whenever `pathname` changes and redirect when needed.
pub fn install_navigation_guard<F>(
    session: Session,
    policy: GuardPolicy,
    pathname: Signal<String>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let target = pathname.get();
        guard_navigation(&session, policy, &target, &navigate);
    });
}

/// Mounts the navigation guard. Must be rendered inside `<Router>`.
#[component]
pub fn NavigationGuard(policy: GuardPolicy) -> impl IntoView {
    let session = crate::state::session::use_session();
    let location = leptos_router::hooks::use_location();
    let navigate = leptos_router::hooks::use_navigate();
    install_navigation_guard(session, policy, location.pathname.into(), navigate);
}
