use std::sync::{Arc, Mutex};

use super::*;
use crate::routes::routes;
use crate::state::session::{MemoryStorage, StorageError, TokenStore};

struct BrokenStore;

impl TokenStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Access("SecurityError".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

type Calls = Arc<Mutex<Vec<(String, bool)>>>;

fn recorder() -> (Calls, impl Fn(&str, NavigateOptions) + Clone + 'static) {
    let calls: Calls = Arc::default();
    let recorded = calls.clone();
    let navigate = move |to: &str, options: NavigateOptions| {
        recorded.lock().unwrap().push((to.to_owned(), options.replace));
    };
    (calls, navigate)
}

const UNPROTECTED: &[&str] = &["/", "/login", "/register", "/movie/42", "/tv/1399", "/detail/movie/7", "/nope"];

// =============================================================
// Literal-list policy (default)
// =============================================================

#[test]
fn default_policy_is_literal_list() {
    assert_eq!(GuardPolicy::default(), GuardPolicy::LiteralList);
}

#[test]
fn unprotected_paths_proceed_regardless_of_token() {
    for path in UNPROTECTED {
        assert_eq!(decide(path, false, GuardPolicy::LiteralList), NavigationDecision::Proceed, "{path}");
        assert_eq!(decide(path, true, GuardPolicy::LiteralList), NavigationDecision::Proceed, "{path}");
    }
}

#[test]
fn protected_paths_proceed_only_with_token() {
    for path in PROTECTED_PATHS {
        assert_eq!(decide(path, true, GuardPolicy::LiteralList), NavigationDecision::Proceed, "{path}");
        assert_eq!(
            decide(path, false, GuardPolicy::LiteralList),
            NavigationDecision::Redirect(LOGIN_PATH),
            "{path}"
        );
    }
}

#[test]
fn genres_without_token_redirects_to_login() {
    assert_eq!(decide("/genres", false, GuardPolicy::default()), NavigationDecision::Redirect("/login"));
}

#[test]
fn about_with_token_proceeds() {
    assert_eq!(decide("/about", true, GuardPolicy::default()), NavigationDecision::Proceed);
}

#[test]
fn parameterized_route_is_not_gated_by_literal_list() {
    // `/movie/:id` carries requires_auth but is not in the literal list.
    assert_eq!(decide("/movie/42", false, GuardPolicy::default()), NavigationDecision::Proceed);
}

#[test]
fn literal_list_ignores_query_string() {
    assert_eq!(
        decide("/discover?page=2", false, GuardPolicy::LiteralList),
        NavigationDecision::Redirect(LOGIN_PATH)
    );
}

#[test]
fn literal_list_is_exact_match() {
    assert_eq!(decide("/genres/", false, GuardPolicy::LiteralList), NavigationDecision::Proceed);
    assert_eq!(decide("/GENRES", false, GuardPolicy::LiteralList), NavigationDecision::Proceed);
}

// =============================================================
// Route-metadata policy
// =============================================================

#[test]
fn metadata_policy_gates_parameterized_routes() {
    for path in ["/movie/42", "/tv/1399", "/detail/tv/5", "/genres", "/about", "/discover"] {
        assert_eq!(
            decide(path, false, GuardPolicy::RouteMetadata),
            NavigationDecision::Redirect(LOGIN_PATH),
            "{path}"
        );
        assert_eq!(decide(path, true, GuardPolicy::RouteMetadata), NavigationDecision::Proceed, "{path}");
    }
}

#[test]
fn metadata_policy_leaves_public_and_unknown_paths_open() {
    for path in ["/", "/login", "/register", "/nope"] {
        assert_eq!(decide(path, false, GuardPolicy::RouteMetadata), NavigationDecision::Proceed, "{path}");
    }
}

#[test]
fn literal_list_is_subset_of_route_metadata() {
    for path in PROTECTED_PATHS {
        let entry = routes().iter().find(|r| r.path == *path).expect("route for protected path");
        assert!(entry.requires_auth, "{path}");
    }
}

#[test]
fn parse_policy_values() {
    assert_eq!(GuardPolicy::parse("literal"), Some(GuardPolicy::LiteralList));
    assert_eq!(GuardPolicy::parse(" Metadata "), Some(GuardPolicy::RouteMetadata));
    assert_eq!(GuardPolicy::parse("route-metadata"), Some(GuardPolicy::RouteMetadata));
    assert_eq!(GuardPolicy::parse("strict"), None);
}

// =============================================================
// Outlet resolution
// =============================================================

#[test]
fn outlet_blocks_protected_page_without_token() {
    assert_eq!(resolve_outlet("/discover", false, GuardPolicy::LiteralList), Outlet::Blocked);
    assert_eq!(resolve_outlet("/genres", false, GuardPolicy::LiteralList), Outlet::Blocked);
}

#[test]
fn outlet_renders_protected_page_with_token() {
    assert_eq!(
        resolve_outlet("/discover", true, GuardPolicy::LiteralList),
        Outlet::Page(Page::Discover)
    );
}

#[test]
fn outlet_renders_parameterized_route_under_literal_list() {
    assert_eq!(
        resolve_outlet("/movie/42", false, GuardPolicy::LiteralList),
        Outlet::Page(Page::MovieDetail)
    );
    assert_eq!(resolve_outlet("/movie/42", false, GuardPolicy::RouteMetadata), Outlet::Blocked);
}

#[test]
fn outlet_reports_unknown_paths() {
    assert_eq!(resolve_outlet("/movies", true, GuardPolicy::LiteralList), Outlet::NotFound);
}

#[test]
fn outlet_renders_every_table_route() {
    for entry in routes() {
        let params: Vec<(&str, &str)> = entry
            .param_names()
            .map(|name| (name, if name == "type" { "movie" } else { "7" }))
            .collect();
        let path = entry.href(&params).unwrap();
        for policy in [GuardPolicy::LiteralList, GuardPolicy::RouteMetadata] {
            assert_eq!(resolve_outlet(&path, true, policy), Outlet::Page(entry.page), "{path}");
        }
    }
}

// =============================================================
// Single navigation
// =============================================================

#[test]
fn guard_navigation_redirects_with_replace() {
    let (calls, navigate) = recorder();
    let decision = guard_navigation(&Session::in_memory(), GuardPolicy::LiteralList, "/about", &navigate);
    assert_eq!(decision, NavigationDecision::Redirect(LOGIN_PATH));
    assert_eq!(*calls.lock().unwrap(), vec![("/login".to_owned(), true)]);
}

#[test]
fn guard_navigation_with_token_does_not_navigate() {
    let (calls, navigate) = recorder();
    let session = Session::new(MemoryStorage::with_token("abc123"));
    let decision = guard_navigation(&session, GuardPolicy::LiteralList, "/about", &navigate);
    assert_eq!(decision, NavigationDecision::Proceed);
    assert!(calls.lock().unwrap().is_empty());
}

// =============================================================
// Reactive guard
// =============================================================

#[cfg(not(target_arch = "wasm32"))]
mod reactive {
    use any_spawner::Executor;
    use reactive_graph::owner::Owner;
    use tokio::task::LocalSet;

    use super::*;

    async fn run_guard(session: Session, paths: &[&str]) -> Vec<(String, bool)> {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        let (calls, navigate) = recorder();
        let pathname = RwSignal::new(paths[0].to_owned());
        install_navigation_guard(session, GuardPolicy::LiteralList, pathname.into(), navigate);
        Executor::tick().await;
        for path in &paths[1..] {
            pathname.set((*path).to_owned());
            Executor::tick().await;
        }

        let recorded = calls.lock().unwrap().clone();
        drop(owner);
        recorded
    }

    #[tokio::test]
    async fn guard_reruns_on_each_location_change() {
        LocalSet::new()
            .run_until(async {
                let calls = run_guard(Session::in_memory(), &["/", "/genres", "/movie/42"]).await;
                assert_eq!(calls, vec![("/login".to_owned(), true)]);
            })
            .await;
    }

    #[tokio::test]
    async fn guard_treats_storage_failure_as_no_token() {
        LocalSet::new()
            .run_until(async {
                let calls = run_guard(Session::new(BrokenStore), &["/about"]).await;
                assert_eq!(calls, vec![("/login".to_owned(), true)]);
            })
            .await;
    }

    #[tokio::test]
    async fn guard_with_token_never_redirects() {
        LocalSet::new()
            .run_until(async {
                let session = Session::new(MemoryStorage::with_token("abc123"));
                let calls = run_guard(session, &["/", "/genres", "/about", "/discover"]).await;
                assert!(calls.is_empty());
            })
            .await;
    }
}
