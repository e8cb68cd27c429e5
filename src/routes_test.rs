use super::*;

// =============================================================
// Table contents
// =============================================================

#[test]
fn table_lists_routes_in_declaration_order() {
    let paths: Vec<&str> = routes().iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "/",
            "/login",
            "/about",
            "/register",
            "/discover",
            "/genres",
            "/movie/:id",
            "/tv/:id",
            "/detail/:type/:id",
        ]
    );
}

#[test]
fn route_names_are_unique() {
    let mut names: Vec<&str> = routes().iter().map(|r| r.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), routes().len());
}

#[test]
fn requires_auth_metadata_matches_route_surface() {
    let protected: Vec<&str> = routes().iter().filter(|r| r.requires_auth).map(|r| r.path).collect();
    assert_eq!(
        protected,
        vec!["/about", "/discover", "/genres", "/movie/:id", "/tv/:id", "/detail/:type/:id"]
    );
}

#[test]
fn find_by_name_returns_entry() {
    let entry = find_by_name("TvDetail").expect("route");
    assert_eq!(entry.path, "/tv/:id");
    assert_eq!(entry.page, Page::TvDetail);
    assert!(find_by_name("Movies").is_none());
}

// =============================================================
// Matching
// =============================================================

#[test]
fn match_path_static_route() {
    let m = match_path("/genres").expect("match");
    assert_eq!(m.entry.name, "Genres");
    assert!(m.params.is_empty());
}

#[test]
fn match_path_root() {
    assert_eq!(match_path("/").expect("match").entry.page, Page::Home);
}

#[test]
fn match_path_captures_params() {
    let m = match_path("/detail/tv/1399").expect("match");
    assert_eq!(m.entry.page, Page::GenresDetail);
    assert_eq!(m.param("type"), Some("tv"));
    assert_eq!(m.param("id"), Some("1399"));
}

#[test]
fn match_path_ignores_query_fragment_and_trailing_slash() {
    assert_eq!(match_path("/movie/42?lang=en").expect("match").param("id"), Some("42"));
    assert_eq!(match_path("/discover#top").expect("match").entry.name, "Discover");
    assert_eq!(match_path("/about/").expect("match").entry.name, "About");
}

#[test]
fn match_path_rejects_unknown_and_partial_paths() {
    assert!(match_path("/movies").is_none());
    assert!(match_path("/movie").is_none());
    assert!(match_path("/movie/42/cast").is_none());
    assert!(match_path("about").is_none());
}

// =============================================================
// Named-route hrefs
// =============================================================

#[test]
fn href_fills_params() {
    let entry = find_by_name("GenresDetail").expect("route");
    assert_eq!(entry.href(&[("id", "7"), ("type", "movie")]), Ok("/detail/movie/7".to_owned()));
}

#[test]
fn href_for_static_routes() {
    assert_eq!(find_by_name("Home").expect("route").href(&[]), Ok("/".to_owned()));
    assert_eq!(find_by_name("Signin").expect("route").href(&[]), Ok("/login".to_owned()));
}

#[test]
fn href_reports_missing_param() {
    let entry = find_by_name("MovieDetail").expect("route");
    assert_eq!(
        entry.href(&[("id", "")]),
        Err(RouteError::MissingParam { route: "MovieDetail", param: "id".to_owned() })
    );
}

#[test]
fn param_names_in_pattern_order() {
    let entry = find_by_name("GenresDetail").expect("route");
    assert_eq!(entry.param_names().collect::<Vec<_>>(), vec!["type", "id"]);
}
