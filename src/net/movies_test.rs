use super::*;

#[test]
fn discover_endpoint_clamps_page() {
    assert_eq!(discover_endpoint(3), "/movies/discover?page=3");
    assert_eq!(discover_endpoint(0), "/movies/discover?page=1");
}

#[test]
fn title_detail_endpoint_per_media_type() {
    assert_eq!(title_detail_endpoint(MediaType::Movie, "42"), "/movies/42");
    assert_eq!(title_detail_endpoint(MediaType::Tv, "1399"), "/tv/1399");
}

#[test]
fn titles_by_genre_endpoint_formats_expected_path() {
    assert_eq!(titles_by_genre_endpoint(28, MediaType::Movie), "/genres/28/movie");
}

#[test]
fn auth_endpoints() {
    assert_eq!(LOGIN_ENDPOINT, "/auth/login");
    assert_eq!(REGISTER_ENDPOINT, "/auth/register");
    assert_eq!(GENRES_ENDPOINT, "/genres");
}
