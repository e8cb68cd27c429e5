//! Movizio endpoints used by the pages.

#[cfg(test)]
#[path = "movies_test.rs"]
mod movies_test;

use super::api::{ApiClient, ApiError};
use super::types::{AuthResponse, Credentials, GenreList, MediaType, Paged, Registration, TitleDetail, TitleSummary};

fn discover_endpoint(page: u32) -> String {
    format!("/movies/discover?page={}", page.max(1))
}

const GENRES_ENDPOINT: &str = "/genres";
const LOGIN_ENDPOINT: &str = "/auth/login";
const REGISTER_ENDPOINT: &str = "/auth/register";

fn title_detail_endpoint(media: MediaType, id: &str) -> String {
    match media {
        MediaType::Movie => format!("/movies/{id}"),
        MediaType::Tv => format!("/tv/{id}"),
    }
}

fn titles_by_genre_endpoint(genre_id: u64, media: MediaType) -> String {
    format!("/genres/{genre_id}/{}", media.as_str())
}

/// # Errors
///
/// Propagates the client's [`ApiError`].
pub async fn discover(api: &ApiClient, page: u32) -> Result<Paged<TitleSummary>, ApiError> {
    api.get_json(&discover_endpoint(page)).await
}

/// # Errors
///
/// Propagates the client's [`ApiError`].
pub async fn genres(api: &ApiClient) -> Result<GenreList, ApiError> {
    api.get_json(GENRES_ENDPOINT).await
}

/// # Errors
///
/// Propagates the client's [`ApiError`].
pub async fn titles_by_genre(
    api: &ApiClient,
    genre_id: u64,
    media: MediaType,
) -> Result<Paged<TitleSummary>, ApiError> {
    api.get_json(&titles_by_genre_endpoint(genre_id, media)).await
}

/// # Errors
///
/// Propagates the client's [`ApiError`].
pub async fn title_detail(api: &ApiClient, media: MediaType, id: &str) -> Result<TitleDetail, ApiError> {
    api.get_json(&title_detail_endpoint(media, id)).await
}

/// Exchange credentials for a session token.
///
/// # Errors
///
/// Propagates the client's [`ApiError`].
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<String, ApiError> {
    let response: AuthResponse = api.post_json(LOGIN_ENDPOINT, credentials).await?;
    Ok(response.token)
}

/// Create an account and return its session token.
///
/// # Errors
///
/// Propagates the client's [`ApiError`].
pub async fn register(api: &ApiClient, registration: &Registration) -> Result<String, ApiError> {
    let response: AuthResponse = api.post_json(REGISTER_ENDPOINT, registration).await?;
    Ok(response.token)
}
