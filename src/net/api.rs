//! HTTP client preconfigured with the API base URL and timeout.
//!
//! Every request is prepared against the current session first: if a token is
//! available it is attached as `Authorization: Bearer <token>`, otherwise the
//! request goes out without the header. A failure reading the token rejects
//! the request before anything is dispatched.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: preparation works, dispatch returns
//! [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! No retry, no backoff, no response interceptor. Expired tokens are not
//! detected or refreshed here; callers see the HTTP status.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;
use std::time::Duration;

use leptos::prelude::{provide_context, use_context};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::AppConfig;
use crate::state::session::{Session, StorageError};

pub const AUTHORIZATION: &str = "Authorization";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("response error: {0}")]
    Parse(String),
    #[error("request error: {0}")]
    Serialization(String),
    #[error("HTTP requests are only available in the browser")]
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A request ready for dispatch: absolute URL, headers, and timeout.
#[derive(Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

impl PreparedRequest {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for PreparedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case(AUTHORIZATION) {
                    (name.as_str(), "<redacted>")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("PreparedRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Join `base` and `path` with exactly one `/`. Absolute `http(s)://` paths
/// are returned unchanged.
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    let base = base.trim().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_owned()
    } else {
        format!("{base}/{path}")
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Session) -> Self {
        Self {
            base_url: config.api_base_url.trim().to_owned(),
            timeout: config.timeout,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve the URL and attach the bearer token if one is available.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] with the session's error unchanged if the
    /// token cannot be read.
    pub fn prepare(&self, method: Method, path: &str) -> Result<PreparedRequest, ApiError> {
        let mut headers = Vec::new();
        if let Some(token) = self.session.token()? {
            headers.push((AUTHORIZATION.to_owned(), bearer(&token)));
        }
        Ok(PreparedRequest {
            method,
            url: join_url(&self.base_url, path),
            headers,
            timeout: self.timeout,
        })
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the token cannot be read, the request fails
    /// or times out, the status is not 2xx, or the body does not decode.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.prepare(Method::Get, path)?;
        log::debug!("{} {}", request.method.as_str(), request.url);
        #[cfg(feature = "csr")]
        {
            let response = super::transport::send(&request, None).await?;
            super::transport::json_response(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get_json`], plus [`ApiError::Serialization`] if
    /// `body` cannot be encoded.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.prepare(Method::Post, path)?;
        let payload = serde_json::to_string(body)
            .map_err(|err| ApiError::Serialization(format!("failed to encode request: {err}")))?;
        log::debug!("{} {}", request.method.as_str(), request.url);
        #[cfg(feature = "csr")]
        {
            let response = super::transport::send(&request, Some(payload)).await?;
            super::transport::json_response(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, payload);
            Err(ApiError::Unavailable)
        }
    }
}

/// Make `client` available to the component tree.
pub fn provide_api(client: ApiClient) {
    provide_context(client);
}

/// API client from context, or one built from the loaded config and the
/// context session if none was provided.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| {
        ApiClient::new(&AppConfig::load(), crate::state::session::use_session())
    })
}
