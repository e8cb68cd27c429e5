//! Load status for page data fetched from the API.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use crate::net::api::ApiError;

/// Data owned by a page plus its request status.
#[derive(Clone, Debug, PartialEq)]
pub struct Remote<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> Remote<T> {
    /// Mark a request as in flight. Previous data stays visible.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record the outcome of the request started by [`Remote::begin`].
    pub fn finish(&mut self, result: Result<T, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => self.error = Some(error_message(&err)),
        }
    }
}

/// User-facing text for a failed request.
pub fn error_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { status: 401 | 403, .. } => "Please sign in again to continue.".to_owned(),
        ApiError::Http { status: 404, .. } => "Not found.".to_owned(),
        ApiError::Timeout(_) => "The server took too long to respond. Try again.".to_owned(),
        other => other.to_string(),
    }
}
