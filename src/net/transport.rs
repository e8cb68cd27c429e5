//! Browser transport for prepared requests: `gloo-net` fetch with an
//! `AbortController` armed by a `gloo-timers` timeout.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use web_sys::AbortController;

use super::api::{ApiError, Method, PreparedRequest};

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

fn builder(request: &PreparedRequest) -> RequestBuilder {
    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    builder
}

pub(super) async fn send(request: &PreparedRequest, body: Option<String>) -> Result<Response, ApiError> {
    let controller = AbortController::new()
        .map_err(|_| ApiError::Network("failed to create abort controller".to_owned()))?;
    let signal = controller.signal();

    let builder = builder(request).abort_signal(Some(&signal));
    let built = match body {
        Some(payload) => builder.header("Content-Type", "application/json").body(payload),
        None => builder.build(),
    }
    .map_err(|err| ApiError::Serialization(format!("failed to build request: {err}")))?;

    let timed_out = Rc::new(Cell::new(false));
    let flag = timed_out.clone();
    let millis = u32::try_from(request.timeout.as_millis()).unwrap_or(u32::MAX);
    let timer = Timeout::new(millis, move || {
        flag.set(true);
        controller.abort();
    });

    let result = built.send().await;
    drop(timer);

    match result {
        Ok(response) => Ok(response),
        Err(_) if timed_out.get() => Err(ApiError::Timeout(request.timeout)),
        Err(err) => Err(ApiError::Network(err.to_string())),
    }
}

async fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = if text.trim().is_empty() {
        response.status_text()
    } else {
        text.trim().chars().take(MAX_ERROR_CHARS).collect()
    };
    Err(ApiError::Http { status, message })
}

pub(super) async fn json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(&response).await?;
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Parse(err.to_string()))
}
