//! JSON request helper
//!
//! Thin wrapper over reqwest: serialize an optional payload, send it, decode
//! the JSON reply. Every failure collapses into one error kind; callers decide
//! whether to surface it.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// The only way a request can fail
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("request failed")]
    RequestFailed,
}

/// Send `payload` (if any) as JSON and decode a JSON response.
///
/// Non-2xx statuses, transport errors and undecodable bodies all yield
/// [`RequestError::RequestFailed`]. No retries, no timeout.
pub async fn request<T, B>(
    client: &Client,
    method: Method,
    url: &str,
    payload: Option<&B>,
) -> Result<T, RequestError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let mut builder = client
        .request(method.clone(), url)
        .header(CONTENT_TYPE, "application/json");

    if let Some(payload) = payload {
        let body = serde_json::to_vec(payload).map_err(|e| {
            log::debug!("Failed to serialize payload for {} {}: {}", method, url, e);
            RequestError::RequestFailed
        })?;
        builder = builder.body(body);
    }

    let response = builder.send().await.map_err(|e| {
        log::debug!("{} {} transport error: {}", method, url, e);
        RequestError::RequestFailed
    })?;

    let status = response.status();
    if !status.is_success() {
        log::debug!("{} {} returned {}", method, url, status);
        return Err(RequestError::RequestFailed);
    }

    response.json::<T>().await.map_err(|e| {
        log::debug!("{} {} returned undecodable body: {}", method, url, e);
        RequestError::RequestFailed
    })
}

/// `request` without a body
pub async fn get<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, RequestError> {
    request::<T, ()>(client, Method::GET, url, None).await
}

#[cfg(test)]
#[path = "network_tests.rs"]
mod network_tests;
