//! REST helper operations over an injectable transport.
//!
//! # Design
//! `RestClient` owns a `Transport` and nothing else; there is no retry,
//! caching, or shared mutable state, so concurrent callers need no
//! coordination. Every operation funnels through one private routine that
//! validates the URL, executes a single round trip, classifies the status,
//! and decodes the body on success. Success is `200 <= status < 300`
//! exactly — redirects that reach the client count as failures, and a
//! failure status is never JSON-parsed.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use ureq::http::Uri;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::transport::{Transport, UreqTransport};
use crate::types::{GetResult, NewPost, PostResult};

/// Client for a JSON posts API. Each operation is one blocking round trip
/// against a caller-supplied URL.
#[derive(Debug, Clone)]
pub struct RestClient<T = UreqTransport> {
    transport: T,
}

impl RestClient<UreqTransport> {
    pub fn new() -> Self {
        Self {
            transport: UreqTransport::new(),
        }
    }
}

impl Default for RestClient<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> RestClient<T> {
    /// Build a client over a caller-supplied transport. Tests use this to
    /// substitute an in-memory transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// POST `{"title": ..., "body": ...}` to `url` and decode the response.
    pub fn post_data(&self, url: &str, title: &str, body: &str) -> Result<PostResult, ApiError> {
        let payload = NewPost {
            title: title.to_string(),
            body: body.to_string(),
        };
        let body = serde_json::to_string(&payload)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        self.dispatch(HttpMethod::Post, url, Some(body))
    }

    /// GET `url` and decode the response. Sends no body and no custom
    /// headers.
    pub fn get_data(&self, url: &str) -> Result<GetResult, ApiError> {
        self.dispatch(HttpMethod::Get, url, None)
    }

    /// PATCH `url` with `updates` serialized verbatim as a flat JSON
    /// object. The response shares the POST shape.
    pub fn patch_data(
        &self,
        url: &str,
        updates: &HashMap<String, String>,
    ) -> Result<PostResult, ApiError> {
        let body = serde_json::to_string(updates)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        self.dispatch(HttpMethod::Patch, url, Some(body))
    }

    /// One round trip: validate the URL, execute, classify the status,
    /// decode on success.
    fn dispatch<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        validate_url(url)?;
        let headers = if body.is_some() {
            vec![("content-type".to_string(), "application/json".to_string())]
        } else {
            Vec::new()
        };
        let response = self.transport.execute(HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body,
        })?;
        if response.status < 200 || response.status >= 300 {
            return Err(ApiError::HttpError {
                status: response.status,
                body: response.body,
            });
        }
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Reject anything that is not an absolute http/https URL before the
/// transport runs.
fn validate_url(url: &str) -> Result<(), ApiError> {
    let uri: Uri = url
        .parse()
        .map_err(|e| ApiError::InvalidUrl(format!("{e}: {url}")))?;
    match uri.scheme_str() {
        Some("http") | Some("https") => Ok(()),
        _ => Err(ApiError::InvalidUrl(format!(
            "missing or unsupported scheme: {url}"
        ))),
    }
}

/// POST with a fresh default client. See [`RestClient::post_data`].
pub fn post_data(url: &str, title: &str, body: &str) -> Result<PostResult, ApiError> {
    RestClient::new().post_data(url, title, body)
}

/// GET with a fresh default client. See [`RestClient::get_data`].
pub fn get_data(url: &str) -> Result<GetResult, ApiError> {
    RestClient::new().get_data(url)
}

/// PATCH with a fresh default client. See [`RestClient::patch_data`].
pub fn patch_data(url: &str, updates: &HashMap<String, String>) -> Result<PostResult, ApiError> {
    RestClient::new().patch_data(url, updates)
}
