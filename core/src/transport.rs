//! Blocking HTTP executor behind an injectable trait.
//!
//! # Design
//! `RestClient` talks to the network only through `Transport`, so tests can
//! swap in an in-memory implementation and the production path stays a
//! plain `ureq::Agent` owned by the caller — there is no process-wide
//! client state. The agent is configured with `http_status_as_error(false)`
//! so 4xx/5xx responses come back as data; status interpretation belongs to
//! the client, not the transport.

use ureq::http;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round trip.
///
/// Implementations must fully buffer the response body and release the
/// underlying connection on every path, including errors.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// A shared reference to a transport is itself a transport, so a client can
/// borrow one the caller keeps inspecting (recording transports in tests).
impl<T: Transport> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        T::execute(self, request)
    }
}

/// Production `Transport` over a blocking `ureq::Agent`.
///
/// Redirect handling and connection reuse are whatever the agent defaults
/// to; this type does not override them.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Wrap a caller-configured agent. The agent should have
    /// `http_status_as_error` disabled, otherwise non-2xx responses surface
    /// as transport errors instead of `HttpError`.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let result = match (method, body) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(url.as_str());
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            (HttpMethod::Post, Some(body)) => {
                let mut builder = self.agent.post(url.as_str());
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.send(body.as_bytes())
            }
            (HttpMethod::Post, None) => self.agent.post(url.as_str()).send_empty(),
            // ureq has no convenience call for PATCH with a body, so the
            // request is built explicitly and handed to the agent.
            (HttpMethod::Patch, body) => {
                let mut builder = http::Request::builder()
                    .method(http::Method::PATCH)
                    .uri(url.as_str());
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                let req = builder
                    .body(body.unwrap_or_default())
                    .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
                self.agent.run(req)
            }
        };

        let mut response = result.map_err(|e| ApiError::TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::TransportError(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
