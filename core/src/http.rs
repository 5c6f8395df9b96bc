//! HTTP request/response types at the transport seam.
//!
//! # Design
//! These types describe one round trip as plain data. `RestClient` builds
//! `HttpRequest` values and classifies `HttpResponse` values; the `Transport`
//! implementation in between is the only place that touches the network, so
//! tests can substitute an in-memory transport and exercise every branch of
//! the client without a server.
//!
//! All fields use owned types (`String`, `Vec`) so values can be captured and
//! inspected by recording transports without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}

/// An HTTP request described as plain data.
///
/// `url` is the full destination URL supplied by the caller; there is no
/// base-URL joining in this client.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// The body is fully buffered by the transport before this value exists, so
/// a connection cut mid-body surfaces as a transport error rather than a
/// partial decode.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
