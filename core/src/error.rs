//! Error types for the posts API client.
//!
//! # Design
//! Variants mirror the order checks happen in: request construction
//! (`InvalidUrl`, `SerializationError`), then the round trip itself
//! (`TransportError`), then status classification (`HttpError`), then
//! decoding (`DeserializationError`). `HttpError` keeps the raw body for
//! debugging but the client never parses it — the numeric status is the
//! whole signal.

use std::fmt;

/// Errors returned by `RestClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The destination URL did not parse, or is not http/https. No request
    /// was sent.
    InvalidUrl(String),

    /// The request payload could not be serialized to JSON. No request was
    /// sent.
    SerializationError(String),

    /// The round trip failed before a response arrived (DNS, connect, TLS,
    /// I/O mid-transfer).
    TransportError(String),

    /// The server responded with a status outside [200, 300). The body is
    /// carried raw and unparsed.
    HttpError { status: u16, body: String },

    /// The status was successful but the body could not be deserialized
    /// into the expected shape.
    DeserializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidUrl(msg) => write!(f, "invalid url: {msg}"),
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::TransportError(msg) => write!(f, "transport error: {msg}"),
            ApiError::HttpError { status, body } => {
                write!(f, "API request failed with status {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
