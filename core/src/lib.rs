//! Blocking JSON REST helper client for a posts API.
//!
//! # Overview
//! Three operations — `post_data`, `get_data`, `patch_data` — each perform a
//! single synchronous HTTP round trip against a caller-supplied URL and
//! decode the JSON response into a fixed-shape record. There is no retry,
//! caching, authentication, or timeout policy; every failure is returned to
//! the caller as an [`ApiError`].
//!
//! # Design
//! - `RestClient` owns an injectable [`Transport`]; the production
//!   implementation is [`UreqTransport`] over a blocking `ureq::Agent`.
//!   No process-wide client state.
//! - Success is `200 <= status < 300` exactly; failure statuses are never
//!   JSON-parsed and carry their numeric code in the error message.
//! - Response records decode leniently: missing fields become zero values,
//!   unknown fields are ignored.
//! - The response body is fully buffered before parsing and released on
//!   every path.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{get_data, patch_data, post_data, RestClient};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{GetResult, NewPost, PostResult};

/// Add two integers.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_table_driven() {
        let cases = [
            ("positive numbers", 2, 3, 5),
            ("zero values", 0, 0, 0),
            ("negative numbers", -1, 1, 0),
            ("large numbers", 1_000_000, 1_000_000, 2_000_000),
        ];
        for (name, a, b, expected) in cases {
            assert_eq!(add(a, b), expected, "{name}");
        }
    }
}
