//! Wire DTOs for the posts API.
//!
//! # Design
//! Response records decode leniently: every field carries a default, so a
//! missing key becomes `0` or `""` instead of a decode error, and unknown
//! keys are ignored. The `error` field is only ever populated by the server
//! embedding a message in an otherwise-decodable body; the client never sets
//! it and never consults it for success classification.

use serde::{Deserialize, Serialize};

/// Response shape shared by the POST and PATCH operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostResult {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub error: String,
}

/// Response shape for the GET operation.
///
/// `user_id` is a foreign identifier echoed from the server; this client
/// performs no referential checks on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetResult {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
    pub error: String,
}

/// Request payload for the POST operation, serialized as
/// `{"title": ..., "body": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}
