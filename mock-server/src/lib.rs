use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct CreatePost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

pub struct AppState {
    posts: RwLock<HashMap<u64, Post>>,
    next_id: AtomicU64,
}

pub type SharedState = Arc<AppState>;

/// Router with one seeded post (id 1) and a created-id counter starting at
/// 101, matching the public test API this server stands in for.
pub fn app() -> Router {
    let mut posts = HashMap::new();
    posts.insert(
        1,
        Post {
            id: 1,
            user_id: 1,
            title: "first post".to_string(),
            body: "first body".to_string(),
        },
    );
    let state: SharedState = Arc::new(AppState {
        posts: RwLock::new(posts),
        next_id: AtomicU64::new(101),
    });
    Router::new()
        .route("/posts", post(create_post))
        .route("/posts/{id}", get(get_post).patch(patch_post))
        .route("/status/{code}", any(status_probe))
        .route("/malformed", any(malformed_probe))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_post(
    State(state): State<SharedState>,
    Json(input): Json<CreatePost>,
) -> (StatusCode, Json<Post>) {
    let id = state.next_id.fetch_add(1, Ordering::Relaxed);
    let post = Post {
        id,
        user_id: 1,
        title: input.title,
        body: input.body,
    };
    state.posts.write().await.insert(id, post.clone());
    (StatusCode::CREATED, Json(post))
}

async fn get_post(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Json<Post>, StatusCode> {
    let posts = state.posts.read().await;
    posts.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Applies `title` and `body` keys from a flat string map; other keys are
/// accepted and ignored.
async fn patch_post(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(updates): Json<HashMap<String, String>>,
) -> Result<Json<Post>, StatusCode> {
    let mut posts = state.posts.write().await;
    let post = posts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = updates.get("title") {
        post.title = title.clone();
    }
    if let Some(body) = updates.get("body") {
        post.body = body.clone();
    }
    Ok(Json(post.clone()))
}

/// Replies with the requested status code and a decodable post body, so
/// clients can probe status classification over real HTTP.
async fn status_probe(Path(code): Path<u16>) -> Result<(StatusCode, Json<Post>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((
        status,
        Json(Post {
            id: 1,
            user_id: 1,
            title: "status probe".to_string(),
            body: "status probe body".to_string(),
        }),
    ))
}

/// Replies 200 with a truncated JSON body.
async fn malformed_probe() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], "{\"id\": 1, \"title\":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_user_id_as_camel_case() {
        let post = Post {
            id: 1,
            user_id: 7,
            title: "Test".to_string(),
            body: "Body".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["userId"], 7);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["body"], "Body");
    }

    #[test]
    fn post_roundtrips_through_json() {
        let post = Post {
            id: 101,
            user_id: 1,
            title: "Roundtrip".to_string(),
            body: "Still here".to_string(),
        };
        let json = serde_json::to_string(&post).unwrap();
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, post.id);
        assert_eq!(back.user_id, post.user_id);
        assert_eq!(back.title, post.title);
        assert_eq!(back.body, post.body);
    }

    #[test]
    fn create_post_defaults_missing_fields() {
        let input: CreatePost = serde_json::from_str("{}").unwrap();
        assert_eq!(input.title, "");
        assert_eq!(input.body, "");
    }

    #[test]
    fn create_post_accepts_title_and_body() {
        let input: CreatePost =
            serde_json::from_str(r#"{"title":"a title","body":"a body"}"#).unwrap();
        assert_eq!(input.title, "a title");
        assert_eq!(input.body, "a body");
    }
}
