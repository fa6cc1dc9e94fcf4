//! Wire shapes exchanged with the vidz posts API.
//!
//! Field names follow the backend's snake_case JSON contract, so a rename on
//! the Rust side never silently changes what goes over the wire.

use serde::{Deserialize, Serialize};

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub video_url: String,
    pub description: String,
    pub user_id: i64,
    pub instructor_name: String,
    pub tags: Vec<i64>,
}

/// One entry of `GET /tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
}
