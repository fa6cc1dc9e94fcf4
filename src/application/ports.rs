//! Seams between the share form and the outside world.

use async_trait::async_trait;
use thiserror::Error;
use vidz_api_types::CreatePostRequest;

use crate::domain::routes::Route;
use crate::domain::tags::Tag;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid bearer token: {0}")]
    Credential(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Create a post on behalf of the holder of `token`. Any successful
    /// response counts; its body is not read.
    async fn create_post(&self, token: &str, request: &CreatePostRequest)
    -> Result<(), ApiError>;
}

#[async_trait]
pub trait TagsApi: Send + Sync {
    async fn list_tags(&self) -> Result<Vec<Tag>, ApiError>;
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
