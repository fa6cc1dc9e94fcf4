//! HTTP adapter for the posts API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, Url};
use vidz_api_types::{CreatePostRequest, TagResponse};

use crate::application::ports::{ApiError, PostsApi, TagsApi};
use crate::domain::tags::Tag;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base: Url,
    bearer: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base: directory_url(base_url),
            bearer: None,
        })
    }

    /// Attach `token` to catalog reads. Post creation always uses the token
    /// it is handed.
    #[must_use]
    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    pub fn user_agent() -> &'static str {
        concat!("vidz-share/", env!("CARGO_PKG_VERSION"))
    }

    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(ApiError::Url)
    }

    fn authorize(req: RequestBuilder, token: &str) -> Result<RequestBuilder, ApiError> {
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ApiError::Credential(e.to_string()))?;
        Ok(req.header(AUTHORIZATION, value))
    }

    async fn ensure_success(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl PostsApi for ApiClient {
    async fn create_post(
        &self,
        token: &str,
        request: &CreatePostRequest,
    ) -> Result<(), ApiError> {
        let url = self.url("posts")?;
        let req = Self::authorize(self.client.post(url), token)?.json(request);
        let resp = req.send().await?;
        Self::ensure_success(resp).await?;
        Ok(())
    }
}

#[async_trait]
impl TagsApi for ApiClient {
    async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        let url = self.url("tags")?;
        let mut req = self.client.get(url);
        if let Some(token) = self.bearer.as_deref() {
            req = Self::authorize(req, token)?;
        }

        let resp = Self::ensure_success(req.send().await?).await?;
        let bytes = resp.bytes().await?;
        let tags: Vec<TagResponse> =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(tags.into_iter().map(Tag::from).collect())
    }
}

/// Treat the configured base as a directory so relative joins append to its
/// path instead of replacing the last segment.
fn directory_url(base: &Url) -> Url {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}
