//! Reqwest-based client for the portal REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::models::{Folder, Module, Post, User};
use super::provider::DataProvider;
use super::{ApiError, CreatePostArgs, UpdatePostArgs};
use crate::config::ApiConfig;

/// HTTP client for the portal API.
///
/// Wraps a shared `reqwest::Client` with the portal base URL and an
/// optional bearer token. Without a token the client still serves the
/// read-only endpoints; mutating calls will come back as auth errors.
#[derive(Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PortalClient {
    /// Create a new client from the `[api]` config section and an optional
    /// bearer token.
    pub fn new(config: &ApiConfig, token: Option<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Whether the client carries a bearer token.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = Self::check_status(builder).await?;
        response.json::<T>().await.map_err(|e| ApiError::InvalidData(e.to_string()))
    }

    async fn send_empty(&self, builder: reqwest::RequestBuilder) -> Result<(), ApiError> {
        Self::check_status(builder).await.map(|_| ())
    }

    async fn check_status(builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Auth(message)),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(message)),
            _ => Err(ApiError::Status {
                status: status.as_u16(),
                message,
            }),
        }
    }
}

#[async_trait]
impl DataProvider for PortalClient {
    async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.send_json(self.request(reqwest::Method::GET, "/posts")).await
    }

    async fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        self.send_json(self.request(reqwest::Method::GET, &format!("/posts/{}", id))).await
    }

    async fn create_post(&self, args: CreatePostArgs) -> Result<Post, ApiError> {
        self.send_json(self.request(reqwest::Method::POST, "/posts").json(&args)).await
    }

    async fn update_post(&self, id: i64, args: UpdatePostArgs) -> Result<Post, ApiError> {
        self.send_json(self.request(reqwest::Method::PUT, &format!("/posts/{}", id)).json(&args))
            .await
    }

    async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(self.request(reqwest::Method::DELETE, &format!("/posts/{}", id)))
            .await
    }

    async fn get_folders(&self, class_id: i64) -> Result<Vec<Folder>, ApiError> {
        self.send_json(self.request(reqwest::Method::GET, &format!("/classes/{}/folders", class_id)))
            .await
    }

    async fn get_modules(&self, class_id: i64, folder_id: Option<i64>) -> Result<Vec<Module>, ApiError> {
        let path = match folder_id {
            Some(folder) => format!("/classes/{}/modules?folder_id={}", class_id, folder),
            None => format!("/classes/{}/modules", class_id),
        };
        self.send_json(self.request(reqwest::Method::GET, &path)).await
    }

    async fn me(&self) -> Result<Option<User>, ApiError> {
        if self.token.is_none() {
            return Ok(None);
        }

        match self.send_json(self.request(reqwest::Method::GET, "/auth/me")).await {
            Ok(user) => Ok(Some(user)),
            // An expired or revoked token degrades to the unauthenticated state
            Err(ApiError::Auth(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
