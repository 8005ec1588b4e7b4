//! Portal REST API layer.
//!
//! This module defines the data-provider seam the UI talks through, the
//! portal's data models, and the reqwest-based client that implements the
//! seam against the real API. The app holds no local cache: every list is
//! fetched fresh when a view needs it.

pub mod client;
pub mod models;
pub mod provider;

pub use client::PortalClient;
pub use provider::DataProvider;

/// Common error type for portal API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Portal returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Arguments for creating a new post.
#[derive(Clone, Debug, serde::Serialize)]
pub struct CreatePostArgs {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Arguments for updating an existing post.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct UpdatePostArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
