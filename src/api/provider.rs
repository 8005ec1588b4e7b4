//! Data-provider seam between the UI and the portal transport.
//!
//! The UI only ever sees this trait; the reqwest client implements it
//! against the real API and tests substitute an in-memory stub.

use async_trait::async_trait;

use super::models::{Folder, Module, Post, User};
use super::{ApiError, CreatePostArgs, UpdatePostArgs};

/// Supplies the portal entities the views render. Implementations must be
/// cheap to clone behind an `Arc` and safe to call from spawned tasks.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetch the social feed, newest first.
    async fn get_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// Fetch a single post by id.
    async fn get_post(&self, id: i64) -> Result<Post, ApiError>;

    /// Publish a new post and return it as stored by the portal.
    async fn create_post(&self, args: CreatePostArgs) -> Result<Post, ApiError>;

    /// Update an existing post; the id stays stable, content is replaced.
    async fn update_post(&self, id: i64, args: UpdatePostArgs) -> Result<Post, ApiError>;

    /// Delete a post by id.
    async fn delete_post(&self, id: i64) -> Result<(), ApiError>;

    /// Fetch the folders of a class.
    async fn get_folders(&self, class_id: i64) -> Result<Vec<Folder>, ApiError>;

    /// Fetch the modules of a class, optionally restricted to one folder.
    async fn get_modules(&self, class_id: i64, folder_id: Option<i64>) -> Result<Vec<Module>, ApiError>;

    /// Resolve the current user, or `None` when unauthenticated.
    async fn me(&self) -> Result<Option<User>, ApiError>;
}
