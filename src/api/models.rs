//! Data models for the portal API.
//!
//! Shapes mirror the portal's JSON payloads. Timestamps stay as the
//! RFC 3339 strings the API sends; formatting happens at render time.

use serde::{Deserialize, Serialize};

/// A social feed post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub comment_count: i64,
}

/// A content folder inside a class. Folders are one level deep and act
/// purely as a selection key filtering modules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    pub class_id: i64,
}

/// A course module (document, link or hand-out) inside a class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub folder_id: Option<i64>,
    pub class_id: i64,
}

/// The authenticated portal user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl Module {
    /// Whether this module belongs to the given folder filter
    /// (`None` = unfiltered, every module matches).
    #[must_use]
    pub fn matches_folder(&self, folder_id: Option<i64>) -> bool {
        match folder_id {
            None => true,
            Some(id) => self.folder_id == Some(id),
        }
    }
}
