use uuid::Uuid;

use crate::api::models::{Folder, Module, Post, User};
use crate::router::Route;
use crate::theme::Theme;

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    Navigate(Route),
    /// Resolve a raw path (deep link) through the router's redirect rules
    OpenPath(String),

    // Feed operations
    StartPostEdit(i64),
    CancelPostEdit,
    SubmitPostCreate {
        title: String,
        content: String,
        image_url: Option<String>,
    },
    SubmitPostUpdate {
        id: i64,
        title: String,
        content: String,
        image_url: Option<String>,
    },
    RequestPostDelete(i64),
    ConfirmPostDelete(i64),

    // Module browser
    SelectFolder(Option<i64>),

    // Theme operations
    ToggleTheme,
    SetTheme(Theme),
    /// Re-push the chrome hints (focus regained, resize, delayed re-assert)
    ReassertChrome,

    // Fetch completions; every loaded payload carries the generation token
    // of the fetch that produced it
    FeedLoaded {
        generation: Uuid,
        posts: Vec<Post>,
    },
    PostLoaded {
        generation: Uuid,
        post: Post,
    },
    FoldersLoaded {
        generation: Uuid,
        folders: Vec<Folder>,
    },
    ModulesLoaded {
        generation: Uuid,
        modules: Vec<Module>,
    },
    SessionResolved {
        user: Option<User>,
    },
    /// A post was saved (created or updated) by the portal
    PostSaved {
        id: Option<i64>,
    },
    /// A post deletion was confirmed by the portal; the feed owner removes
    /// the id from its list
    PostDeleted(i64),
    FetchFailed {
        context: String,
        message: String,
    },

    // Data refresh for the current route
    RefreshData,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    PostCreation,
    DeleteConfirmation {
        post_id: i64,
        title: String,
    },
    Error(String),
    Info(String),
    Help,
    Logs,
}
