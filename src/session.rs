//! Session state: the current portal user and the capabilities derived
//! from it.
//!
//! The session is the single trust boundary. Capabilities are computed
//! here, once, when the user resolves; leaf components only receive the
//! resulting values and never re-derive permissions themselves.

use crate::api::models::{Post, User};

/// Roles allowed to manage class content (folders and modules).
const CONTENT_EDITOR_ROLES: [&str; 2] = ["assistant", "admin"];

/// Tri-state edit capability for the module browser.
///
/// `Pending` covers the window between startup and the `/auth/me`
/// response; consumers render their affordances disabled (not hidden)
/// while pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanEdit {
    #[default]
    Pending,
    Yes,
    No,
}

impl CanEdit {
    /// Whether mutation affordances should currently be offered.
    #[must_use]
    pub fn allowed(self) -> bool {
        self == CanEdit::Yes
    }
}

/// Current user identity, resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
    resolved: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the `/auth/me` outcome. `None` means unauthenticated.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.resolved = true;
    }

    /// The current user, or `None` when unauthenticated or unresolved.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the given post belongs to the current user.
    #[must_use]
    pub fn owns_post(&self, post: &Post) -> bool {
        self.user.as_ref().is_some_and(|user| user.id == post.user_id)
    }

    /// Edit capability for class content, derived from the user role.
    /// Stays `Pending` until the session has resolved.
    #[must_use]
    pub fn can_edit_content(&self) -> CanEdit {
        if !self.resolved {
            return CanEdit::Pending;
        }
        let is_editor = self
            .user
            .as_ref()
            .and_then(|user| user.role.as_deref())
            .is_some_and(|role| CONTENT_EDITOR_ROLES.contains(&role));
        if is_editor {
            CanEdit::Yes
        } else {
            CanEdit::No
        }
    }
}
