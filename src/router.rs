//! Route parsing and navigation rules.
//!
//! The portal's web paths (`/social`, `/social/:id`, `/modules`, ...) are
//! kept as the app's navigation surface so deep links can be passed on
//! the command line or configured as the startup route. Resolution
//! applies the redirect rules: a malformed post id sends the user back to
//! the feed and a guarded route without a session goes to the login page.
//! No failure here ever surfaces as an error.

/// A navigable view of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// The social feed (`/social`)
    #[default]
    Feed,
    /// A single post (`/social/:id`)
    PostDetail(i64),
    /// The post edit form (`/social/:id/edit`)
    PostEdit(i64),
    /// The module browser (`/modules`)
    Modules,
    /// The lab information page (`/about`)
    About,
    /// The sign-in hint page (`/login`)
    Login,
}

/// Outcome of resolving a raw path against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Render the route.
    Show(Route),
    /// Navigate elsewhere instead; nothing is rendered for the request.
    Redirect(Route),
}

impl Route {
    /// Parse a well-formed portal path. Returns `None` for anything that
    /// is not a known route with valid parameters; callers that need
    /// redirect semantics use [`resolve`] instead.
    #[must_use]
    pub fn parse(path: &str) -> Option<Route> {
        let segments: Vec<&str> = normalized_segments(path)?;

        match segments.as_slice() {
            [] | ["social"] => Some(Route::Feed),
            ["social", id] => id.parse().ok().map(Route::PostDetail),
            ["social", id, "edit"] => id.parse().ok().map(Route::PostEdit),
            ["modules"] => Some(Route::Modules),
            ["about"] => Some(Route::About),
            ["login"] => Some(Route::Login),
            _ => None,
        }
    }

    /// The canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Feed => "/social".to_string(),
            Route::PostDetail(id) => format!("/social/{}", id),
            Route::PostEdit(id) => format!("/social/{}/edit", id),
            Route::Modules => "/modules".to_string(),
            Route::About => "/about".to_string(),
            Route::Login => "/login".to_string(),
        }
    }

    /// Whether this route requires an authenticated session.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::PostEdit(_))
    }
}

/// Resolve a raw path against the session state.
///
/// The edit route checks the session first, then the id: an anonymous
/// visitor is sent to `/login`, a malformed id back to the feed root.
/// Unknown paths also fall back to the feed.
#[must_use]
pub fn resolve(path: &str, authenticated: bool) -> Resolution {
    let Some(segments) = normalized_segments(path) else {
        return Resolution::Redirect(Route::Feed);
    };

    if let ["social", id, "edit"] = segments.as_slice() {
        if !authenticated {
            return Resolution::Redirect(Route::Login);
        }
        return match id.parse() {
            Ok(post_id) => Resolution::Show(Route::PostEdit(post_id)),
            Err(_) => Resolution::Redirect(Route::Feed),
        };
    }

    match Route::parse(path) {
        Some(route) => Resolution::Show(route),
        None => Resolution::Redirect(Route::Feed),
    }
}

/// Where to navigate after a post was saved from the edit form.
/// With a known id the detail view, otherwise back to the feed root.
#[must_use]
pub fn post_updated_destination(id: Option<i64>) -> Route {
    match id {
        Some(post_id) => Route::PostDetail(post_id),
        None => Route::Feed,
    }
}

fn normalized_segments(path: &str) -> Option<Vec<&str>> {
    let trimmed = path.trim();
    let rest = trimmed.strip_prefix('/')?;
    Some(rest.split('/').filter(|segment| !segment.is_empty()).collect())
}
