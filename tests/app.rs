use std::sync::Arc;

use async_trait::async_trait;
use portalist::api::models::{Folder, Module, Post, User};
use portalist::api::{ApiError, CreatePostArgs, DataProvider, UpdatePostArgs};
use portalist::config::Config;
use portalist::router::Route;
use portalist::ui::core::actions::Action;
use portalist::ui::core::AppContext;
use portalist::ui::AppComponent;
use uuid::Uuid;

fn post(id: i64, user_id: i64) -> Post {
    Post {
        id,
        title: format!("post {}", id),
        content: "content".to_string(),
        image_url: None,
        created_at: "2025-06-01T10:00:00Z".to_string(),
        updated_at: "2025-06-01T10:00:00Z".to_string(),
        user_id,
        username: format!("user{}", user_id),
        comment_count: 0,
    }
}

/// In-memory stand-in for the portal, substituted at the provider seam.
struct StubProvider {
    posts: Vec<Post>,
    user: Option<User>,
}

#[async_trait]
impl DataProvider for StubProvider {
    async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self.posts.clone())
    }

    async fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        self.posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("post {}", id)))
    }

    async fn create_post(&self, _args: CreatePostArgs) -> Result<Post, ApiError> {
        Ok(post(99, 1))
    }

    async fn update_post(&self, id: i64, _args: UpdatePostArgs) -> Result<Post, ApiError> {
        self.get_post(id).await
    }

    async fn delete_post(&self, _id: i64) -> Result<(), ApiError> {
        Ok(())
    }

    async fn get_folders(&self, _class_id: i64) -> Result<Vec<Folder>, ApiError> {
        Ok(Vec::new())
    }

    async fn get_modules(&self, _class_id: i64, _folder_id: Option<i64>) -> Result<Vec<Module>, ApiError> {
        Ok(Vec::new())
    }

    async fn me(&self) -> Result<Option<User>, ApiError> {
        Ok(self.user.clone())
    }
}

fn app_with(posts: Vec<Post>, user: Option<User>) -> AppComponent {
    let provider = Arc::new(StubProvider { posts, user });
    AppComponent::new(AppContext::new(provider, Config::default()))
}

/// Pump background completions until nothing is pending.
async fn drain_background(app: &mut AppComponent) {
    for _ in 0..50 {
        let actions = app.process_background_actions();
        for action in actions {
            app.dispatch(action);
        }
        if app.active_fetch_count() == 0 {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn test_edit_path_with_invalid_id_redirects_to_feed() {
    let mut app = app_with(Vec::new(), None);
    app.dispatch(Action::SessionResolved {
        user: Some(User {
            id: 1,
            username: "me".to_string(),
            role: None,
        }),
    });

    app.dispatch(Action::OpenPath("/social/abc/edit".to_string()));
    assert_eq!(app.current_route(), Route::Feed);
    assert!(!app.is_form_visible());
}

#[tokio::test]
async fn test_edit_path_without_session_redirects_to_login() {
    let mut app = app_with(Vec::new(), None);
    app.dispatch(Action::SessionResolved { user: None });

    app.dispatch(Action::OpenPath("/social/42/edit".to_string()));
    assert_eq!(app.current_route(), Route::Login);
    assert!(!app.is_form_visible());
}

#[tokio::test]
async fn test_edit_path_with_session_opens_form() {
    let mut app = app_with(vec![post(42, 1)], None);
    app.dispatch(Action::SessionResolved {
        user: Some(User {
            id: 1,
            username: "me".to_string(),
            role: None,
        }),
    });

    app.dispatch(Action::OpenPath("/social/42/edit".to_string()));
    assert_eq!(app.current_route(), Route::PostEdit(42));
    assert!(app.is_form_visible());
}

#[tokio::test]
async fn test_feed_load_applies_current_generation_only() {
    let mut app = app_with(vec![post(1, 1), post(2, 2)], None);

    // A completion whose generation token matches nothing current is
    // dropped, never applied
    app.dispatch(Action::FeedLoaded {
        generation: Uuid::new_v4(),
        posts: vec![post(7, 7)],
    });
    assert_eq!(app.total_posts(), 0);

    // The real flow - navigate, fetch, completion with the live token -
    // lands
    app.dispatch(Action::Navigate(Route::Feed));
    drain_background(&mut app).await;
    assert_eq!(app.total_posts(), 2);
}

#[tokio::test]
async fn test_deleted_post_is_removed_by_the_feed_owner() {
    let mut app = app_with(vec![post(1, 1), post(2, 2)], None);
    app.dispatch(Action::Navigate(Route::Feed));
    drain_background(&mut app).await;
    assert_eq!(app.total_posts(), 2);

    app.dispatch(Action::PostDeleted(1));
    assert_eq!(app.total_posts(), 1);

    // Deleting something already gone is a no-op
    app.dispatch(Action::PostDeleted(1));
    assert_eq!(app.total_posts(), 1);
}

#[tokio::test]
async fn test_post_saved_on_edit_route_navigates_to_detail() {
    let mut app = app_with(vec![post(42, 1)], None);
    app.dispatch(Action::SessionResolved {
        user: Some(User {
            id: 1,
            username: "me".to_string(),
            role: None,
        }),
    });
    app.dispatch(Action::OpenPath("/social/42/edit".to_string()));
    assert_eq!(app.current_route(), Route::PostEdit(42));

    app.dispatch(Action::PostSaved { id: Some(42) });
    assert_eq!(app.current_route(), Route::PostDetail(42));
    assert!(!app.is_form_visible());
}
