use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use portalist::api::models::Post;
use portalist::icons::IconService;
use portalist::theme::Theme;
use portalist::ui::components::post_list_component::{PostListComponent, PostRow};
use portalist::ui::core::{actions::Action, Component};

fn post(id: i64, user_id: i64, title: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: "content".to_string(),
        image_url: None,
        created_at: "2025-06-01T10:00:00Z".to_string(),
        updated_at: "2025-06-01T10:00:00Z".to_string(),
        user_id,
        username: format!("user{}", user_id),
        comment_count: 0,
    }
}

fn list_with_rows(rows: Vec<PostRow>) -> PostListComponent {
    let mut list = PostListComponent::new();
    list.update_data(rows, IconService::default(), Theme::Light.palette());
    list
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_edit_tracks_a_single_post_id() {
    let mut list = list_with_rows(vec![
        PostRow { post: post(1, 5, "first"), is_own: true },
        PostRow { post: post(2, 5, "second"), is_own: true },
    ]);

    assert_eq!(list.editing_post_id(), None);

    list.update(Action::StartPostEdit(1));
    assert_eq!(list.editing_post_id(), Some(1));

    // Starting an edit for another post implicitly cancels the first;
    // only one id is ever tracked
    list.update(Action::StartPostEdit(2));
    assert_eq!(list.editing_post_id(), Some(2));

    list.update(Action::CancelPostEdit);
    assert_eq!(list.editing_post_id(), None);
}

#[test]
fn test_edit_affordance_is_ownership_gated() {
    let mut list = list_with_rows(vec![PostRow {
        post: post(1, 99, "someone else's"),
        is_own: false,
    }]);

    // Not the user's post: the edit key does nothing
    assert!(matches!(list.handle_key_events(key(KeyCode::Char('e'))), Action::None));
    assert!(matches!(list.handle_key_events(key(KeyCode::Char('d'))), Action::None));

    let mut own_list = list_with_rows(vec![PostRow {
        post: post(3, 5, "mine"),
        is_own: true,
    }]);
    assert!(matches!(
        own_list.handle_key_events(key(KeyCode::Char('e'))),
        Action::StartPostEdit(3)
    ));
    assert!(matches!(
        own_list.handle_key_events(key(KeyCode::Char('d'))),
        Action::RequestPostDelete(3)
    ));
}

#[test]
fn test_enter_opens_detail_route() {
    let mut list = list_with_rows(vec![PostRow {
        post: post(9, 1, "open me"),
        is_own: false,
    }]);

    match list.handle_key_events(key(KeyCode::Enter)) {
        Action::Navigate(route) => assert_eq!(route.path(), "/social/9"),
        other => panic!("expected navigation, got {:?}", other),
    }
}

#[test]
fn test_refresh_drops_edit_marker_for_vanished_post() {
    let mut list = list_with_rows(vec![
        PostRow { post: post(1, 5, "first"), is_own: true },
        PostRow { post: post(2, 5, "second"), is_own: true },
    ]);
    list.update(Action::StartPostEdit(2));

    // The feed owner removed post 2; the stale edit marker goes with it
    list.update_data(
        vec![PostRow { post: post(1, 5, "first"), is_own: true }],
        IconService::default(),
        Theme::Light.palette(),
    );
    assert_eq!(list.editing_post_id(), None);
}

#[test]
fn test_selection_sticks_to_post_across_refresh() {
    let mut list = list_with_rows(vec![
        PostRow { post: post(1, 5, "first"), is_own: false },
        PostRow { post: post(2, 5, "second"), is_own: false },
    ]);
    list.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(list.selected_row().unwrap().post.id, 2);

    // Same post, new position after the list was refreshed
    list.update_data(
        vec![
            PostRow { post: post(2, 5, "second"), is_own: false },
            PostRow { post: post(1, 5, "first"), is_own: false },
        ],
        IconService::default(),
        Theme::Light.palette(),
    );
    assert_eq!(list.selected_row().unwrap().post.id, 2);
}
