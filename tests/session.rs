use portalist::api::models::{Post, User};
use portalist::session::{CanEdit, Session};

fn user(id: i64, role: Option<&str>) -> User {
    User {
        id,
        username: format!("user{}", id),
        role: role.map(str::to_string),
    }
}

fn post_by(user_id: i64) -> Post {
    Post {
        id: 1,
        title: "t".to_string(),
        content: "c".to_string(),
        image_url: None,
        created_at: "2025-06-01T10:00:00Z".to_string(),
        updated_at: "2025-06-01T10:00:00Z".to_string(),
        user_id,
        username: format!("user{}", user_id),
        comment_count: 0,
    }
}

#[test]
fn test_capability_is_pending_until_resolved() {
    let mut session = Session::new();
    assert_eq!(session.can_edit_content(), CanEdit::Pending);
    assert!(!session.is_authenticated());

    session.resolve(None);
    assert_eq!(session.can_edit_content(), CanEdit::No);
}

#[test]
fn test_capability_follows_role() {
    let mut session = Session::new();
    session.resolve(Some(user(1, Some("assistant"))));
    assert_eq!(session.can_edit_content(), CanEdit::Yes);
    assert!(session.can_edit_content().allowed());

    session.resolve(Some(user(2, Some("admin"))));
    assert_eq!(session.can_edit_content(), CanEdit::Yes);

    session.resolve(Some(user(3, Some("student"))));
    assert_eq!(session.can_edit_content(), CanEdit::No);

    session.resolve(Some(user(4, None)));
    assert_eq!(session.can_edit_content(), CanEdit::No);
}

#[test]
fn test_post_ownership() {
    let mut session = Session::new();
    assert!(!session.owns_post(&post_by(5)));

    session.resolve(Some(user(5, None)));
    assert!(session.owns_post(&post_by(5)));
    assert!(!session.owns_post(&post_by(6)));

    session.resolve(None);
    assert!(!session.owns_post(&post_by(5)));
}
