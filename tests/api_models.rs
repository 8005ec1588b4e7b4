use portalist::api::models::{Module, Post};
use portalist::api::UpdatePostArgs;

#[test]
fn test_post_deserializes_from_portal_payload() {
    let json = r#"{
        "id": 42,
        "title": "Lab opening hours",
        "content": "The lab opens at 8am.",
        "image_url": null,
        "created_at": "2025-06-01T10:00:00Z",
        "updated_at": "2025-06-02T09:30:00Z",
        "user_id": 7,
        "username": "giovan",
        "comment_count": 3
    }"#;

    let post: Post = serde_json::from_str(json).unwrap();
    assert_eq!(post.id, 42);
    assert_eq!(post.username, "giovan");
    assert_eq!(post.image_url, None);
    assert_eq!(post.comment_count, 3);
}

#[test]
fn test_post_comment_count_defaults_to_zero() {
    // Some portal endpoints omit the aggregate
    let json = r#"{
        "id": 1,
        "title": "t",
        "content": "c",
        "image_url": "https://example.org/a.jpg",
        "created_at": "2025-06-01T10:00:00Z",
        "updated_at": "2025-06-01T10:00:00Z",
        "user_id": 7,
        "username": "giovan"
    }"#;

    let post: Post = serde_json::from_str(json).unwrap();
    assert_eq!(post.comment_count, 0);
    assert_eq!(post.image_url.as_deref(), Some("https://example.org/a.jpg"));
}

#[test]
fn test_module_folder_matching() {
    let json = r#"{"id": 3, "title": "Lab sheet", "folder_id": 7, "class_id": 1}"#;
    let module: Module = serde_json::from_str(json).unwrap();

    // None = unfiltered, every module matches
    assert!(module.matches_folder(None));
    assert!(module.matches_folder(Some(7)));
    assert!(!module.matches_folder(Some(8)));

    let rootless = Module { folder_id: None, ..module };
    assert!(rootless.matches_folder(None));
    assert!(!rootless.matches_folder(Some(7)));
}

#[test]
fn test_update_args_omit_unset_fields() {
    let args = UpdatePostArgs {
        content: Some("new content".to_string()),
        ..UpdatePostArgs::default()
    };

    let json = serde_json::to_string(&args).unwrap();
    assert!(json.contains("content"));
    assert!(!json.contains("title"));
    assert!(!json.contains("image_url"));
}
