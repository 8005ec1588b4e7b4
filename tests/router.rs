use portalist::router::{post_updated_destination, resolve, Resolution, Route};

#[test]
fn test_parse_known_routes() {
    assert_eq!(Route::parse("/social"), Some(Route::Feed));
    assert_eq!(Route::parse("/social/42"), Some(Route::PostDetail(42)));
    assert_eq!(Route::parse("/social/42/edit"), Some(Route::PostEdit(42)));
    assert_eq!(Route::parse("/modules"), Some(Route::Modules));
    assert_eq!(Route::parse("/about"), Some(Route::About));
    assert_eq!(Route::parse("/login"), Some(Route::Login));
    assert_eq!(Route::parse("/"), Some(Route::Feed));
}

#[test]
fn test_parse_rejects_malformed_paths() {
    assert_eq!(Route::parse("social"), None); // missing leading slash
    assert_eq!(Route::parse("/social/abc"), None);
    assert_eq!(Route::parse("/social/abc/edit"), None);
    assert_eq!(Route::parse("/unknown"), None);
    assert_eq!(Route::parse("/social/42/edit/extra"), None);
}

#[test]
fn test_parse_tolerates_trailing_slash_and_whitespace() {
    assert_eq!(Route::parse("/social/"), Some(Route::Feed));
    assert_eq!(Route::parse(" /modules "), Some(Route::Modules));
}

#[test]
fn test_path_round_trip() {
    for route in [
        Route::Feed,
        Route::PostDetail(7),
        Route::PostEdit(7),
        Route::Modules,
        Route::About,
        Route::Login,
    ] {
        assert_eq!(Route::parse(&route.path()), Some(route));
    }
}

#[test]
fn test_edit_route_with_invalid_id_redirects_to_feed() {
    // A syntactically invalid id never reaches the form
    assert_eq!(resolve("/social/abc/edit", true), Resolution::Redirect(Route::Feed));
    assert_eq!(resolve("/social//edit", true), Resolution::Redirect(Route::Feed));
}

#[test]
fn test_edit_route_without_session_redirects_to_login() {
    // The session is checked before the id, like the portal web app
    assert_eq!(resolve("/social/42/edit", false), Resolution::Redirect(Route::Login));
    assert_eq!(resolve("/social/abc/edit", false), Resolution::Redirect(Route::Login));
}

#[test]
fn test_edit_route_with_valid_id_and_session_shows_form() {
    assert_eq!(resolve("/social/42/edit", true), Resolution::Show(Route::PostEdit(42)));
}

#[test]
fn test_unknown_paths_redirect_to_feed() {
    assert_eq!(resolve("/nowhere", true), Resolution::Redirect(Route::Feed));
    assert_eq!(resolve("garbage", false), Resolution::Redirect(Route::Feed));
}

#[test]
fn test_post_updated_destination() {
    assert_eq!(post_updated_destination(Some(42)), Route::PostDetail(42));
    assert_eq!(post_updated_destination(None), Route::Feed);
}

#[test]
fn test_requires_auth() {
    assert!(Route::PostEdit(1).requires_auth());
    assert!(!Route::Feed.requires_auth());
    assert!(!Route::PostDetail(1).requires_auth());
    assert!(!Route::Modules.requires_auth());
}
