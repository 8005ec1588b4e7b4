use portalist::icons::{IconService, IconTheme};

#[test]
fn test_default_theme() {
    let service = IconService::default();
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_theme_switching() {
    let mut service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.set_theme(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_cycle_icon_theme() {
    let mut service = IconService::new(IconTheme::Ascii);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Unicode);
    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Emoji);
    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_ascii_icons() {
    let icons = IconService::new(IconTheme::Ascii).icons();
    assert_eq!(icons.feed.author, "@");
    assert_eq!(icons.modules.module, "#");
    assert_eq!(icons.ui.error, "X");
}

#[test]
fn test_icon_sets_differ_per_theme() {
    let ascii = IconService::new(IconTheme::Ascii).icons();
    let emoji = IconService::new(IconTheme::Emoji).icons();
    assert_ne!(ascii.feed.post, emoji.feed.post);
    assert_ne!(ascii.theme.dark, emoji.theme.dark);
}
