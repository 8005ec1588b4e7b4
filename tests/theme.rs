use portalist::constants::{DARK_CHROME_COLOR, LIGHT_CHROME_COLOR};
use portalist::theme::{initial_theme, ChromeHints, ChromeSurface, Theme, ThemeStore};

/// Recording surface: models the terminal state the store mutates, so
/// the sync routine can be asserted on without any terminal.
#[derive(Default)]
struct RecordingChrome {
    light_marker: bool,
    dark_marker: bool,
    background: Option<String>,
    foreground: Option<String>,
    apply_count: usize,
}

impl ChromeSurface for RecordingChrome {
    fn apply(&mut self, hints: &ChromeHints) {
        // The scheme marker is exclusive: applying one clears the other
        match hints.scheme {
            Theme::Light => {
                self.light_marker = true;
                self.dark_marker = false;
            }
            Theme::Dark => {
                self.dark_marker = true;
                self.light_marker = false;
            }
        }
        self.background = Some(hints.background.to_string());
        self.foreground = Some(hints.foreground.to_string());
        self.apply_count += 1;
    }

    fn reset(&mut self) {
        self.light_marker = false;
        self.dark_marker = false;
        self.background = None;
        self.foreground = None;
    }
}

fn store_without_persistence() -> ThemeStore {
    ThemeStore::with_path(None)
}

#[test]
fn test_set_then_get_returns_theme_with_single_marker() {
    let mut chrome = RecordingChrome::default();
    let mut store = store_without_persistence();
    store.activate(&mut chrome);

    for theme in [Theme::Light, Theme::Dark] {
        store.set(theme, &mut chrome);
        assert_eq!(store.get(), theme);
        // Exactly one of the two markers is present
        assert_ne!(chrome.light_marker, chrome.dark_marker);
        assert_eq!(chrome.light_marker, theme == Theme::Light);
    }
}

#[test]
fn test_chrome_color_distinct_per_theme() {
    let mut chrome = RecordingChrome::default();
    let mut store = store_without_persistence();
    store.activate(&mut chrome);

    store.set(Theme::Light, &mut chrome);
    assert_eq!(chrome.background.as_deref(), Some(LIGHT_CHROME_COLOR));

    store.set(Theme::Dark, &mut chrome);
    assert_eq!(chrome.background.as_deref(), Some(DARK_CHROME_COLOR));
}

#[test]
fn test_toggle_twice_restores_original_state() {
    let mut chrome = RecordingChrome::default();
    let mut store = store_without_persistence();
    store.activate(&mut chrome);
    store.set(Theme::Light, &mut chrome);

    let original = store.get();
    let original_background = chrome.background.clone();

    store.toggle(&mut chrome);
    assert_eq!(store.get(), original.opposite());

    store.toggle(&mut chrome);
    assert_eq!(store.get(), original);
    assert_eq!(chrome.background, original_background);
    assert_ne!(chrome.light_marker, chrome.dark_marker);
}

#[test]
fn test_sync_chrome_is_idempotent() {
    let mut chrome = RecordingChrome::default();
    let mut store = store_without_persistence();
    store.activate(&mut chrome);
    store.set(Theme::Dark, &mut chrome);

    let background = chrome.background.clone();
    let dark_marker = chrome.dark_marker;

    // Re-running after a terminal quietly reverted the hints restores
    // the same end state
    store.sync_chrome(&mut chrome);
    store.sync_chrome(&mut chrome);

    assert_eq!(chrome.background, background);
    assert_eq!(chrome.dark_marker, dark_marker);
    assert!(!chrome.light_marker);
}

#[test]
fn test_initialization_policy() {
    // No persisted value: ambient preference wins
    assert_eq!(initial_theme(None, Some(Theme::Dark)), Theme::Dark);
    assert_eq!(initial_theme(None, Some(Theme::Light)), Theme::Light);

    // Persisted value wins regardless of ambient preference
    assert_eq!(initial_theme(Some("light"), Some(Theme::Dark)), Theme::Light);
    assert_eq!(initial_theme(Some("dark"), Some(Theme::Light)), Theme::Dark);

    // Persisted value tolerates surrounding whitespace
    assert_eq!(initial_theme(Some("dark\n"), None), Theme::Dark);

    // Anything but the two literals is ignored in favor of ambient
    assert_eq!(initial_theme(Some("solarized"), Some(Theme::Dark)), Theme::Dark);
    assert_eq!(initial_theme(Some(""), None), Theme::Light);

    // Nothing at all: light
    assert_eq!(initial_theme(None, None), Theme::Light);
}

#[test]
fn test_store_is_inert_until_activated() {
    let mut chrome = RecordingChrome::default();
    let mut store = store_without_persistence();

    // Before activation the terminal must not be touched
    store.set(Theme::Dark, &mut chrome);
    assert_eq!(chrome.apply_count, 0);
    assert_eq!(store.get(), Theme::Dark);

    store.activate(&mut chrome);
    assert_eq!(chrome.apply_count, 1);
}

#[test]
fn test_deactivate_resets_chrome() {
    let mut chrome = RecordingChrome::default();
    let mut store = store_without_persistence();
    store.activate(&mut chrome);
    store.set(Theme::Dark, &mut chrome);

    store.deactivate(&mut chrome);
    assert!(!chrome.light_marker);
    assert!(!chrome.dark_marker);
    assert_eq!(chrome.background, None);
}

#[test]
fn test_persistence_round_trip() {
    let dir = std::env::temp_dir().join("portalist_test_theme");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("theme");

    let mut chrome = RecordingChrome::default();
    let mut store = ThemeStore::with_path(Some(path.clone()));
    store.activate(&mut chrome);
    store.set(Theme::Dark, &mut chrome);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "dark");

    // A fresh store initialized from the same path picks the value up,
    // whatever the ambient preference says
    let reloaded = ThemeStore::with_path(Some(path.clone()));
    assert_eq!(reloaded.get(), Theme::Dark);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_persistence_failure_is_silent() {
    // A parent that is a regular file makes every write fail
    let dir = std::env::temp_dir().join("portalist_test_theme_blocked");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let mut chrome = RecordingChrome::default();
    let mut store = ThemeStore::with_path(Some(blocker.join("theme")));
    store.activate(&mut chrome);

    // In-memory state stays authoritative even though persisting failed
    store.set(Theme::Dark, &mut chrome);
    assert_eq!(store.get(), Theme::Dark);
    assert!(chrome.dark_marker);

    let _ = std::fs::remove_dir_all(&dir);
}
