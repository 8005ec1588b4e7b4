//! Theme preference store.
//!
//! Holds the light/dark preference, persists it as a single durable entry
//! (a `theme` file in the config directory containing `light` or `dark`),
//! and keeps the terminal chrome in sync through [`chrome`]. The store is
//! constructed once per application instance and injected into consumers;
//! it only touches the terminal after [`ThemeStore::activate`], once the
//! terminal is fully set up, and resets it on [`ThemeStore::deactivate`].

pub mod chrome;

pub use chrome::{ChromeHints, ChromeSurface, TerminalChrome};

use std::path::PathBuf;

use ratatui::style::Color;

use crate::constants::{THEME_FILE_NAME, THEME_VALUE_DARK, THEME_VALUE_LIGHT};

/// Display theme. Exactly one value is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// In-app colors derived from the active theme. The terminal background
/// itself comes from the chrome sync; this palette only covers the
/// accents drawn on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Theme {
    /// The persisted literal for this theme.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => THEME_VALUE_LIGHT,
            Theme::Dark => THEME_VALUE_DARK,
        }
    }

    /// Parse a persisted literal. Anything but the two exact literals is
    /// rejected so a corrupt file falls back to the ambient preference.
    #[must_use]
    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            THEME_VALUE_LIGHT => Some(Theme::Light),
            THEME_VALUE_DARK => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn opposite(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Accent colors legible on this theme's chrome background.
    #[must_use]
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                text: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                border: Color::Gray,
                selection_bg: Color::Blue,
                selection_fg: Color::White,
            },
            Theme::Dark => Palette {
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                selection_bg: Color::Cyan,
                selection_fg: Color::Black,
            },
        }
    }
}

/// Pick the initial theme: persisted value first, then the platform's
/// ambient preference, then light.
#[must_use]
pub fn initial_theme(persisted: Option<&str>, ambient: Option<Theme>) -> Theme {
    persisted
        .and_then(Theme::parse)
        .or(ambient)
        .unwrap_or(Theme::Light)
}

/// Read the platform's ambient color-scheme preference.
#[must_use]
pub fn ambient_theme() -> Option<Theme> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Some(Theme::Dark),
        Ok(dark_light::Mode::Light) => Some(Theme::Light),
        _ => None,
    }
}

/// Theme preference store with persistence and chrome synchronization.
pub struct ThemeStore {
    current: Theme,
    store_path: Option<PathBuf>,
    activated: bool,
}

impl ThemeStore {
    /// Create a store over an explicit persistence path (`None` disables
    /// persistence entirely) applying the initialization policy.
    #[must_use]
    pub fn with_path(store_path: Option<PathBuf>) -> Self {
        let persisted = store_path.as_ref().and_then(|path| std::fs::read_to_string(path).ok());
        let current = initial_theme(persisted.as_deref(), ambient_theme());
        Self {
            current,
            store_path,
            activated: false,
        }
    }

    /// Create a store persisting to the portalist config directory.
    #[must_use]
    pub fn load() -> Self {
        let store_path = crate::config::Config::get_xdg_config_dir()
            .ok()
            .map(|dir| dir.join(THEME_FILE_NAME));
        Self::with_path(store_path)
    }

    /// The active theme.
    #[must_use]
    pub fn get(&self) -> Theme {
        self.current
    }

    /// The accent palette of the active theme.
    #[must_use]
    pub fn palette(&self) -> Palette {
        self.current.palette()
    }

    /// Set the theme: update memory, persist, and push the chrome hints.
    /// The chrome is only touched after activation.
    pub fn set(&mut self, theme: Theme, surface: &mut dyn ChromeSurface) {
        self.current = theme;
        self.persist();
        if self.activated {
            self.sync_chrome(surface);
        }
    }

    /// Flip light <-> dark.
    pub fn toggle(&mut self, surface: &mut dyn ChromeSurface) {
        self.set(self.current.opposite(), surface);
    }

    /// Mark the terminal as ready and run the first chrome sync.
    pub fn activate(&mut self, surface: &mut dyn ChromeSurface) {
        self.activated = true;
        self.sync_chrome(surface);
    }

    /// Reset the chrome on teardown.
    pub fn deactivate(&mut self, surface: &mut dyn ChromeSurface) {
        if self.activated {
            surface.reset();
            self.activated = false;
        }
    }

    /// Push the current theme's hints to the surface. Idempotent: the
    /// hints replace any prior ones wholesale, so re-running after a
    /// terminal quietly reverted them restores the same end state.
    pub fn sync_chrome(&self, surface: &mut dyn ChromeSurface) {
        surface.apply(&ChromeHints::for_theme(self.current));
    }

    // Persistence is best effort: a failed write leaves the in-memory
    // value authoritative for the session.
    fn persist(&self) {
        if let Some(path) = &self.store_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = std::fs::write(path, self.current.as_str());
        }
    }
}
