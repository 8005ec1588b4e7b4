//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

/// Feed and post icons
#[derive(Debug, Clone)]
pub struct FeedIcons {
    pub post: &'static str,
    pub comment: &'static str,
    pub image: &'static str,
    pub author: &'static str,
    pub editing: &'static str,
}

/// Module browser icons
#[derive(Debug, Clone)]
pub struct ModuleIcons {
    pub folder: &'static str,
    pub folder_selected: &'static str,
    pub module: &'static str,
    pub link: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub feed_title: &'static str,
    pub modules_title: &'static str,
    pub info_title: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub loading: &'static str,
}

/// Theme indicator icons
#[derive(Debug, Clone)]
pub struct ThemeIcons {
    pub light: &'static str,
    pub dark: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub feed: FeedIcons,
    pub modules: ModuleIcons,
    pub ui: UiIcons,
    pub theme: ThemeIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    /// Get emoji icon set
    fn emoji_icons() -> IconSet {
        IconSet {
            feed: FeedIcons {
                post: "📝",
                comment: "💬",
                image: "🖼️",
                author: "👤",
                editing: "✏️",
            },
            modules: ModuleIcons {
                folder: "📁",
                folder_selected: "📂",
                module: "📚",
                link: "🔗",
            },
            ui: UiIcons {
                feed_title: "📰",
                modules_title: "📚",
                info_title: "📋",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
                loading: "🔄",
            },
            theme: ThemeIcons { light: "☀️", dark: "🌙" },
        }
    }

    /// Get Unicode icon set
    fn unicode_icons() -> IconSet {
        IconSet {
            feed: FeedIcons {
                post: "▪",
                comment: "✉",
                image: "▣",
                author: "◉",
                editing: "✎",
            },
            modules: ModuleIcons {
                folder: "▸",
                folder_selected: "▾",
                module: "◆",
                link: "↗",
            },
            ui: UiIcons {
                feed_title: "▶",
                modules_title: "◆",
                info_title: "ⓘ",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
                loading: "⟳",
            },
            theme: ThemeIcons { light: "○", dark: "●" },
        }
    }

    /// Get ASCII icon set
    fn ascii_icons() -> IconSet {
        IconSet {
            feed: FeedIcons {
                post: "*",
                comment: "c",
                image: "[img]",
                author: "@",
                editing: "[edit]",
            },
            modules: ModuleIcons {
                folder: "+",
                folder_selected: "-",
                module: "#",
                link: "->",
            },
            ui: UiIcons {
                feed_title: ">",
                modules_title: "#",
                info_title: "i",
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
                loading: "...",
            },
            theme: ThemeIcons { light: "(L)", dark: "(D)" },
        }
    }
}
