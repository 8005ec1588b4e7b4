//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Environment
/// Environment variable holding the portal API bearer token
pub const API_TOKEN_ENV: &str = "PORTALIST_API_TOKEN";

// Theme persistence
/// File name of the persisted theme preference inside the config directory
pub const THEME_FILE_NAME: &str = "theme";
/// Persisted literal for the light theme
pub const THEME_VALUE_LIGHT: &str = "light";
/// Persisted literal for the dark theme
pub const THEME_VALUE_DARK: &str = "dark";

// Terminal chrome colors, one per theme
/// Chrome (terminal background) color asserted while the light theme is active
pub const LIGHT_CHROME_COLOR: &str = "#f8fafc";
/// Chrome (terminal background) color asserted while the dark theme is active
pub const DARK_CHROME_COLOR: &str = "#121212";
/// Foreground paired with the light chrome color
pub const LIGHT_CHROME_FOREGROUND: &str = "#0f172a";
/// Foreground paired with the dark chrome color
pub const DARK_CHROME_FOREGROUND: &str = "#e2e8f0";
/// Delay before the one-shot chrome re-assertion, in milliseconds
pub const CHROME_REASSERT_DELAY_MS: u64 = 50;

// Success Messages
pub const SUCCESS_POST_CREATED: &str = "✅ Post published";
pub const SUCCESS_POST_UPDATED: &str = "✅ Post updated";
pub const SUCCESS_POST_DELETED: &str = "✅ Post deleted";

// Error Messages
pub const ERROR_POST_CREATE_FAILED: &str = "❌ Failed to publish post";
pub const ERROR_POST_UPDATE_FAILED: &str = "❌ Failed to update post";
pub const ERROR_POST_DELETE_FAILED: &str = "❌ Failed to delete post";
pub const ERROR_FEED_LOAD_FAILED: &str = "❌ Failed to load the feed";
pub const ERROR_MODULES_LOAD_FAILED: &str = "❌ Failed to load modules";
pub const ERROR_POST_LOAD_FAILED: &str = "❌ Failed to load post";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const LOGIN_HINT: &str = "Sign in by setting the PORTALIST_API_TOKEN environment variable and restarting.";

// Scroll-spy
/// Lookahead added to the scroll offset before resolving the active section,
/// so a section counts as active slightly before its top edge reaches the
/// viewport top.
pub const SCROLL_SPY_LOOKAHEAD: usize = 4;

// UI Layout Constants
/// Minimum folder pane width in columns
pub const FOLDER_PANE_MIN_WIDTH: u16 = 15;
/// Maximum folder pane width in columns
pub const FOLDER_PANE_MAX_WIDTH: u16 = 50;
/// Default folder pane width in columns
pub const FOLDER_PANE_DEFAULT_WIDTH: u16 = 28;
/// Width of the section navigation pane on the info page
pub const SECTION_NAV_WIDTH: u16 = 26;
