//! Terminal chrome synchronization.
//!
//! The closest terminal analog of a browser's theme-color metadata is the
//! default background/foreground pair, set with OSC 11/10. Some terminals
//! silently revert those colors while unfocused or across a resize, so
//! the event loop re-asserts the hints when focus comes back and on
//! resize, plus once after a short delay following every change.

use std::io::Write;

use super::Theme;
use crate::constants::{DARK_CHROME_COLOR, DARK_CHROME_FOREGROUND, LIGHT_CHROME_COLOR, LIGHT_CHROME_FOREGROUND};

/// The full set of chrome hints for one theme. Applying a set replaces
/// any previously applied set wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeHints {
    /// Root color-scheme marker; exactly one of the two scheme values is
    /// active on a surface at any time.
    pub scheme: Theme,
    /// Terminal default-background color (OSC 11).
    pub background: &'static str,
    /// Terminal default-foreground color (OSC 10).
    pub foreground: &'static str,
}

impl ChromeHints {
    /// The hint set for a theme, using one distinct chrome color per theme.
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                scheme: Theme::Light,
                background: LIGHT_CHROME_COLOR,
                foreground: LIGHT_CHROME_FOREGROUND,
            },
            Theme::Dark => Self {
                scheme: Theme::Dark,
                background: DARK_CHROME_COLOR,
                foreground: DARK_CHROME_FOREGROUND,
            },
        }
    }
}

/// A mutable platform surface the theme store pushes hints into.
///
/// The real implementation writes escape sequences to the terminal;
/// tests substitute a recording surface and assert on the resulting
/// state without any terminal involved.
pub trait ChromeSurface {
    /// Replace the active hints with the given set.
    fn apply(&mut self, hints: &ChromeHints);

    /// Drop all hints, restoring the terminal defaults.
    fn reset(&mut self);
}

/// Chrome surface writing OSC sequences to the real terminal.
#[derive(Debug, Default)]
pub struct TerminalChrome;

impl TerminalChrome {
    pub fn new() -> Self {
        Self
    }

    fn write_sequences(sequences: &[String]) {
        let mut stdout = std::io::stdout();
        for sequence in sequences {
            let _ = stdout.write_all(sequence.as_bytes());
        }
        let _ = stdout.flush();
    }
}

impl ChromeSurface for TerminalChrome {
    fn apply(&mut self, hints: &ChromeHints) {
        // OSC 10 = default foreground, OSC 11 = default background
        Self::write_sequences(&[
            format!("\x1b]10;{}\x07", hints.foreground),
            format!("\x1b]11;{}\x07", hints.background),
        ]);
    }

    fn reset(&mut self) {
        // OSC 110/111 restore the terminal's own defaults
        Self::write_sequences(&["\x1b]110\x07".to_string(), "\x1b]111\x07".to_string()]);
    }
}
