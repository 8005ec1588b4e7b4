//! Status bar component

use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::router::Route;
use crate::theme::{Palette, Theme};

/// One-line status bar: current route, user, theme, and shortcuts.
pub struct StatusBar;

pub struct StatusInfo<'a> {
    pub route: Route,
    pub username: Option<&'a str>,
    pub theme: Theme,
    pub theme_icon: &'a str,
    pub loading: bool,
    pub palette: Palette,
}

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, info: &StatusInfo) {
        let user_part = match info.username {
            Some(name) => format!("@{}", name),
            None => "anonymous".to_string(),
        };

        let status_text = if info.loading {
            format!("{} · {} · loading...", info.route.path(), user_part)
        } else {
            format!(
                "{} · {} · {} {} · 1:feed 2:modules 3:about · t: theme · ?: help · q: quit",
                info.route.path(),
                user_part,
                info.theme_icon,
                info.theme.as_str()
            )
        };

        let status_color = if info.loading { info.palette.accent } else { info.palette.muted };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
