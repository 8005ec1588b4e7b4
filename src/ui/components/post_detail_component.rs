//! Single-post detail view.
//!
//! Target of the `/social/:id` route and of the navigation that follows
//! a successful edit. Shows the full content; the post arrives via a
//! background fetch owned by the app component.

use crate::icons::IconService;
use crate::router::Route;
use crate::theme::{Palette, Theme};
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::api::models::Post;

pub struct PostDetailComponent {
    post: Option<Post>,
    is_own: bool,
    loading: bool,
    scroll_offset: u16,
    icons: IconService,
    palette: Palette,
}

impl Default for PostDetailComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PostDetailComponent {
    pub fn new() -> Self {
        Self {
            post: None,
            is_own: false,
            loading: false,
            scroll_offset: 0,
            icons: IconService::default(),
            palette: Theme::default().palette(),
        }
    }

    /// Hand over the loaded post with its pre-computed ownership flag.
    pub fn update_data(&mut self, post: Option<Post>, is_own: bool, icons: IconService, palette: Palette) {
        self.post = post;
        self.is_own = is_own;
        self.loading = false;
        self.scroll_offset = 0;
        self.icons = icons;
        self.palette = palette;
    }

    /// Mark the view as waiting for its fetch.
    pub fn set_loading(&mut self) {
        self.post = None;
        self.loading = true;
        self.scroll_offset = 0;
    }

    #[must_use]
    pub fn post_id(&self) -> Option<i64> {
        self.post.as_ref().map(|post| post.id)
    }
}

impl Component for PostDetailComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Action::Navigate(Route::Feed),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            KeyCode::Char('e') => match &self.post {
                Some(post) if self.is_own => Action::StartPostEdit(post.id),
                _ => Action::None,
            },
            KeyCode::Char('d') => match &self.post {
                Some(post) if self.is_own => Action::RequestPostDelete(post.id),
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let icons = self.icons.icons();

        let Some(post) = &self.post else {
            let message = if self.loading { "Loading post..." } else { "Post not available" };
            let placeholder = Paragraph::new(message)
                .style(Style::default().fg(self.palette.muted))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(self.palette.border)),
                );
            f.render_widget(placeholder, rect);
            return;
        };

        let mut meta = format!(
            "{} {} · posted {}",
            icons.feed.author,
            post.username,
            datetime::format_human_datetime(&post.created_at)
        );
        if post.updated_at != post.created_at {
            meta.push_str(&format!(" · edited {}", datetime::format_human_datetime(&post.updated_at)));
        }
        meta.push_str(&format!(" · {} {}", icons.feed.comment, post.comment_count));

        let mut lines = vec![
            Line::from(Span::styled(
                post.title.clone(),
                Style::default().fg(self.palette.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(meta, Style::default().fg(self.palette.muted))),
            Line::default(),
        ];
        if let Some(image_url) = &post.image_url {
            lines.push(Line::from(Span::styled(
                format!("{} {}", icons.feed.image, image_url),
                Style::default().fg(self.palette.accent),
            )));
            lines.push(Line::default());
        }
        for content_line in post.content.lines() {
            lines.push(Line::from(Span::styled(
                content_line.to_string(),
                Style::default().fg(self.palette.text),
            )));
        }

        let footer = if self.is_own {
            format!("{} Post {} - e edit · d delete · Esc back", icons.feed.post, post.id)
        } else {
            format!("{} Post {} - Esc back", icons.feed.post, post.id)
        };

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(footer)
                    .title_style(Style::default().fg(self.palette.text))
                    .border_style(Style::default().fg(self.palette.border)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));

        f.render_widget(paragraph, rect);
    }
}
