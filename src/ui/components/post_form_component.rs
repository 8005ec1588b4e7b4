//! Post create/edit form.
//!
//! One form serves both modes: creation runs as a modal over the feed,
//! editing as the body of the `/social/:id/edit` route. In edit mode the
//! form starts empty and is prefilled once its own background fetch of
//! the existing post completes; submitting before the prefill arrives is
//! ignored.

use crate::icons::IconService;
use crate::theme::{Palette, Theme};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::api::models::Post;
use crate::ui::layout::LayoutManager;

/// What the form does on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { post_id: i64 },
}

/// The field currently receiving keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Title,
    Content,
    ImageUrl,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::ImageUrl,
            FormField::ImageUrl => FormField::Title,
        }
    }
}

pub struct PostFormComponent {
    mode: FormMode,
    title: String,
    content: String,
    image_url: String,
    active_field: FormField,
    cursor_position: usize,
    waiting_for_prefill: bool,
    icons: IconService,
    palette: Palette,
}

impl Default for PostFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PostFormComponent {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            content: String::new(),
            image_url: String::new(),
            active_field: FormField::Title,
            cursor_position: 0,
            waiting_for_prefill: false,
            icons: IconService::default(),
            palette: Theme::default().palette(),
        }
    }

    pub fn set_style(&mut self, icons: IconService, palette: Palette) {
        self.icons = icons;
        self.palette = palette;
    }

    /// Reset into creation mode.
    pub fn open_create(&mut self) {
        self.mode = FormMode::Create;
        self.clear_fields();
        self.waiting_for_prefill = false;
    }

    /// Reset into edit mode; the existing post content arrives later via
    /// [`Self::apply_prefill`].
    pub fn open_edit(&mut self, post_id: i64) {
        self.mode = FormMode::Edit { post_id };
        self.clear_fields();
        self.waiting_for_prefill = true;
    }

    /// Fill the fields from the loaded post.
    pub fn apply_prefill(&mut self, post: &Post) {
        self.title = post.title.clone();
        self.content = post.content.clone();
        self.image_url = post.image_url.clone().unwrap_or_default();
        self.active_field = FormField::Content;
        self.cursor_position = self.content.chars().count();
        self.waiting_for_prefill = false;
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    fn clear_fields(&mut self) {
        self.title.clear();
        self.content.clear();
        self.image_url.clear();
        self.active_field = FormField::Title;
        self.cursor_position = 0;
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.active_field {
            FormField::Title => &mut self.title,
            FormField::Content => &mut self.content,
            FormField::ImageUrl => &mut self.image_url,
        }
    }

    fn insert_char(&mut self, c: char) {
        let cursor = self.cursor_position;
        let buffer = self.active_buffer();
        let byte_pos: usize = buffer.chars().take(cursor).map(|ch| ch.len_utf8()).sum();
        buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    fn delete_char_before(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let cursor = self.cursor_position;
        let buffer = self.active_buffer();
        let byte_pos: usize = buffer.chars().take(cursor).map(|ch| ch.len_utf8()).sum();
        let prev_char_len = buffer.chars().nth(cursor - 1).map(|ch| ch.len_utf8()).unwrap_or(1);
        buffer.remove(byte_pos - prev_char_len);
        self.cursor_position -= 1;
    }

    fn handle_submit(&mut self) -> Action {
        if self.waiting_for_prefill || self.title.is_empty() || self.content.is_empty() {
            return Action::None;
        }

        let image_url = if self.image_url.is_empty() {
            None
        } else {
            Some(self.image_url.clone())
        };

        match self.mode {
            FormMode::Create => Action::SubmitPostCreate {
                title: self.title.clone(),
                content: self.content.clone(),
                image_url,
            },
            FormMode::Edit { post_id } => Action::SubmitPostUpdate {
                id: post_id,
                title: self.title.clone(),
                content: self.content.clone(),
                image_url,
            },
        }
    }

    fn field_widget<'a>(&self, label: &'a str, value: &'a str, field: FormField) -> Paragraph<'a> {
        let is_active = self.active_field == field;
        let border_style = if is_active {
            Style::default().fg(self.palette.accent)
        } else {
            Style::default().fg(self.palette.border)
        };
        let text = if value.is_empty() && !is_active { " " } else { value };

        Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(label).border_style(border_style))
            .style(Style::default().fg(self.palette.text))
            .alignment(Alignment::Left)
    }
}

impl Component for PostFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => match self.mode {
                FormMode::Create => Action::HideDialog,
                FormMode::Edit { .. } => Action::CancelPostEdit,
            },
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Tab => {
                self.active_field = self.active_field.next();
                self.cursor_position = match self.active_field {
                    FormField::Title => self.title.chars().count(),
                    FormField::Content => self.content.chars().count(),
                    FormField::ImageUrl => self.image_url.chars().count(),
                };
                Action::None
            }
            KeyCode::Char(c) => {
                self.insert_char(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.delete_char_before();
                Action::None
            }
            KeyCode::Left => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                }
                Action::None
            }
            KeyCode::Right => {
                let len = match self.active_field {
                    FormField::Title => self.title.chars().count(),
                    FormField::Content => self.content.chars().count(),
                    FormField::ImageUrl => self.image_url.chars().count(),
                };
                if self.cursor_position < len {
                    self.cursor_position += 1;
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let icons = self.icons.icons();
        let dialog_area = LayoutManager::centered_rect(70, 60, rect);
        f.render_widget(Clear, dialog_area);

        let title = match self.mode {
            FormMode::Create => format!("{} New Post", icons.feed.post),
            FormMode::Edit { post_id } => format!("{} Edit Post {}", icons.feed.editing, post_id),
        };
        let frame_block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(self.palette.accent))
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(frame_block, dialog_area);

        let inner_x = dialog_area.x + 2;
        let inner_width = dialog_area.width.saturating_sub(4);

        if self.waiting_for_prefill {
            let loading_rect = Rect::new(inner_x, dialog_area.y + 2, inner_width, 1);
            let loading = Paragraph::new(format!("{} Loading post...", icons.ui.loading))
                .style(Style::default().fg(self.palette.muted))
                .alignment(Alignment::Center);
            f.render_widget(loading, loading_rect);
            return;
        }

        let title_rect = Rect::new(inner_x, dialog_area.y + 1, inner_width, 3);
        let content_height = dialog_area.height.saturating_sub(12).max(3);
        let content_rect = Rect::new(inner_x, title_rect.y + 3, inner_width, content_height);
        let image_rect = Rect::new(inner_x, content_rect.y + content_height, inner_width, 3);
        let instructions_y = image_rect.y + 3;

        f.render_widget(self.field_widget("Title", &self.title, FormField::Title), title_rect);
        f.render_widget(self.field_widget("Content", &self.content, FormField::Content), content_rect);
        f.render_widget(
            self.field_widget("Image URL (optional)", &self.image_url, FormField::ImageUrl),
            image_rect,
        );

        if instructions_y < dialog_area.y + dialog_area.height {
            let instructions_rect = Rect::new(inner_x, instructions_y, inner_width, 1);
            let instructions = Paragraph::new("Tab next field · Enter save · Esc cancel")
                .style(Style::default().fg(self.palette.muted))
                .alignment(Alignment::Center);
            f.render_widget(instructions, instructions_rect);
        }
    }
}
