//! Modal dialog container.
//!
//! Holds the currently visible dialog (delete confirmation, error, info,
//! help, logs) and its scroll state, delegating drawing to the helpers
//! in [`dialogs`](crate::ui::components::dialogs). The post form is not a
//! dialog type: it is its own component layered by the app.

use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, style::Color, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    scroll_offset: usize,
    scrollbar_state: ScrollbarState,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn handle_submit(&mut self) -> Action {
        match &self.dialog_type {
            Some(DialogType::DeleteConfirmation { post_id, .. }) => {
                let action = Action::ConfirmPostDelete(*post_id);
                self.clear_dialog();
                action
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.dialog_type.is_none() {
            return Action::None;
        }

        match &self.dialog_type {
            Some(DialogType::Info(_)) | Some(DialogType::Error(_)) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_offset = self.scroll_offset.saturating_add(1);
                    Action::None
                }
                _ => Action::HideDialog, // Any other key dismisses the dialog
            },
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Action::HideDialog,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_offset = self.scroll_offset.saturating_add(1);
                    Action::None
                }
                KeyCode::Home => {
                    self.scroll_offset = 0;
                    Action::None
                }
                _ => Action::None,
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.scroll_offset = self.scroll_offset.saturating_add(1);
                    Action::None
                }
                KeyCode::Home => {
                    self.scroll_offset = 0;
                    Action::None
                }
                _ => Action::None,
            },
            Some(DialogType::DeleteConfirmation { .. }) => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => self.handle_submit(),
                _ => Action::None,
            },
            Some(DialogType::PostCreation) | None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            // The post form is layered by the app, not by this container
            Action::ShowDialog(DialogType::PostCreation) => Action::ShowDialog(DialogType::PostCreation),
            Action::ShowDialog(dialog_type) => {
                self.scroll_offset = 0;
                self.scrollbar_state = ScrollbarState::new(0);
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let icons = self.icons.icons();
        match self.dialog_type.clone() {
            Some(DialogType::DeleteConfirmation { title, .. }) => {
                dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, &title);
            }
            Some(DialogType::Error(message)) => {
                dialogs::render_scrollable_dialog(
                    f,
                    rect,
                    &format!("{} Error", icons.ui.error),
                    Color::Red,
                    &message,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            Some(DialogType::Info(message)) => {
                dialogs::render_scrollable_dialog(
                    f,
                    rect,
                    &format!("{} Info", icons.ui.info),
                    Color::Blue,
                    &message,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            Some(DialogType::Help) => {
                dialogs::render_scrollable_dialog(
                    f,
                    rect,
                    "Help - Press 'Esc' or '?' to close",
                    Color::Yellow,
                    dialogs::HELP_TEXT,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            Some(DialogType::Logs) => {
                let content = self
                    .logger
                    .as_ref()
                    .map(|logger| logger.get_logs().join("\n"))
                    .unwrap_or_else(|| "No logs recorded".to_string());
                dialogs::render_scrollable_dialog(
                    f,
                    rect,
                    DIALOG_TITLE_LOGS,
                    Color::Gray,
                    &content,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            Some(DialogType::PostCreation) | None => {}
        }
    }
}
