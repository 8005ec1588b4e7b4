//! Folder pane of the module browser.
//!
//! Folders are one level deep and act purely as a selection key. The
//! pane emits selection actions; the lifted selection state itself lives
//! in the module manager.

use crate::icons::IconService;
use crate::session::CanEdit;
use crate::theme::{Palette, Theme};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::api::models::Folder;

pub struct FolderListComponent {
    folders: Vec<Folder>,
    /// Mirror of the manager's lifted selection, for highlighting only
    selected_folder_id: Option<i64>,
    can_edit: CanEdit,
    list_state: ListState,
    icons: IconService,
    palette: Palette,
}

impl Default for FolderListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FolderListComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            folders: Vec::new(),
            selected_folder_id: None,
            can_edit: CanEdit::Pending,
            list_state,
            icons: IconService::default(),
            palette: Theme::default().palette(),
        }
    }

    pub fn update_data(&mut self, folders: Vec<Folder>, icons: IconService, palette: Palette) {
        self.folders = folders;
        self.icons = icons;
        self.palette = palette;
        let cursor = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(cursor.min(self.total_rows().saturating_sub(1))));
    }

    /// Reflect the manager's lifted selection and capability.
    pub fn set_selection(&mut self, selected_folder_id: Option<i64>, can_edit: CanEdit) {
        self.selected_folder_id = selected_folder_id;
        self.can_edit = can_edit;
    }

    // Row 0 is the fixed "All modules" entry, folders follow
    fn total_rows(&self) -> usize {
        self.folders.len() + 1
    }

    fn row_to_selection(&self, row: usize) -> Option<i64> {
        if row == 0 {
            None
        } else {
            self.folders.get(row - 1).map(|folder| folder.id)
        }
    }

    fn activate_row(&mut self, row: usize) -> Action {
        let target = self.row_to_selection(row);
        // Activating the already-selected folder clears the selection
        if target.is_some() && target == self.selected_folder_id {
            Action::SelectFolder(None)
        } else {
            Action::SelectFolder(target)
        }
    }

    /// Handle mouse events within the folder pane.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        let is_in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;

        if !is_in_area {
            return Action::None;
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if mouse.row > area.y && mouse.row < area.y + area.height - 1 {
                let clicked_row = self.list_state.offset() + (mouse.row - area.y - 1) as usize;
                if clicked_row < self.total_rows() {
                    self.list_state.select(Some(clicked_row));
                    return self.activate_row(clicked_row);
                }
            }
        }
        Action::None
    }
}

impl Component for FolderListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let next = (self.list_state.selected().unwrap_or(0) + 1) % self.total_rows();
                self.list_state.select(Some(next));
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let current = self.list_state.selected().unwrap_or(0);
                let previous = if current == 0 { self.total_rows() - 1 } else { current - 1 };
                self.list_state.select(Some(previous));
                Action::None
            }
            KeyCode::Enter => {
                let row = self.list_state.selected().unwrap_or(0);
                self.activate_row(row)
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let icons = self.icons.icons();

        let mut items: Vec<ListItem> = Vec::with_capacity(self.total_rows());
        let all_style = if self.selected_folder_id.is_none() {
            Style::default().fg(self.palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.text)
        };
        items.push(ListItem::new(Line::from(Span::styled("All modules", all_style))));

        for folder in &self.folders {
            let is_selected = self.selected_folder_id == Some(folder.id);
            let icon = if is_selected {
                icons.modules.folder_selected
            } else {
                icons.modules.folder
            };
            let style = if is_selected {
                Style::default().fg(self.palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.palette.text)
            };
            items.push(ListItem::new(Line::from(Span::styled(
                format!("{} {}", icon, folder.name),
                style,
            ))));
        }

        // The capability is rendered, never interpreted here
        let capability = match self.can_edit {
            CanEdit::Yes => "editable",
            CanEdit::No => "read-only",
            CanEdit::Pending => "checking...",
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!("Folders ({})", capability))
                    .title_style(Style::default().fg(self.palette.text))
                    .border_style(Style::default().fg(self.palette.border)),
            )
            .highlight_style(
                Style::default()
                    .fg(self.palette.selection_fg)
                    .bg(self.palette.selection_bg),
            );

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
