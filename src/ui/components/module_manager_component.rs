//! Two-pane module browser: folders on the left drive a single lifted
//! selection that filters the module list on the right.
//!
//! The manager owns `selected_folder_id` (nullable, at most one folder at
//! a time) and forwards the tri-state edit capability unchanged to both
//! panes. It performs no permission logic itself.

use crate::icons::IconService;
use crate::session::CanEdit;
use crate::theme::Palette;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

use crate::api::models::{Folder, Module};

use super::folder_list_component::FolderListComponent;
use super::module_list_component::ModuleListComponent;

/// Which pane receives list navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Folders,
    Modules,
}

pub struct ModuleManagerComponent {
    folder_list: FolderListComponent,
    module_list: ModuleListComponent,
    selected_folder_id: Option<i64>,
    can_edit: CanEdit,
    focused_pane: Pane,
    folder_pane_width: u16,
    // Pane rects from the last render, for mouse dispatch
    folder_area: Rect,
    module_area: Rect,
}

impl Default for ModuleManagerComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleManagerComponent {
    pub fn new() -> Self {
        Self {
            folder_list: FolderListComponent::new(),
            module_list: ModuleListComponent::new(),
            selected_folder_id: None,
            can_edit: CanEdit::Pending,
            focused_pane: Pane::Folders,
            folder_pane_width: crate::constants::FOLDER_PANE_DEFAULT_WIDTH,
            folder_area: Rect::default(),
            module_area: Rect::default(),
        }
    }

    pub fn update_data(
        &mut self,
        folders: Vec<Folder>,
        modules: Vec<Module>,
        can_edit: CanEdit,
        icons: IconService,
        palette: Palette,
    ) {
        self.can_edit = can_edit;
        self.folder_list.update_data(folders, icons.clone(), palette);
        self.module_list.update_data(modules, icons, palette);
        self.push_selection();
    }

    pub fn set_folder_pane_width(&mut self, width: u16) {
        self.folder_pane_width = width;
    }

    /// Apply a folder selection to the lifted state and both panes.
    pub fn select_folder(&mut self, folder_id: Option<i64>) {
        self.selected_folder_id = folder_id;
        self.push_selection();
    }

    /// The lifted selection (`None` = nothing selected).
    #[must_use]
    pub fn selected_folder_id(&self) -> Option<i64> {
        self.selected_folder_id
    }

    /// Read access to the module pane, mainly for assertions on the
    /// filter it received.
    #[must_use]
    pub fn module_list(&self) -> &ModuleListComponent {
        &self.module_list
    }

    // Both children always see the same selection and capability values
    fn push_selection(&mut self) {
        self.folder_list.set_selection(self.selected_folder_id, self.can_edit);
        self.module_list.set_filter(self.selected_folder_id, self.can_edit);
    }

    /// Handle mouse events, dispatching to the pane under the cursor.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let action = self.folder_list.handle_mouse(mouse, self.folder_area);
        if !matches!(action, Action::None) {
            self.focused_pane = Pane::Folders;
            return self.update(action);
        }
        if mouse.column >= self.module_area.x {
            self.focused_pane = Pane::Modules;
        }
        Action::None
    }
}

impl Component for ModuleManagerComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.focused_pane = match self.focused_pane {
                    Pane::Folders => Pane::Modules,
                    Pane::Modules => Pane::Folders,
                };
                Action::None
            }
            _ => match self.focused_pane {
                Pane::Folders => self.folder_list.handle_key_events(key),
                Pane::Modules => self.module_list.handle_key_events(key),
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SelectFolder(folder_id) => {
                self.select_folder(folder_id);
                // Pass through so the app can log the navigation
                Action::SelectFolder(folder_id)
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let panes = LayoutManager::module_browser_layout(rect, self.folder_pane_width);
        self.folder_area = panes[0];
        self.module_area = panes[1];

        self.folder_list.render(f, panes[0]);
        self.module_list.render(f, panes[1]);
    }
}
