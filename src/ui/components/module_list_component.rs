//! Module pane of the module browser.
//!
//! Shows the class modules filtered to the folder selected in the folder
//! pane (`None` = unfiltered). The filter is applied here, client side;
//! the component performs no permission logic and just renders the
//! capability it was handed.

use crate::icons::IconService;
use crate::session::CanEdit;
use crate::theme::{Palette, Theme};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::api::models::Module;

pub struct ModuleListComponent {
    modules: Vec<Module>,
    folder_filter: Option<i64>,
    can_edit: CanEdit,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
    icons: IconService,
    palette: Palette,
}

impl Default for ModuleListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleListComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            modules: Vec::new(),
            folder_filter: None,
            can_edit: CanEdit::Pending,
            list_state,
            scrollbar_helper: ScrollbarHelper::new(),
            icons: IconService::default(),
            palette: Theme::default().palette(),
        }
    }

    pub fn update_data(&mut self, modules: Vec<Module>, icons: IconService, palette: Palette) {
        self.modules = modules;
        self.icons = icons;
        self.palette = palette;
        self.list_state.select(Some(0));
    }

    /// Apply the lifted folder selection and capability from the manager.
    pub fn set_filter(&mut self, folder_id: Option<i64>, can_edit: CanEdit) {
        if self.folder_filter != folder_id {
            self.list_state.select(Some(0));
        }
        self.folder_filter = folder_id;
        self.can_edit = can_edit;
    }

    /// The folder filter currently applied (`None` = unfiltered).
    #[must_use]
    pub fn folder_filter(&self) -> Option<i64> {
        self.folder_filter
    }

    /// The modules visible under the current filter.
    #[must_use]
    pub fn visible_modules(&self) -> Vec<&Module> {
        self.modules
            .iter()
            .filter(|module| module.matches_folder(self.folder_filter))
            .collect()
    }
}

impl Component for ModuleListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let visible_count = self.visible_modules().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down if visible_count > 0 => {
                let next = (self.list_state.selected().unwrap_or(0) + 1) % visible_count;
                self.list_state.select(Some(next));
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up if visible_count > 0 => {
                let current = self.list_state.selected().unwrap_or(0);
                let previous = if current == 0 { visible_count - 1 } else { current - 1 };
                self.list_state.select(Some(previous));
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let icons = self.icons.icons();
        let visible: Vec<Module> = self.visible_modules().into_iter().cloned().collect();
        let palette = self.palette;

        let items: Vec<ListItem> = visible
            .iter()
            .map(|module| {
                let mut lines = vec![Line::from(Span::styled(
                    format!("{} {}", icons.modules.module, module.title),
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                ))];
                if let Some(description) = &module.description {
                    let preview: String = description.chars().take(70).collect();
                    lines.push(Line::from(Span::styled(preview, Style::default().fg(palette.muted))));
                }
                if let Some(url) = &module.url {
                    lines.push(Line::from(Span::styled(
                        format!("{} {}", icons.modules.link, url),
                        Style::default().fg(palette.accent),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        let capability_marker = if self.can_edit.allowed() { " [+]" } else { "" };
        let title = format!("{} Modules ({}){}", icons.ui.modules_title, visible.len(), capability_marker);

        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, items.len() * 2);
        let available_height = rect.height.saturating_sub(2) as usize;
        self.scrollbar_helper.update_state(
            visible.len(),
            self.list_state.selected().unwrap_or(0),
            Some(available_height / 2),
        );

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title)
                    .title_style(Style::default().fg(self.palette.text))
                    .border_style(Style::default().fg(self.palette.border)),
            )
            .highlight_style(
                Style::default()
                    .fg(self.palette.selection_fg)
                    .bg(self.palette.selection_bg),
            );

        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
