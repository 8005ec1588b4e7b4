//! Social feed component.
//!
//! Renders the post sequence as cards and owns exactly one piece of
//! state: which post, if any, is in edit mode. Starting an edit for
//! another post implicitly cancels the previous one since only a single
//! id is tracked. Delete requests are forwarded upward unchanged; the
//! feed owner removes the post from the source list once the portal
//! confirms.

use crate::icons::IconService;
use crate::router::Route;
use crate::theme::{Palette, Theme};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::api::models::Post;

/// A feed entry with its ownership flag, computed once at the trust
/// boundary when the data is handed over - never re-derived in here.
#[derive(Debug, Clone)]
pub struct PostRow {
    pub post: Post,
    pub is_own: bool,
}

pub struct PostListComponent {
    rows: Vec<PostRow>,
    editing_post_id: Option<i64>,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
    icons: IconService,
    palette: Palette,
    show_comment_counts: bool,
    show_image_markers: bool,
}

impl Default for PostListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PostListComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            rows: Vec::new(),
            editing_post_id: None,
            list_state,
            scrollbar_helper: ScrollbarHelper::new(),
            icons: IconService::default(),
            palette: Theme::default().palette(),
            show_comment_counts: true,
            show_image_markers: true,
        }
    }

    /// Replace the feed contents. Ownership flags come pre-computed from
    /// the caller.
    pub fn update_data(&mut self, rows: Vec<PostRow>, icons: IconService, palette: Palette) {
        // Keep the cursor on the same post across refreshes when possible
        let selected_id = self.selected_row().map(|row| row.post.id);
        self.rows = rows;
        let index = selected_id
            .and_then(|id| self.rows.iter().position(|row| row.post.id == id))
            .unwrap_or(0);
        self.list_state.select(if self.rows.is_empty() { None } else { Some(index) });

        // A vanished post also ends any edit that pointed at it
        if let Some(editing) = self.editing_post_id {
            if !self.rows.iter().any(|row| row.post.id == editing) {
                self.editing_post_id = None;
            }
        }

        self.icons = icons;
        self.palette = palette;
    }

    pub fn set_display_options(&mut self, show_comment_counts: bool, show_image_markers: bool) {
        self.show_comment_counts = show_comment_counts;
        self.show_image_markers = show_image_markers;
    }

    /// The post currently in edit mode, if any.
    #[must_use]
    pub fn editing_post_id(&self) -> Option<i64> {
        self.editing_post_id
    }

    #[must_use]
    pub fn selected_row(&self) -> Option<&PostRow> {
        self.list_state.selected().and_then(|index| self.rows.get(index))
    }

    fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(index) => (index + 1) % self.rows.len(),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(0) | None => self.rows.len() - 1,
            Some(index) => index - 1,
        };
        self.list_state.select(Some(previous));
    }

    /// Handle mouse events within the feed area.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        let is_in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;

        if !is_in_area {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Cards are three rows tall
                if mouse.row > area.y {
                    let clicked_index = self.list_state.offset() + ((mouse.row - area.y - 1) / 3) as usize;
                    if clicked_index < self.rows.len() {
                        self.list_state.select(Some(clicked_index));
                    }
                }
                Action::None
            }
            MouseEventKind::ScrollUp => {
                self.select_previous();
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.select_next();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render_card(&self, row: &PostRow) -> ListItem<'static> {
        let icons = self.icons.icons();
        let post = &row.post;

        let mut title_spans = vec![
            Span::styled(
                format!("{} {}", icons.feed.post, post.title),
                Style::default().fg(self.palette.text).add_modifier(Modifier::BOLD),
            ),
        ];
        if self.show_image_markers && post.image_url.is_some() {
            title_spans.push(Span::styled(
                format!(" {}", icons.feed.image),
                Style::default().fg(self.palette.muted),
            ));
        }
        if self.editing_post_id == Some(post.id) {
            title_spans.push(Span::styled(
                format!(" {} editing", icons.feed.editing),
                Style::default().fg(self.palette.accent),
            ));
        }

        let mut meta = format!(
            "{} {} · {}",
            icons.feed.author,
            post.username,
            datetime::format_human_datetime(&post.created_at)
        );
        if self.show_comment_counts {
            meta.push_str(&format!(" · {} {}", icons.feed.comment, post.comment_count));
        }
        if row.is_own {
            meta.push_str(" · yours");
        }

        let preview: String = post.content.lines().next().unwrap_or("").chars().take(80).collect();

        ListItem::new(vec![
            Line::from(title_spans),
            Line::from(Span::styled(meta, Style::default().fg(self.palette.muted))),
            Line::from(Span::styled(preview, Style::default().fg(self.palette.text))),
        ])
    }
}

impl Component for PostListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_previous();
                Action::None
            }
            KeyCode::Enter => match self.selected_row() {
                Some(row) => Action::Navigate(Route::PostDetail(row.post.id)),
                None => Action::None,
            },
            KeyCode::Char('e') => {
                // Edit is an ownership-gated affordance: absent ownership
                // the key simply does nothing
                match self.selected_row() {
                    Some(row) if row.is_own => Action::StartPostEdit(row.post.id),
                    _ => Action::None,
                }
            }
            KeyCode::Char('d') => match self.selected_row() {
                Some(row) if row.is_own => Action::RequestPostDelete(row.post.id),
                _ => Action::None,
            },
            KeyCode::Char('n') => Action::ShowDialog(DialogType::PostCreation),
            KeyCode::Esc if self.editing_post_id.is_some() => Action::CancelPostEdit,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::StartPostEdit(post_id) => {
                // Only one id is tracked; a new edit replaces any prior one
                self.editing_post_id = Some(post_id);
                Action::StartPostEdit(post_id)
            }
            Action::CancelPostEdit => {
                self.editing_post_id = None;
                Action::CancelPostEdit
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let icons = self.icons.icons();
        let title = format!("{} Social Feed ({})", icons.ui.feed_title, self.rows.len());

        let items: Vec<ListItem> = self.rows.iter().map(|row| self.render_card(row)).collect();

        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, items.len() * 3);
        let available_height = rect.height.saturating_sub(2) as usize;
        self.scrollbar_helper.update_state(
            self.rows.len(),
            self.list_state.selected().unwrap_or(0),
            Some(available_height / 3),
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
