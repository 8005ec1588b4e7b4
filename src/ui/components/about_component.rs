//! Lab information page with scroll-spy navigation.
//!
//! Static content split into named sections, each with stable line
//! bounds. On every scroll the active section is recomputed: the first
//! section, in declaration order, whose bounds contain the scroll
//! position plus a small lookahead wins, and the navigation pane
//! highlights it. Activating a nav entry jumps the viewport to that
//! section's top edge.

use once_cell::sync::Lazy;

use crate::constants::SCROLL_SPY_LOOKAHEAD;
use crate::icons::IconService;
use crate::theme::{Palette, Theme};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// One named section of the info page.
pub struct SectionDef {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// The lab policy sections, in declaration order.
pub static SECTIONS: Lazy<Vec<SectionDef>> = Lazy::new(|| {
    vec![
        SectionDef {
            id: "overview",
            title: "Overview",
            body: "\
Welcome to the lab information center.

This guide collects everything you need to know about the digital
laboratory: the public computers, the specialized equipment pool, and
the regulations that apply during practicum sessions.

The lab assistants at the front desk are the first point of contact
for any question not answered here.
",
        },
        SectionDef {
            id: "pc-usage",
            title: "PC Usage & Borrowing",
            body: "\
All students have access to the public computers.

Standard usage:
  - Find an available PC during lab hours and log in with your
    student credentials.
  - Log out after your session is complete to protect your data.

Borrowing for project work:
  1. Fill out the PC borrowing form at the lab assistant's desk.
  2. Specify the duration and purpose of the loan.
  3. The lab assistant will assign you a specific PC unit.

Reminders:
  - You are responsible for the PC's condition during the loan.
  - Report any issues immediately.
  - Save your work on cloud storage or external drives; local data
    may be wiped periodically for maintenance.
",
        },
        SectionDef {
            id: "equipment",
            title: "Lab Equipment",
            body: "\
Specialized equipment such as oscilloscopes and microcontrollers is
available for borrowing for academic purposes.

Borrowing procedure:
  1. Check the equipment availability list online or at the counter.
  2. Present your student ID to the lab technician.
  3. Complete the sign-out sheet, noting the equipment's condition.
  4. Return the equipment one hour before the lab closes on the due
     date.

You are financially responsible for any damage or loss of borrowed
equipment. Handle all items with care and use them only for their
intended purpose.
",
        },
        SectionDef {
            id: "practicum",
            title: "Practicum Regulations",
            body: "\
Adherence to these regulations is mandatory for all students
participating in lab practicums.

  - Attendance: a minimum of 80% attendance is required to be
    eligible for the final exam.
  - Attire: closed-toe shoes and appropriate lab attire at all times.
  - Safety: no food or drinks in the lab; follow all safety
    instructions from the instructor or lab assistant.
  - Submissions: reports and assignments are due by the specified
    deadline; late submissions are penalized.
  - Academic honesty: plagiarism and cheating are strictly
    prohibited and result in disciplinary action.

Failure to comply may result in a failing grade or exclusion from
lab activities.
",
        },
        SectionDef {
            id: "contact",
            title: "Contact Information",
            body: "\
Lab assistant desk - PC borrowing forms and general assistance.

Lab technician - equipment borrowing and technical support.

Both are available during regular lab hours posted at the entrance.
",
        },
    ]
});

/// Resolve the active section for an effective scroll position: the
/// first section, in declaration order, whose line bounds contain the
/// position.
#[must_use]
pub fn active_section_index(bounds: &[(usize, usize)], position: usize) -> Option<usize> {
    for (index, (top, bottom)) in bounds.iter().enumerate() {
        if position >= *top && position < *bottom {
            return Some(index);
        }
    }
    None
}

pub struct AboutComponent {
    scroll_offset: usize,
    /// Line bounds of each section within the rendered content
    section_bounds: Vec<(usize, usize)>,
    /// Sticky scroll-spy result; keeps the last match when the position
    /// falls outside every section (e.g. scrolled past the end)
    active_section_id: &'static str,
    total_lines: usize,
    scrollbar_helper: ScrollbarHelper,
    icons: IconService,
    palette: Palette,
    // Nav pane rect from the last render, for mouse dispatch
    nav_area: Rect,
}

impl Default for AboutComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl AboutComponent {
    pub fn new() -> Self {
        let mut bounds = Vec::with_capacity(SECTIONS.len());
        let mut line = 0usize;
        for section in SECTIONS.iter() {
            // Heading plus underline plus body plus trailing blank line
            let section_lines = 2 + section.body.lines().count() + 1;
            bounds.push((line, line + section_lines));
            line += section_lines;
        }

        Self {
            scroll_offset: 0,
            section_bounds: bounds,
            active_section_id: SECTIONS[0].id,
            total_lines: line,
            scrollbar_helper: ScrollbarHelper::new(),
            icons: IconService::default(),
            palette: Theme::default().palette(),
            nav_area: Rect::default(),
        }
    }

    pub fn set_style(&mut self, icons: IconService, palette: Palette) {
        self.icons = icons;
        self.palette = palette;
    }

    /// The section currently highlighted in the navigation pane.
    #[must_use]
    pub fn active_section(&self) -> &'static str {
        self.active_section_id
    }

    /// Jump the viewport to a section's top edge.
    pub fn scroll_to_section(&mut self, index: usize) {
        if let Some((top, _)) = self.section_bounds.get(index) {
            self.scroll_offset = *top;
            self.refresh_active_section();
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.total_lines.saturating_sub(1);
        let next = self.scroll_offset as isize + delta;
        self.scroll_offset = next.clamp(0, max as isize) as usize;
        self.refresh_active_section();
    }

    // Runs after every scroll; a position outside all bounds keeps the
    // previous result
    fn refresh_active_section(&mut self) {
        let position = self.scroll_offset + SCROLL_SPY_LOOKAHEAD;
        if let Some(index) = active_section_index(&self.section_bounds, position) {
            self.active_section_id = SECTIONS[index].id;
        }
    }

    fn content_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.total_lines);
        for section in SECTIONS.iter() {
            lines.push(Line::from(Span::styled(
                section.title,
                Style::default().fg(self.palette.accent).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "─".repeat(section.title.chars().count().max(8)),
                Style::default().fg(self.palette.border),
            )));
            for body_line in section.body.lines() {
                lines.push(Line::from(Span::styled(
                    body_line.to_string(),
                    Style::default().fg(self.palette.text),
                )));
            }
            lines.push(Line::default());
        }
        lines
    }

    /// Handle mouse events: clicking a nav entry jumps to its section,
    /// the wheel scrolls the content.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let in_nav = mouse.column >= self.nav_area.x
                    && mouse.column < self.nav_area.x + self.nav_area.width
                    && mouse.row > self.nav_area.y
                    && mouse.row < self.nav_area.y + self.nav_area.height - 1;
                if in_nav {
                    let index = (mouse.row - self.nav_area.y - 1) as usize;
                    if index < SECTIONS.len() {
                        self.scroll_to_section(index);
                    }
                }
                Action::None
            }
            MouseEventKind::ScrollUp => {
                self.scroll_by(-1);
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.scroll_by(1);
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for AboutComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_by(1);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_by(-1);
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_by(10);
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_by(-10);
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                self.refresh_active_section();
                Action::None
            }
            KeyCode::End => {
                self.scroll_offset = self.total_lines.saturating_sub(1);
                self.refresh_active_section();
                Action::None
            }
            // Number keys jump straight to a section
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                self.scroll_to_section(index);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let icons = self.icons.icons();
        let panes = LayoutManager::info_page_layout(rect);
        self.nav_area = panes[0];
        let content_area = panes[1];

        // Navigation pane with the scroll-spy highlight
        if self.nav_area.width > 0 {
            let active = self.active_section();
            let nav_items: Vec<ListItem> = SECTIONS
                .iter()
                .enumerate()
                .map(|(index, section)| {
                    let style = if section.id == active {
                        Style::default()
                            .fg(self.palette.selection_fg)
                            .bg(self.palette.selection_bg)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(self.palette.muted)
                    };
                    ListItem::new(Line::from(Span::styled(
                        format!("{} {}", index + 1, section.title),
                        style,
                    )))
                })
                .collect();

            let nav = List::new(nav_items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("Navigation")
                    .title_style(Style::default().fg(self.palette.text))
                    .border_style(Style::default().fg(self.palette.border)),
            );
            f.render_widget(nav, self.nav_area);
        }

        // Content pane
        let (paragraph_area, scrollbar_area) = ScrollbarHelper::calculate_areas(content_area, self.total_lines);
        let viewport = content_area.height.saturating_sub(2) as usize;
        self.scrollbar_helper.update_state(self.total_lines, self.scroll_offset, Some(viewport));

        let content = Paragraph::new(self.content_lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!("{} Lab Information", icons.ui.info_title))
                    .title_style(Style::default().fg(self.palette.text))
                    .border_style(Style::default().fg(self.palette.border)),
            )
            .scroll((self.scroll_offset as u16, 0));

        f.render_widget(content, paragraph_area);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
