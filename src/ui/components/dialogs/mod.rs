//! Modal dialog rendering helpers.
//!
//! Pure render functions shared by the [`DialogComponent`] container;
//! state (scroll offsets, the active dialog type) stays in the container.
//!
//! [`DialogComponent`]: crate::ui::components::dialog_component::DialogComponent

use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

/// Keyboard reference shown by the help dialog.
pub const HELP_TEXT: &str = "\
PORTALIST - Student Portal Terminal Client
==========================================

NAVIGATION
----------
1 / 2 / 3   Open feed / modules / lab info
j/k         Move selection or scroll (down/up)
Enter       Open selected post or folder
Esc         Back, cancel, or close dialog

FEED
----
n           New post
e           Edit selected post (own posts only)
d           Delete selected post (own posts only)

MODULE BROWSER
--------------
Tab / h/l   Switch between folder and module pane
Enter       Select folder (again to clear the filter)

LAB INFO
--------
1-5         Jump to section
j/k         Scroll content; the nav pane follows the section in view

THEME
-----
t           Toggle light/dark theme

GENERAL
-------
r           Reload data for the current view
i           Cycle icon style (ascii/unicode/emoji)
G           Show logs
?           Toggle this help
q           Quit
";

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService, post_title: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 6, area);
    f.render_widget(Clear, dialog_area);

    let title = format!("{} Confirm Delete", icons.icons().ui.warning);
    let message = format!("Delete post \"{}\"?", post_title);
    let instructions = "Press Enter to confirm, Esc to cancel";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(Color::Red));

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 2,
        dialog_area.width.saturating_sub(2),
        2,
    );
    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);
}

/// Shared body for the info/error/help/logs dialogs: a titled block with
/// scrollable line content.
pub fn render_scrollable_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect(70, 70, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<&str>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(block, dialog_area);
    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        *scrollbar_state = scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(clamped_offset);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(Color::DarkGray));
        let scrollbar_area = Rect::new(
            dialog_area.x + dialog_area.width.saturating_sub(1),
            dialog_area.y + 1,
            1,
            dialog_area.height.saturating_sub(2),
        );
        f.render_stateful_widget(scrollbar, scrollbar_area, scrollbar_state);
    }
}
