//! Help overlay listing keyboard and mouse shortcuts.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::CardStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut table: category header followed by (keys, description) rows.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/↓", "Scroll down"),
            ("k/↑", "Scroll up"),
            ("Ctrl+d/PgDn", "Page down"),
            ("Ctrl+u/PgUp", "Page up"),
            ("g/Home", "Go to top"),
            ("G/End", "Go to bottom (loads more books)"),
            ("Mouse wheel", "Scroll"),
        ],
    ),
    (
        "Search",
        &[
            ("//Ctrl+f", "Focus search box"),
            ("Esc/Enter", "Return to the book list"),
            ("Backspace", "Delete character"),
        ],
    ),
    (
        "Sort & Layout",
        &[
            ("s", "Cycle sort (none, title, author)"),
            ("t", "Sort by title"),
            ("a", "Sort by author"),
            ("x", "Clear search and sort"),
            ("v", "Toggle grid/list view"),
        ],
    ),
    ("Links", &[("Click", "Open the book's info link")]),
    (
        "Application",
        &[("q/Ctrl+c", "Quit"), ("?", "Show this help")],
    ),
];

const KEY_COLUMN_WIDTH: usize = 14;

/// Render the help overlay centered over the current frame.
pub fn render_help_overlay(frame: &mut Frame, styles: &CardStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.header),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles.status.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(styles: &CardStyles) -> Vec<Line<'static>> {
    let category_style = styles.header.add_modifier(Modifier::BOLD);
    let key_style = styles.title;
    let desc_style = styles.detail;

    let mut lines = Vec::new();
    for (index, (category, shortcuts)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![Span::styled(*category, category_style)]));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<KEY_COLUMN_WIDTH$}"), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
