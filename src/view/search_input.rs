//! Search input widget for rendering the search bar.

use super::styles::CardStyles;
use crate::state::SearchBox;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shown in an empty, unfocused box.
pub const PLACEHOLDER: &str = "Search by title or author";

/// Search input widget.
///
/// Always visible. When focused the border is highlighted and the cursor
/// cell is drawn in reverse video.
pub struct SearchInput<'a> {
    search: &'a SearchBox,
    focused: bool,
    styles: &'a CardStyles,
}

impl<'a> SearchInput<'a> {
    /// Widget over `search`, highlighted when `focused`.
    pub fn new(search: &'a SearchBox, focused: bool, styles: &'a CardStyles) -> Self {
        Self {
            search,
            focused,
            styles,
        }
    }

    fn content_line(&self) -> Line<'static> {
        let text = self.search.text();

        if !self.focused {
            if text.is_empty() {
                return Line::from(Span::styled(
                    PLACEHOLDER,
                    self.styles.message.add_modifier(Modifier::DIM),
                ));
            }
            return Line::from(text.to_string());
        }

        // Split query into before/after cursor for rendering cursor
        let cursor = self.search.cursor();
        let before: String = text.chars().take(cursor).collect();
        let mut rest = text.chars().skip(cursor);
        let cursor_char = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(
                cursor_char,
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::REVERSED),
            ),
            Span::raw(after),
        ])
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.styles.focused_border
        } else {
            self.styles.border
        };

        let paragraph = Paragraph::new(self.content_line()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search (/)")
                .border_style(border_style),
        );

        paragraph.render(area, buf);
    }
}
