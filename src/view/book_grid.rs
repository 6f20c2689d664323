//! Book list layout and rendering.
//!
//! Layout is computed in content coordinates (row 0 is the top of the whole
//! list, not of the viewport). The widget then draws only the rows that fall
//! inside the scrolled viewport. The same placements drive mouse hit testing.
//!
//! Content rows are `u32`: a long session of infinite scroll outgrows the
//! `u16` rows of a terminal buffer. Only the viewport is narrowed back to
//! screen coordinates.

use super::constants::{
    GRID_CARD_HEIGHT, GRID_MAX_COLUMNS, GRID_MIN_CARD_WIDTH, LIST_COVER_WIDTH, LIST_ROW_HEIGHT,
    LOADER_ROW_HEIGHT, MESSAGE_ROW_HEIGHT,
};
use super::styles::CardStyles;
use crate::model::ViewMode;
use crate::render::{BookCard, CoverImage, DisplayElement, NO_RESULTS_MESSAGE};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Text of the loader row.
pub const LOADER_TEXT: &str = "Loading more books...";

/// Where one display element sits in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index into the surface's elements.
    pub index: usize,
    /// Left column.
    pub x: u16,
    /// Row from the top of the list, before scrolling.
    pub y: u32,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Placement {
    /// First row below the element.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(u32::from(self.height))
    }

    fn contains(&self, x: u16, y: u32) -> bool {
        x >= self.x && x < self.x.saturating_add(self.width) && y >= self.y && y < self.bottom()
    }
}

/// Number of grid columns that fit `width`.
pub fn grid_columns(width: u16) -> u16 {
    (width / GRID_MIN_CARD_WIDTH).clamp(1, GRID_MAX_COLUMNS)
}

fn element_height(element: &DisplayElement, mode: ViewMode) -> u16 {
    match element {
        DisplayElement::Card(_) | DisplayElement::Skeleton => match mode {
            ViewMode::Grid => GRID_CARD_HEIGHT,
            ViewMode::List => LIST_ROW_HEIGHT,
        },
        DisplayElement::NoResults | DisplayElement::Error(_) => MESSAGE_ROW_HEIGHT,
        DisplayElement::Loader => LOADER_ROW_HEIGHT,
    }
}

/// Lay out elements for a content area `width` columns wide.
///
/// In grid mode tiles flow left to right into equal columns and any other
/// element closes the current row and spans the full width. List mode stacks
/// everything full width.
pub fn layout_elements(elements: &[DisplayElement], mode: ViewMode, width: u16) -> Vec<Placement> {
    let columns = match mode {
        ViewMode::Grid => grid_columns(width),
        ViewMode::List => 1,
    };
    let column_width = width / columns;

    let mut placements = Vec::with_capacity(elements.len());
    let mut y: u32 = 0;
    let mut column: u16 = 0;

    for (index, element) in elements.iter().enumerate() {
        let height = element_height(element, mode);

        if element.is_tile() && columns > 1 {
            placements.push(Placement {
                index,
                x: column * column_width,
                y,
                width: column_width,
                height,
            });
            column += 1;
            if column == columns {
                column = 0;
                y = y.saturating_add(u32::from(height));
            }
            continue;
        }

        // Close a partially filled grid row
        if column > 0 {
            column = 0;
            y = y.saturating_add(u32::from(GRID_CARD_HEIGHT));
        }
        placements.push(Placement {
            index,
            x: 0,
            y,
            width,
            height,
        });
        y = y.saturating_add(u32::from(height));
    }

    placements
}

/// Total rows the laid-out list occupies.
pub fn content_height(placements: &[Placement]) -> u32 {
    placements.iter().map(Placement::bottom).max().unwrap_or(0)
}

/// Element index under a point given in content coordinates.
pub fn hit_test(placements: &[Placement], x: u16, y: u32) -> Option<usize> {
    placements
        .iter()
        .find(|placement| placement.contains(x, y))
        .map(|placement| placement.index)
}

/// Shorten `text` to at most `max_width` columns, marking the cut with `…`.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn cover_label(cover: &CoverImage) -> &'static str {
    match cover {
        CoverImage::Remote(_) => "[cover]",
        CoverImage::Placeholder => "[No Cover]",
    }
}

// ===== Widget =====

/// Scrolled view over the rendered book list.
pub struct BookGrid<'a> {
    elements: &'a [DisplayElement],
    placements: &'a [Placement],
    offset: u32,
    mode: ViewMode,
    styles: &'a CardStyles,
}

impl<'a> BookGrid<'a> {
    /// Widget drawing `elements` scrolled to `offset`.
    pub fn new(
        elements: &'a [DisplayElement],
        placements: &'a [Placement],
        offset: u32,
        mode: ViewMode,
        styles: &'a CardStyles,
    ) -> Self {
        Self {
            elements,
            placements,
            offset,
            mode,
            styles,
        }
    }
}

impl Widget for BookGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let top = self.offset;
        let bottom = top.saturating_add(u32::from(area.height));

        for placement in self.placements {
            if placement.bottom() <= top || placement.y >= bottom {
                continue;
            }
            let Some(element) = self.elements.get(placement.index) else {
                continue;
            };

            // Draw off-screen, then copy the rows inside the viewport
            let local = Rect::new(0, 0, placement.width, placement.height);
            let mut scratch = Buffer::empty(local);
            render_element(element, self.mode, self.styles, local, &mut scratch);

            for row in 0..placement.height {
                let content_y = placement.y.saturating_add(u32::from(row));
                if content_y < top || content_y >= bottom {
                    continue;
                }
                // Below `bottom`, so the distance fits the viewport height
                let Ok(screen_row) = u16::try_from(content_y - top) else {
                    continue;
                };
                let target_y = area.y + screen_row;
                for col in 0..placement.width {
                    let target_x = area.x.saturating_add(placement.x).saturating_add(col);
                    if target_x >= area.right() {
                        break;
                    }
                    buf[(target_x, target_y)] = scratch[(col, row)].clone();
                }
            }
        }
    }
}

fn render_element(
    element: &DisplayElement,
    mode: ViewMode,
    styles: &CardStyles,
    area: Rect,
    buf: &mut Buffer,
) {
    match element {
        DisplayElement::Card(card) => match mode {
            ViewMode::Grid => render_grid_card(card, styles, area, buf),
            ViewMode::List => render_list_row(card, styles, area, buf),
        },
        DisplayElement::Skeleton => render_skeleton(styles, area, buf),
        DisplayElement::NoResults => render_message(NO_RESULTS_MESSAGE, styles.message, area, buf),
        DisplayElement::Error(message) => render_message(message, styles.error, area, buf),
        DisplayElement::Loader => {
            Paragraph::new(Line::from(Span::styled(LOADER_TEXT, styles.loader)))
                .alignment(Alignment::Center)
                .render(area, buf);
        }
    }
}

fn render_grid_card(card: &BookCard, styles: &CardStyles, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border);
    let inner = block.inner(area);
    block.render(area, buf);

    let width = inner.width as usize;
    let [by, publisher, published] = card.detail_lines();
    let lines = vec![
        Line::from(Span::styled(truncate(&card.title, width), styles.title)),
        Line::from(Span::styled(truncate(&by, width), styles.detail)),
        Line::from(Span::styled(truncate(&publisher, width), styles.detail)),
        Line::from(Span::styled(truncate(&published, width), styles.detail)),
        Line::from(Span::styled(cover_label(&card.cover), styles.cover)),
    ];
    Paragraph::new(lines).render(inner, buf);
}

fn render_list_row(card: &BookCard, styles: &CardStyles, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border);
    let inner = block.inner(area);
    block.render(area, buf);

    let cover_width = LIST_COVER_WIDTH.min(inner.width);
    let cover_area = Rect {
        width: cover_width,
        ..inner
    };
    let text_area = Rect {
        x: inner.x + cover_width,
        width: inner.width - cover_width,
        ..inner
    };

    Paragraph::new(Line::from(Span::styled(cover_label(&card.cover), styles.cover)))
        .render(cover_area, buf);

    let width = text_area.width as usize;
    let details = card.detail_lines().join(" · ");
    Paragraph::new(vec![
        Line::from(Span::styled(truncate(&card.title, width), styles.title)),
        Line::from(Span::styled(truncate(&details, width), styles.detail)),
    ])
    .render(text_area, buf);
}

fn render_skeleton(styles: &CardStyles, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.skeleton);
    let inner = block.inner(area);
    block.render(area, buf);

    let width = inner.width as usize;
    let lines: Vec<Line> = [60usize, 90, 75, 50, 30]
        .iter()
        .take(inner.height as usize)
        .map(|percent| Line::from(Span::styled("░".repeat(width * percent / 100), styles.skeleton)))
        .collect();
    Paragraph::new(lines).render(inner, buf);
}

fn render_message(text: &str, style: Style, area: Rect, buf: &mut Buffer) {
    let lines = vec![Line::default(), Line::from(Span::styled(text.to_string(), style))];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}
