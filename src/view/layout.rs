//! Screen layout rendering.
//!
//! Pure layout logic: splits the frame into header, search box, book list
//! and status bar, then renders each from the application state.

use super::book_grid::{BookGrid, Placement};
use super::constants::{HEADER_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use super::help::render_help_overlay;
use super::search_input::SearchInput;
use super::styles::CardStyles;
use crate::state::{AppState, FocusPane};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Where each part of the screen was drawn. Mouse handling uses these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title bar.
    pub header: Rect,
    /// Search box.
    pub search: Rect,
    /// Book list.
    pub content: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Split the frame: header, search box, book list (flexible), status bar.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        content: chunks[2],
        status: chunks[3],
    }
}

/// Render the whole screen. `placements` must come from laying out the
/// current surface at the width of the content area.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    placements: &[Placement],
    styles: &CardStyles,
) {
    let areas = calculate_areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(build_header_text(state))).style(styles.header),
        areas.header,
    );

    frame.render_widget(
        SearchInput::new(&state.search_box, state.focus == FocusPane::Search, styles),
        areas.search,
    );

    let surface = state.surface();
    frame.render_widget(
        BookGrid::new(
            surface.elements(),
            placements,
            state.scroll.offset(),
            surface.view_mode(),
            styles,
        ),
        areas.content,
    );

    frame.render_widget(
        Paragraph::new(Line::from(build_status_text(state))).style(styles.status),
        areas.status,
    );

    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}

/// Header line: sort, layout and how many books are shown out of loaded.
pub fn build_header_text(state: &AppState) -> String {
    let view = state.view();
    let loaded = state.pagination().books().len();
    let shown = state.displayed().len();

    let count = if shown == loaded {
        format!("{loaded} books")
    } else {
        format!("{shown} of {loaded} books")
    };

    format!(
        "bookscroll | sort: {} | view: {} | {}",
        view.sort_key, view.view_mode, count
    )
}

/// Status line, most urgent first: a pending message, a fetch in flight,
/// end of catalog, or key hints for the focused widget.
pub fn build_status_text(state: &AppState) -> String {
    if let Some(message) = &state.status_message {
        return message.clone();
    }

    let pagination = state.pagination();
    if pagination.is_loading() {
        return format!("Loading page {}...", pagination.current_page());
    }

    let hints = match state.focus {
        FocusPane::Search => "Type to filter | Enter/Esc: back to books",
        FocusPane::Books => "/: search | s: sort | v: view | x: clear | ?: help | q: quit",
    };

    if !pagination.has_more() {
        return format!("End of catalog | {hints}");
    }

    hints.to_string()
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
