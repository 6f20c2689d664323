//! Vertical scrolling over the rendered book list.
//!
//! Offsets are in terminal rows. The content height is measured by the view
//! after layout and pushed back here, so the distance to the bottom is always
//! computed against what is actually on screen. Offsets and content height are
//! `u32` so a long infinite-scroll session never runs out of rows; the viewport
//! is a terminal area and stays `u16`.

use crate::model::KeyAction;

/// Rows scrolled per mouse wheel notch.
pub const WHEEL_STEP: u32 = 3;

/// Viewport position over the laid-out content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: u32,
    content_height: u32,
    viewport_height: u16,
}

impl ScrollState {
    /// Top visible row.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Total rows of laid-out content.
    pub fn content_height(&self) -> u32 {
        self.content_height
    }

    /// Visible rows.
    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> u32 {
        self.content_height
            .saturating_sub(u32::from(self.viewport_height))
    }

    /// Rows of content below the viewport.
    pub fn distance_to_bottom(&self) -> u32 {
        self.content_height
            .saturating_sub(self.offset.saturating_add(u32::from(self.viewport_height)))
    }

    /// Update measured sizes and clamp the offset into range.
    pub fn set_dimensions(&mut self, content_height: u32, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Move up by `rows`, stopping at the top.
    pub fn scroll_up(&mut self, rows: u32) {
        self.offset = self.offset.saturating_sub(rows);
    }

    /// Move down by `rows`, stopping at the bottom.
    pub fn scroll_down(&mut self, rows: u32) {
        self.offset = self.offset.saturating_add(rows).min(self.max_offset());
    }

    /// Jump to the first row.
    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    /// Jump so the last row is visible.
    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }
}

/// Apply a scrolling key action.
///
/// Non-scroll actions return the state unchanged.
pub fn handle_scroll_action(mut state: ScrollState, action: KeyAction) -> ScrollState {
    let page = u32::from(state.viewport_height.max(1));
    match action {
        KeyAction::ScrollUp => state.scroll_up(1),
        KeyAction::ScrollDown => state.scroll_down(1),
        KeyAction::PageUp => state.scroll_up(page),
        KeyAction::PageDown => state.scroll_down(page),
        KeyAction::ScrollToTop => state.to_top(),
        KeyAction::ScrollToBottom => state.to_bottom(),
        _ => {}
    }
    state
}
