//! Domain-level keyboard actions independent of key bindings.

use crate::model::SortKey;

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the book list up by one row. Default: k/↑
    ScrollUp,
    /// Scroll the book list down by one row. Default: j/↓
    ScrollDown,
    /// Scroll up by one page height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one page height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first book. Default: g/Home
    ScrollToTop,
    /// Jump to the last loaded book. Default: G/End
    ScrollToBottom,

    // Search
    /// Focus the search box. Default: //Ctrl+f
    StartSearch,

    // Sort and filters
    /// Advance the sort selector: none → title → author → none. Default: s
    CycleSort,
    /// Select a specific sort key. Default: t (title), a (author)
    SelectSort(SortKey),
    /// Reset search query and sort key. Default: x
    ClearFilters,

    // Layout
    /// Flip between grid and list layout. Default: v
    ToggleView,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}

impl KeyAction {
    /// Whether the action moves the viewport and therefore feeds the scroll trigger.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}
