//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of a grid card, borders included.
pub const GRID_CARD_HEIGHT: u16 = 7;

/// Narrowest a grid column may get before the grid drops a column.
pub const GRID_MIN_CARD_WIDTH: u16 = 28;

/// Upper bound on grid columns regardless of terminal width.
pub const GRID_MAX_COLUMNS: u16 = 3;

/// Height of a list row, borders included.
pub const LIST_ROW_HEIGHT: u16 = 4;

/// Width of the cover column in list rows.
pub const LIST_COVER_WIDTH: u16 = 12;

/// Height of the "no results" and error message rows.
pub const MESSAGE_ROW_HEIGHT: u16 = 3;

/// Height of the loader row shown while a later page loads.
pub const LOADER_ROW_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
