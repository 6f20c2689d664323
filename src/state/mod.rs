//! Session state (pure).
//!
//! All state transitions are plain functions or methods testable without a
//! terminal. [`AppState`] is the only owner of mutable session state.

pub mod app_state;
pub mod debounce;
pub mod filter;
pub mod pagination;
pub mod scroll;
pub mod search_box;

// Re-export for convenience
pub use app_state::{AppState, FocusPane, SessionSettings, TickEffects, ViewState};
pub use debounce::Debouncer;
pub use filter::derive;
pub use pagination::{LoadOutcome, PaginationState};
pub use scroll::{handle_scroll_action, ScrollState};
pub use search_box::SearchBox;
