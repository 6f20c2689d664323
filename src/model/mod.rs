//! Domain model types (pure).
//!
//! Book records as fetched, the UI's sort/layout enums, key actions and errors.

pub mod book;
pub mod error;
pub mod key_action;
pub mod view_options;

// Re-export for convenience
pub use book::{BookRecord, ImageLinks, VolumeInfo};
pub use error::{AppError, BoxError, RemoteFetchError};
pub use key_action::KeyAction;
pub use view_options::{SortKey, ViewMode};
