//! Sort keys and layout modes selectable from the UI.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// Sort order for the displayed books.
///
/// `None` is the cleared value of the sort selector: accumulation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Catalog arrival order.
    #[default]
    None,
    /// Ascending by title.
    Title,
    /// Ascending by first author.
    Author,
}

impl SortKey {
    /// Next value of the sort selector: None → Title → Author → None.
    pub fn cycle(self) -> Self {
        match self {
            SortKey::None => SortKey::Title,
            SortKey::Title => SortKey::Author,
            SortKey::Author => SortKey::None,
        }
    }

    /// Lowercase name shown in the header.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Title => "title",
            SortKey::Author => "author",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card layout: a grid of cards or one horizontal row per book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Cards flowed into columns.
    #[default]
    Grid,
    /// One full-width row per book.
    List,
}

impl ViewMode {
    /// The other layout.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    /// Lowercase name shown in the header and accepted by `--view`.
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
