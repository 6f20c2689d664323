//! Display surface abstraction.
//!
//! The render pipeline only ever clears and appends. The terminal view draws
//! whatever a [`BufferSurface`] holds; tests inspect it directly.

use super::card::BookCard;
use crate::model::ViewMode;

/// One rendered element of the book list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayElement {
    /// A book card.
    Card(BookCard),
    /// Placeholder shown when nothing matches.
    NoResults,
    /// Fetch failure message.
    Error(String),
    /// Grey placeholder card shown while the first page loads.
    Skeleton,
    /// Spinner row appended while a later page loads.
    Loader,
}

impl DisplayElement {
    /// Cards and skeletons flow into grid columns; everything else spans the row.
    pub fn is_tile(&self) -> bool {
        matches!(self, DisplayElement::Card(_) | DisplayElement::Skeleton)
    }
}

/// Capability the render pipeline writes into.
pub trait DisplaySurface {
    /// Remove all rendered content.
    fn clear(&mut self);

    /// Append one element after the existing content.
    fn append(&mut self, element: DisplayElement);

    /// Remove the loading spinner if present.
    fn remove_loader(&mut self);

    /// Whether an error message is currently shown.
    fn contains_error(&self) -> bool;

    /// Select the card layout.
    fn set_view_mode(&mut self, mode: ViewMode);
}

/// In-memory surface.
#[derive(Debug, Clone, Default)]
pub struct BufferSurface {
    elements: Vec<DisplayElement>,
    view_mode: ViewMode,
    generation: u64,
}

impl BufferSurface {
    /// Empty surface laid out in `view_mode`.
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Self::default()
        }
    }

    /// Everything currently rendered, in order.
    pub fn elements(&self) -> &[DisplayElement] {
        &self.elements
    }

    /// Layout the cards are drawn in.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Number of times the surface has been cleared. Each full render bumps it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cards in display order.
    pub fn cards(&self) -> impl Iterator<Item = &BookCard> {
        self.elements.iter().filter_map(|element| match element {
            DisplayElement::Card(card) => Some(card),
            _ => None,
        })
    }

    /// Number of error messages shown.
    pub fn error_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, DisplayElement::Error(_)))
            .count()
    }

    /// Whether the next-page spinner is shown.
    pub fn has_loader(&self) -> bool {
        self.elements.contains(&DisplayElement::Loader)
    }

    /// Whether the "no results" placeholder is shown.
    pub fn shows_no_results(&self) -> bool {
        self.elements.contains(&DisplayElement::NoResults)
    }
}

impl DisplaySurface for BufferSurface {
    fn clear(&mut self) {
        self.elements.clear();
        self.generation += 1;
    }

    fn append(&mut self, element: DisplayElement) {
        self.elements.push(element);
    }

    fn remove_loader(&mut self) {
        self.elements.retain(|e| *e != DisplayElement::Loader);
    }

    fn contains_error(&self) -> bool {
        self.error_count() > 0
    }

    fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }
}
