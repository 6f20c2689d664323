//! Render pipeline: books in, display elements out.
//!
//! Every render fully replaces the surface content; there is no diffing.

pub mod card;
pub mod surface;

pub use card::{BookCard, CoverImage, PLACEHOLDER_COVER_URL};
pub use surface::{BufferSurface, DisplayElement, DisplaySurface};

use crate::model::{BookRecord, ViewMode};

/// Message shown once when a page fetch fails.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load books. Please try again later.";

/// Placeholder text when no book matches.
pub const NO_RESULTS_MESSAGE: &str = "No books found.";

/// Replace the surface content with one card per book.
///
/// An empty list renders a single "no results" placeholder.
pub fn render<S>(surface: &mut S, books: &[&BookRecord], view_mode: ViewMode)
where
    S: DisplaySurface + ?Sized,
{
    surface.clear();
    surface.set_view_mode(view_mode);

    if books.is_empty() {
        surface.append(DisplayElement::NoResults);
        return;
    }

    for book in books {
        surface.append(DisplayElement::Card(BookCard::from_record(book)));
    }
}

/// Append the fetch error message unless one is already shown.
pub fn show_error<S>(surface: &mut S)
where
    S: DisplaySurface + ?Sized,
{
    if !surface.contains_error() {
        surface.append(DisplayElement::Error(FETCH_ERROR_MESSAGE.to_string()));
    }
}

/// Show loading feedback for a page fetch.
///
/// The first page replaces the surface with `skeleton_count` skeleton cards;
/// later pages append a single loader row below the existing cards.
pub fn show_loading<S>(surface: &mut S, initial: bool, skeleton_count: usize)
where
    S: DisplaySurface + ?Sized,
{
    if initial {
        surface.clear();
        for _ in 0..skeleton_count {
            surface.append(DisplayElement::Skeleton);
        }
    } else {
        surface.append(DisplayElement::Loader);
    }
}
