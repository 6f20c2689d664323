//! Filter/sort engine (pure).
//!
//! Derives the displayed books from the accumulated set, a search query and a
//! sort key. Nothing here mutates its input or keeps state, so the displayed set
//! is always a function of `(books, query, sort_key)` alone.

use crate::model::{BookRecord, SortKey};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize raw search box text into a query: trimmed and lowercased.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `book` passes the search filter.
///
/// An empty query matches everything. Otherwise the lowercased title or the
/// lowercased `", "`-joined author list must contain the lowercased query as a
/// plain substring.
pub fn matches_query(book: &BookRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();

    let title = book.title().unwrap_or_default().to_lowercase();
    if title.contains(&query) {
        return true;
    }

    book.joined_authors().to_lowercase().contains(&query)
}

/// Filter then sort `books` for display.
///
/// `SortKey::None` keeps arrival order. Title and author sorts are stable,
/// so books with equal keys also keep arrival order.
pub fn derive<'a>(books: &'a [BookRecord], query: &str, sort_key: SortKey) -> Vec<&'a BookRecord> {
    let mut displayed: Vec<&BookRecord> = books
        .iter()
        .filter(|book| matches_query(book, query))
        .collect();

    match sort_key {
        SortKey::None => {}
        SortKey::Title => displayed.sort_by(|a, b| {
            locale_cmp(a.title().unwrap_or_default(), b.title().unwrap_or_default())
        }),
        SortKey::Author => displayed.sort_by(|a, b| {
            locale_cmp(
                a.first_author().unwrap_or_default(),
                b.first_author().unwrap_or_default(),
            )
        }),
    }

    displayed
}

/// Locale-style string ordering.
///
/// Three levels, like a collator for an English locale:
/// 1. base letters, ignoring accents and case (`"Émile" < "Frank"`,
///    `"apple" < "Banana"`),
/// 2. accents, unaccented first (`"resume" < "résumé"`),
/// 3. case, lowercase first (`"a" < "A"`).
///
/// The empty string sorts before everything else.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accent_marks(a).cmp(&accent_marks(b)))
        .then_with(|| case_flags(a).cmp(case_flags(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Combining marks attached to each base character, in order.
fn accent_marks(s: &str) -> Vec<Vec<char>> {
    let mut marks: Vec<Vec<char>> = Vec::new();
    for c in s.nfd() {
        if !is_combining_mark(c) {
            marks.push(Vec::new());
        } else if let Some(last) = marks.last_mut() {
            last.push(c);
        }
    }
    marks
}

fn case_flags(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}
