//! Acceptance tests for search, sort, clearing filters and the view toggle
//!
//! None of these interactions may ever hit the catalog again; they only
//! re-derive and re-render the books already loaded.

use super::fixtures::{catalog_with, fantasy_shelf};
use crate::model::{SortKey, ViewMode};
use crate::state::{AppState, FocusPane, SessionSettings};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

fn shelf_harness() -> AcceptanceTestHarness {
    AcceptanceTestHarness::loaded(catalog_with(vec![fantasy_shelf()]))
}

fn card_titles(harness: &AcceptanceTestHarness) -> Vec<String> {
    harness
        .state()
        .surface()
        .cards()
        .map(|card| card.title.clone())
        .collect()
}

// ===== Search =====

#[test]
fn search_by_author_keeps_only_matching_book() {
    let mut harness = shelf_harness();

    // WHEN: User focuses the search box and types an author name
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("tolkien");

    // THEN: Nothing changes until typing has paused for the debounce
    assert_eq!(card_titles(&harness).len(), 3);

    harness.wait_for_debounce();

    assert_eq!(card_titles(&harness), vec!["The Hobbit"]);
    let output = harness.render_to_string();
    assert!(output.contains("The Hobbit"));
    assert!(!output.contains("Dune"));
    assert!(output.contains("1 of 3 books"));
    assert_eq!(harness.catalog_calls().len(), 1, "search never refetches");
}

#[test]
fn search_is_case_insensitive_and_trimmed() {
    let mut harness = shelf_harness();

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("  DUNE ");
    harness.wait_for_debounce();

    assert_eq!(harness.state().view().search_query, "dune");
    assert_eq!(card_titles(&harness), vec!["Dune"]);
}

#[test]
fn search_without_matches_shows_placeholder() {
    let mut harness = shelf_harness();

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("zzz");
    harness.wait_for_debounce();

    assert!(harness.state().surface().shows_no_results());
    assert!(harness.render_to_string().contains("No books found."));
}

#[test]
fn typing_q_in_search_does_not_quit() {
    let mut harness = shelf_harness();

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("q");

    assert!(harness.is_running());
    assert_eq!(harness.state().search_box.text(), "q");
}

#[test]
fn escape_returns_focus_and_keeps_query() {
    let mut harness = shelf_harness();

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("dune");
    harness.send_key(KeyCode::Esc);
    harness.wait_for_debounce();

    assert_eq!(harness.state().focus, FocusPane::Books);
    assert_eq!(card_titles(&harness), vec!["Dune"]);

    // Back in the book list, 'v' is a command again
    harness.send_key(KeyCode::Char('v'));
    assert_eq!(harness.state().view().view_mode, ViewMode::List);
}

#[test]
fn initial_search_applies_on_first_page() {
    let state = AppState::new(SessionSettings::default()).with_initial_search("Herbert");
    let mut harness =
        AcceptanceTestHarness::launch_state(catalog_with(vec![fantasy_shelf()]), state, 80, 24);
    harness.settle();

    assert_eq!(card_titles(&harness), vec!["Dune"]);
    assert!(harness.render_to_string().contains("Herbert"));
}

// ===== Sort =====

#[test]
fn sort_keys_reorder_cards() {
    let mut harness = shelf_harness();

    harness.send_key(KeyCode::Char('t'));
    assert_eq!(card_titles(&harness), vec!["Anathem", "Dune", "The Hobbit"]);

    // Author sort compares the first author's full name
    harness.send_key(KeyCode::Char('a'));
    assert_eq!(card_titles(&harness), vec!["Dune", "The Hobbit", "Anathem"]);

    assert!(harness.render_to_string().contains("sort: author"));
    assert_eq!(harness.catalog_calls().len(), 1, "sorting never refetches");
}

#[test]
fn cycling_sort_back_to_none_clears_search() {
    let mut harness = shelf_harness();

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("dune");
    harness.send_key(KeyCode::Enter);
    harness.wait_for_debounce();

    // none -> title -> author -> none
    harness.send_keys(&[KeyCode::Char('s'), KeyCode::Char('s'), KeyCode::Char('s')]);

    let state = harness.state();
    assert_eq!(state.view().sort_key, SortKey::None);
    assert_eq!(state.view().search_query, "");
    assert!(state.search_box.is_empty());
    assert_eq!(card_titles(&harness), vec!["The Hobbit", "Dune", "Anathem"]);
}

#[test]
fn clear_filters_resets_query_and_sort_but_not_view() {
    let mut harness = shelf_harness();

    harness.send_key(KeyCode::Char('v'));
    harness.send_key(KeyCode::Char('t'));
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("anat");
    harness.send_key(KeyCode::Esc);
    harness.wait_for_debounce();
    assert_eq!(card_titles(&harness), vec!["Anathem"]);

    harness.send_key(KeyCode::Char('x'));

    let view = harness.state().view();
    assert_eq!(view.sort_key, SortKey::None);
    assert_eq!(view.search_query, "");
    assert_eq!(view.view_mode, ViewMode::List);
    assert_eq!(card_titles(&harness).len(), 3);
}

// ===== View Toggle =====

#[test]
fn toggling_view_twice_restores_layout_and_rerenders_each_time() {
    let mut harness = shelf_harness();
    let grid_output = harness.render_to_string();
    let generation = harness.state().surface().generation();

    harness.send_key(KeyCode::Char('v'));
    let list_output = harness.render_to_string();
    assert_eq!(harness.state().surface().view_mode(), ViewMode::List);
    assert_ne!(grid_output, list_output);
    assert!(list_output.contains("By: J.R.R. Tolkien · Publisher: Unknown"));

    harness.send_key(KeyCode::Char('v'));
    assert_eq!(harness.state().view().view_mode, ViewMode::Grid);
    assert_eq!(harness.state().surface().generation(), generation + 2);
    assert_eq!(card_titles(&harness).len(), 3);
    assert_eq!(harness.render_to_string(), grid_output);
}
