//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests replay user stories against `TuiApp` on a
//! `TestBackend`, with a scripted catalog and a virtual clock.

mod acceptance_search_sort;
