//! bookscroll
//!
//! TUI application for browsing a paginated remote book catalog with
//! incremental search, sorting, a grid/list layout toggle and infinite scroll.
//!
//! Pure core, impure shell: `model`, `state` and `render` hold no I/O;
//! `catalog` talks to the network and `view` owns the terminal.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod render;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
