//! Application state and transitions.
//!
//! AppState is the single session controller: it owns the pagination state,
//! the view state (query, sort, layout), the display surface and the UI bits
//! around them, and is the only place any of them is mutated. The terminal
//! shell feeds it input events and a clock; fetches leave as
//! [`PageRequest`]s and come back as [`PageResponse`]s.

use crate::catalog::{PageRequest, PageResponse};
use crate::config::ResolvedConfig;
use crate::model::{BookRecord, SortKey, ViewMode};
use crate::render::{self, BufferSurface, DisplaySurface};
use crate::state::debounce::Debouncer;
use crate::state::filter::{self, normalize_query};
use crate::state::pagination::{LoadOutcome, PaginationState};
use crate::state::scroll::ScrollState;
use crate::state::search_box::{self, SearchBox};
use std::time::{Duration, Instant};
use tracing::{debug, info};

// ===== SessionSettings =====

/// Tunables for one browsing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Records requested per page.
    pub page_size: u32,
    /// First page requested.
    pub initial_page: u32,
    /// Quiet period for search and scroll triggers.
    pub debounce: Duration,
    /// Distance to bottom, in rows, below which the next page is requested.
    pub scroll_threshold: u16,
    /// Skeleton cards shown while the first page loads.
    pub skeleton_count: usize,
    /// Layout at startup.
    pub view_mode: ViewMode,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&ResolvedConfig::default())
    }
}

impl From<&ResolvedConfig> for SessionSettings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            page_size: config.page_size,
            initial_page: config.initial_page,
            debounce: Duration::from_millis(config.debounce_ms),
            scroll_threshold: config.scroll_threshold,
            skeleton_count: config.skeleton_count,
            view_mode: config.default_view,
        }
    }
}

// ===== ViewState =====

/// Ephemeral UI choices the displayed set depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Normalized (trimmed, lowercased) query; empty means no filter.
    pub search_query: String,
    /// Active sort.
    pub sort_key: SortKey,
    /// Current layout.
    pub view_mode: ViewMode,
}

// ===== FocusPane =====

/// Which widget receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusPane {
    /// Keys are bound actions (scroll, sort, toggle...).
    #[default]
    Books,
    /// Keys edit the search box.
    Search,
}

// ===== TickEffects =====

/// What a clock tick asks the shell to do.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TickEffects {
    /// A page fetch to hand to the page loader.
    pub fetch: Option<PageRequest>,
    /// Whether anything visible changed.
    pub redraw: bool,
}

// ===== AppState =====

/// Application state. Owns everything the session mutates.
#[derive(Debug, Clone)]
pub struct AppState {
    pagination: PaginationState,
    view: ViewState,
    surface: BufferSurface,
    settings: SessionSettings,

    /// Raw search box text; becomes `view.search_query` after the debounce.
    pub search_box: SearchBox,

    /// Which widget currently has keyboard focus.
    pub focus: FocusPane,

    /// Viewport over the rendered book list.
    pub scroll: ScrollState,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Message for the status bar (last error or last opened link).
    pub status_message: Option<String>,

    search_debounce: Debouncer,
    scroll_debounce: Debouncer,
}

impl AppState {
    /// Create a fresh session. Nothing is fetched until
    /// [`request_next_page`](Self::request_next_page) is called.
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            pagination: PaginationState::new(settings.initial_page, settings.page_size),
            view: ViewState {
                view_mode: settings.view_mode,
                ..ViewState::default()
            },
            surface: BufferSurface::new(settings.view_mode),
            search_box: SearchBox::default(),
            focus: FocusPane::Books,
            scroll: ScrollState::default(),
            help_visible: false,
            status_message: None,
            search_debounce: Debouncer::new(settings.debounce),
            scroll_debounce: Debouncer::new(settings.debounce),
            settings,
        }
    }

    /// Start the session with a query already applied (CLI `--search`).
    pub fn with_initial_search(mut self, raw: &str) -> Self {
        self.search_box = SearchBox::with_text(raw);
        self.view.search_query = normalize_query(raw);
        self
    }

    // ----- read access -----

    /// Pagination progress and accumulated books.
    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Applied query, sort and layout.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// What is currently rendered.
    pub fn surface(&self) -> &BufferSurface {
        &self.surface
    }

    /// Settings the session was started with.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Books that should be on screen right now.
    ///
    /// Always a function of the accumulated books, the query and the sort key.
    pub fn displayed(&self) -> Vec<&BookRecord> {
        filter::derive(
            self.pagination.books(),
            &self.view.search_query,
            self.view.sort_key,
        )
    }

    /// Whether the viewport is close enough to the end to want another page.
    pub fn near_bottom(&self) -> bool {
        self.scroll.distance_to_bottom() < u32::from(self.settings.scroll_threshold)
    }

    /// Time until the next debounced action is due, if any is pending.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        match (
            self.search_debounce.time_until_due(now),
            self.scroll_debounce.time_until_due(now),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ----- rendering -----

    /// Re-derive the displayed set and fully re-render the surface.
    pub fn rerender(&mut self) {
        let displayed = filter::derive(
            self.pagination.books(),
            &self.view.search_query,
            self.view.sort_key,
        );
        render::render(&mut self.surface, &displayed, self.view.view_mode);
    }

    // ----- pagination -----

    /// Ask for the next page, showing loading feedback.
    ///
    /// Returns `None` (and changes nothing) while a fetch is in flight or once
    /// pagination has ended.
    pub fn request_next_page(&mut self) -> Option<PageRequest> {
        let request = self.pagination.begin_load()?;
        let initial = request.page == self.settings.initial_page.max(1);
        render::show_loading(&mut self.surface, initial, self.settings.skeleton_count);
        info!(page = request.page, "Requesting next catalog page");
        Some(request)
    }

    /// Apply a finished fetch.
    ///
    /// New books trigger a full re-render (the first page always does, so an
    /// empty catalog shows "no results"). A failure shows the error message
    /// once. After new books arrive the scroll trigger is re-armed, so a page
    /// that does not fill the viewport pulls in the next one.
    pub fn apply_page(&mut self, response: PageResponse, now: Instant) -> LoadOutcome {
        self.surface.remove_loader();
        let outcome = self.pagination.complete_load(response);

        match &outcome {
            LoadOutcome::Loaded { appended, initial } => {
                if *appended > 0 || *initial {
                    self.rerender();
                }
                if *appended > 0 {
                    self.scroll_debounce.trigger(now);
                }
            }
            LoadOutcome::Failed(error) => {
                // Nothing loaded yet: replace the skeletons with "no results"
                if self.pagination.books().is_empty() {
                    self.rerender();
                }
                render::show_error(&mut self.surface);
                self.status_message = Some(error.to_string());
            }
            LoadOutcome::Skipped => {}
        }

        outcome
    }

    // ----- interaction triggers -----

    /// Search box text changed; the query is applied after the debounce.
    pub fn on_search_edited(&mut self, now: Instant) {
        self.search_debounce.trigger(now);
    }

    /// Type a character into the search box.
    pub fn type_search_char(&mut self, ch: char, now: Instant) {
        self.search_box = search_box::insert_char(std::mem::take(&mut self.search_box), ch);
        self.on_search_edited(now);
    }

    /// Delete the character before the search box cursor.
    pub fn search_backspace(&mut self, now: Instant) {
        let before = self.search_box.clone();
        self.search_box = search_box::backspace(std::mem::take(&mut self.search_box));
        if self.search_box != before {
            self.on_search_edited(now);
        }
    }

    /// Sort selector changed. The cleared value resets all filters.
    pub fn on_sort_selected(&mut self, sort_key: SortKey) {
        if sort_key == SortKey::None {
            self.clear_filters();
            return;
        }
        debug!(sort = %sort_key, "Sort key selected");
        self.view.sort_key = sort_key;
        self.rerender();
    }

    /// Reset search query, search box and sort key. Layout is kept.
    pub fn clear_filters(&mut self) {
        debug!("Filters cleared");
        self.search_box = search_box::clear(std::mem::take(&mut self.search_box));
        self.search_debounce.cancel();
        self.view.search_query.clear();
        self.view.sort_key = SortKey::None;
        self.rerender();
    }

    /// Flip between grid and list layout.
    pub fn toggle_view(&mut self) {
        self.view.view_mode = self.view.view_mode.toggled();
        debug!(view = %self.view.view_mode, "View mode toggled");
        self.rerender();
    }

    /// The viewport moved (key, wheel or resize); checked after the debounce.
    pub fn on_scrolled(&mut self, now: Instant) {
        self.scroll_debounce.trigger(now);
    }

    /// Run debounced actions that are due at `now`.
    pub fn tick(&mut self, now: Instant) -> TickEffects {
        let mut effects = TickEffects::default();

        if self.search_debounce.fire_if_due(now) {
            let query = normalize_query(self.search_box.text());
            if query != self.view.search_query {
                debug!(query = %query, "Search query applied");
                self.view.search_query = query;
                self.rerender();
                effects.redraw = true;
            }
        }

        if self.scroll_debounce.fire_if_due(now) && self.near_bottom() {
            effects.fetch = self.request_next_page();
            effects.redraw |= effects.fetch.is_some();
        }

        effects
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
