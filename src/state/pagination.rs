//! Pagination state across incremental page loads.
//!
//! Tracks the next page to request, the books accumulated so far and whether
//! more pages may exist. A short page (fewer records than requested) or any
//! fetch failure ends pagination for the session; nothing ever re-enables it.

use crate::catalog::{CatalogFetcher, PageRequest, PageResponse};
use crate::model::{BookRecord, RemoteFetchError};
use tracing::{info, warn};

/// Result of completing (or attempting) a page load.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Nothing happened: a fetch was already in flight, pagination had ended,
    /// or the response did not belong to an outstanding request.
    Skipped,
    /// The page arrived and its records were appended.
    Loaded {
        /// Number of records appended (may be zero).
        appended: usize,
        /// Whether this was the session's first page.
        initial: bool,
    },
    /// The fetch failed; pagination is now permanently disabled.
    Failed(RemoteFetchError),
}

/// Page counter, accumulated books and the more/loading flags.
#[derive(Debug, Clone)]
pub struct PaginationState {
    current_page: u32,
    initial_page: u32,
    page_size: u32,
    books: Vec<BookRecord>,
    has_more: bool,
    is_loading: bool,
}

impl PaginationState {
    /// Start a session at `initial_page` with the given page size.
    ///
    /// Both values are clamped to at least 1.
    pub fn new(initial_page: u32, page_size: u32) -> Self {
        let initial_page = initial_page.max(1);
        Self {
            current_page: initial_page,
            initial_page,
            page_size: page_size.max(1),
            books: Vec::new(),
            has_more: true,
            is_loading: false,
        }
    }

    /// Next page that will be requested.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Records requested per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// All books fetched so far, in arrival order.
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    /// False once a short page or a failure ended the catalog.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether a call to [`begin_load`](Self::begin_load) would issue a request.
    pub fn can_load(&self) -> bool {
        !self.is_loading && self.has_more
    }

    /// Mark a fetch as in flight and return the request to issue.
    ///
    /// Returns `None` without touching any state when a fetch is already in
    /// flight or pagination has ended.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if !self.can_load() {
            return None;
        }
        self.is_loading = true;
        Some(self.next_request())
    }

    /// Apply the response to the request issued by [`begin_load`](Self::begin_load).
    ///
    /// Always clears `is_loading`. Responses arriving while no fetch is
    /// outstanding are ignored.
    pub fn complete_load(&mut self, response: PageResponse) -> LoadOutcome {
        if !self.is_loading {
            warn!(
                page = response.request.page,
                "Ignoring page response with no outstanding request"
            );
            return LoadOutcome::Skipped;
        }
        self.is_loading = false;
        self.apply(response)
    }

    /// Fetch the next page synchronously through `fetcher`.
    ///
    /// Same preconditions and effects as `begin_load` followed by
    /// `complete_load`. The loading flag is held only for the duration of the
    /// fetch and released on every exit path, including unwinding.
    pub fn load_next_page(&mut self, fetcher: &dyn CatalogFetcher) -> LoadOutcome {
        if !self.can_load() {
            return LoadOutcome::Skipped;
        }

        let request = self.next_request();
        let result = {
            let _loading = LoadingFlag::raise(&mut self.is_loading);
            fetcher.fetch_page(request.page, request.page_size)
        };

        self.apply(PageResponse { request, result })
    }

    fn next_request(&self) -> PageRequest {
        PageRequest {
            page: self.current_page,
            page_size: self.page_size,
        }
    }

    fn apply(&mut self, response: PageResponse) -> LoadOutcome {
        let PageResponse { request, result } = response;
        match result {
            Ok(records) => {
                let appended = records.len();
                self.books.extend(records);
                self.current_page += 1;
                if appended < self.page_size as usize {
                    self.has_more = false;
                }
                info!(
                    page = request.page,
                    appended,
                    total = self.books.len(),
                    has_more = self.has_more,
                    "Catalog page loaded"
                );
                LoadOutcome::Loaded {
                    appended,
                    initial: request.page == self.initial_page,
                }
            }
            Err(error) => {
                self.has_more = false;
                warn!(page = request.page, %error, "Catalog page failed; pagination stopped");
                LoadOutcome::Failed(error)
            }
        }
    }
}

/// Holds the loading flag up for as long as it lives.
struct LoadingFlag<'a> {
    flag: &'a mut bool,
}

impl<'a> LoadingFlag<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
