//! Remote catalog access.
//!
//! This module provides everything between the UI and the network:
//! - [`CatalogFetcher`]: one paginated fetch, as a trait so tests can script it
//! - [`HttpCatalogClient`]: the reqwest-backed implementation
//! - [`PageLoader`]: request/response channel the event loop polls, with a
//!   background-thread ([`FetchWorker`]) and an inline ([`ImmediateLoader`]) variant

use crate::model::{BookRecord, RemoteFetchError};

pub mod client;
pub mod scripted;
pub mod worker;

pub use client::{parse_page_body, HttpCatalogClient, DEFAULT_ENDPOINT};
pub use scripted::ScriptedCatalog;
pub use worker::{FetchWorker, ImmediateLoader};

/// Fetches one page of book records.
pub trait CatalogFetcher: Send {
    /// Fetch `page` (1-based) holding up to `page_size` records.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFetchError` on transport failure, non-success status or a
    /// body that is not JSON.
    fn fetch_page(&self, page: u32, page_size: u32) -> Result<Vec<BookRecord>, RemoteFetchError>;
}

/// A page the pagination state wants fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Records requested per page.
    pub page_size: u32,
}

/// Outcome of a [`PageRequest`].
#[derive(Debug)]
pub struct PageResponse {
    /// The request this answers.
    pub request: PageRequest,
    /// Fetched records, or why the fetch failed.
    pub result: Result<Vec<BookRecord>, RemoteFetchError>,
}

impl PageRequest {
    /// Run the request against a fetcher.
    pub fn execute(self, fetcher: &dyn CatalogFetcher) -> PageResponse {
        PageResponse {
            request: self,
            result: fetcher.fetch_page(self.page, self.page_size),
        }
    }
}

/// Asynchronous delivery of page fetches to the event loop.
///
/// The event loop submits at most one request at a time (guarded by
/// `PaginationState::is_loading`) and polls for its response on every tick.
pub trait PageLoader {
    /// Start fetching `request`.
    fn submit(&mut self, request: PageRequest);

    /// Non-blocking: the finished response, if one is ready.
    fn poll(&mut self) -> Option<PageResponse>;
}
