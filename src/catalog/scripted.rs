//! Offline catalog that replays scripted pages.
//!
//! Used by the test harness and integration tests in place of the
//! network. Clones share the same script and call log.

use super::{CatalogFetcher, PageRequest};
use crate::model::{BookRecord, RemoteFetchError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Catalog whose responses are queued up front.
///
/// Each `fetch_page` pops the next scripted response. Once the script is
/// exhausted every fetch returns an empty page.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCatalog {
    inner: Arc<Mutex<Script>>,
}

#[derive(Debug, Default)]
struct Script {
    responses: VecDeque<Result<Vec<BookRecord>, RemoteFetchError>>,
    calls: Vec<PageRequest>,
}

impl ScriptedCatalog {
    /// Empty script: every fetch returns an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful page.
    pub fn push_page(&self, books: Vec<BookRecord>) {
        self.lock().responses.push_back(Ok(books));
    }

    /// Queue a failed fetch.
    pub fn push_error(&self, error: RemoteFetchError) {
        self.lock().responses.push_back(Err(error));
    }

    /// Every request received so far, in order.
    pub fn calls(&self) -> Vec<PageRequest> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        // A panic while holding the lock only happens inside a failing test
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CatalogFetcher for ScriptedCatalog {
    fn fetch_page(&self, page: u32, page_size: u32) -> Result<Vec<BookRecord>, RemoteFetchError> {
        let mut script = self.lock();
        script.calls.push(PageRequest { page, page_size });
        script.responses.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}
