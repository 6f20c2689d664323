//! Page loaders: background-thread and inline.

use super::{CatalogFetcher, PageLoader, PageRequest, PageResponse};
use crate::model::RemoteFetchError;
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Runs catalog fetches on a dedicated thread.
///
/// Requests go in over one channel and responses come back over another, so the
/// UI thread never blocks on the network. The thread exits when the worker is
/// dropped (its request sender closes).
///
/// If the thread dies early (a panicking fetcher), every request it never
/// answered comes back from [`PageLoader::poll`] as a transport error, so the
/// pagination state never waits on a response that cannot arrive.
pub struct FetchWorker {
    requests: Option<Sender<PageRequest>>,
    responses: Receiver<PageResponse>,
    handle: Option<JoinHandle<()>>,
    // Submitted but not yet answered, oldest first
    in_flight: VecDeque<PageRequest>,
}

impl FetchWorker {
    /// Spawn the worker thread owning `fetcher`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the OS refuses to create the thread.
    pub fn spawn<F>(fetcher: F) -> std::io::Result<Self>
    where
        F: CatalogFetcher + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel::<PageRequest>();
        let (response_tx, response_rx) = mpsc::channel::<PageResponse>();

        let handle = thread::Builder::new()
            .name("catalog-fetch".to_string())
            .spawn(move || {
                for request in request_rx {
                    debug!(page = request.page, "Fetch worker picked up request");
                    let response = request.execute(&fetcher);
                    if response_tx.send(response).is_err() {
                        // UI side is gone
                        break;
                    }
                }
            })?;

        Ok(Self {
            requests: Some(request_tx),
            responses: response_rx,
            handle: Some(handle),
            in_flight: VecDeque::new(),
        })
    }
}

impl PageLoader for FetchWorker {
    fn submit(&mut self, request: PageRequest) {
        self.in_flight.push_back(request);
        let sent = self
            .requests
            .as_ref()
            .map(|tx| tx.send(request).is_ok())
            .unwrap_or(false);
        if !sent {
            warn!(page = request.page, "Fetch worker is not running; request will fail");
        }
    }

    fn poll(&mut self) -> Option<PageResponse> {
        match self.responses.try_recv() {
            Ok(response) => {
                if let Some(pos) = self.in_flight.iter().position(|r| *r == response.request) {
                    self.in_flight.remove(pos);
                }
                Some(response)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                let request = self.in_flight.pop_front()?;
                warn!(page = request.page, "Fetch worker thread terminated");
                Some(PageResponse {
                    request,
                    result: Err(RemoteFetchError::transport(
                        "fetch worker stopped before answering",
                    )),
                })
            }
        }
    }
}

impl Drop for FetchWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            // An in-flight fetch is never cancelled; don't wait for it
            if handle.is_finished() {
                let _ = handle.join();
            }
        }
    }
}

/// Runs each fetch inline at submit time and releases it on the next poll.
///
/// Keeps the submit/poll split of [`FetchWorker`] while staying deterministic,
/// which is what the headless test harness needs.
pub struct ImmediateLoader<F> {
    fetcher: F,
    ready: VecDeque<PageResponse>,
}

impl<F: CatalogFetcher> ImmediateLoader<F> {
    /// Wrap `fetcher`.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            ready: VecDeque::new(),
        }
    }

    /// Whether a response is waiting to be polled.
    pub fn has_pending(&self) -> bool {
        !self.ready.is_empty()
    }
}

impl<F: CatalogFetcher> PageLoader for ImmediateLoader<F> {
    fn submit(&mut self, request: PageRequest) {
        self.ready.push_back(request.execute(&self.fetcher));
    }

    fn poll(&mut self) -> Option<PageResponse> {
        self.ready.pop_front()
    }
}
