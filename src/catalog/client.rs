//! HTTP client for the remote book catalog.

use super::CatalogFetcher;
use crate::model::{AppError, BookRecord, RemoteFetchError};
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// Catalog endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.freeapi.app/api/v1/public/books";

/// Total time allowed per request. A slow catalog is waited on indefinitely.
pub const REQUEST_TIMEOUT: Option<Duration> = None;

/// Blocking reqwest-based catalog client.
///
/// Issues exactly one `GET <endpoint>?limit=<page_size>&page=<page>` per call.
/// No retry and no timeout: the blocking client's 30 s default is switched off.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    endpoint: Url,
    http: reqwest::blocking::Client,
}

impl HttpCatalogClient {
    /// Create a client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidEndpoint` if the endpoint is not an absolute URL,
    /// or `AppError::HttpClient` if the TLS backend cannot be initialized.
    pub fn new(endpoint: &str) -> Result<Self, AppError> {
        let endpoint = Url::parse(endpoint).map_err(|e| AppError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("bookscroll/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { endpoint, http })
    }

    /// Full request URL for a page.
    pub fn page_url(&self, page: u32, page_size: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("limit", &page_size.to_string())
            .append_pair("page", &page.to_string());
        url
    }
}

impl CatalogFetcher for HttpCatalogClient {
    fn fetch_page(&self, page: u32, page_size: u32) -> Result<Vec<BookRecord>, RemoteFetchError> {
        let url = self.page_url(page, page_size);
        debug!(%url, "Requesting catalog page");

        let response = self
            .http
            .get(url)
            .send()
            .map_err(RemoteFetchError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteFetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(RemoteFetchError::transport)?;
        parse_page_body(&body)
    }
}

/// Extract the book list from a catalog response body.
///
/// The records live at `data.data`. A missing or non-array field yields an empty
/// page; only a body that is not JSON at all is an error.
///
/// # Errors
///
/// Returns `RemoteFetchError::InvalidBody` when `body` is not valid JSON.
pub fn parse_page_body(body: &str) -> Result<Vec<BookRecord>, RemoteFetchError> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    let books = match value.pointer("/data/data") {
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .cloned()
            .map(BookRecord::from_json)
            .collect(),
        _ => Vec::new(),
    };

    Ok(books)
}
