//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made by the pipeline:
//! - Building an HTTP client with a browser-like user agent and a fixed timeout
//! - Issuing a single GET per call (no retries)
//! - Parsing successful bodies into a [`Document`]
//! - Collapsing every other outcome into a [`FetchFailure`]
//!
//! Consumers only see "document" or "failure". The failure reason is kept
//! for logging; no pipeline stage branches on it.

use crate::config::FetcherConfig;
use crate::crawler::parser::{parse_html, Document};
use reqwest::{redirect::Policy, Client};
use std::fmt;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// Why a fetch did not produce a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Response status was 400 or above
    HttpStatus(u16),

    /// The request did not complete within the timeout
    Timeout,

    /// Connection refused, DNS failure, TLS failure
    Connect(String),

    /// The body was not a markup document
    ContentMismatch(String),

    /// Anything else (body read errors, redirect limits, ...)
    Network(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpStatus(code) => write!(f, "HTTP {}", code),
            Self::Timeout => write!(f, "request timeout"),
            Self::Connect(e) => write!(f, "connection failed: {}", e),
            Self::ContentMismatch(ct) => write!(f, "unexpected content type: {}", ct),
            Self::Network(e) => write!(f, "network error: {}", e),
        }
    }
}

/// A failed fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// The URL that was requested
    pub url: String,

    /// Informational cause
    pub reason: FailureReason,
}

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// The page was fetched and parsed
    Success(Document),

    /// The page could not be fetched or was not usable
    Failure(FetchFailure),
}

impl FetchResult {
    /// Builds a failure result for a URL
    pub fn failure(url: &Url, reason: FailureReason) -> Self {
        Self::Failure(FetchFailure {
            url: url.to_string(),
            reason,
        })
    }

    /// Returns the parsed document, logging and discarding a failure
    pub fn into_document(self) -> Option<Document> {
        match self {
            Self::Success(document) => Some(document),
            Self::Failure(failure) => {
                tracing::debug!("Fetch failed for {}: {}", failure.url, failure.reason);
                None
            }
        }
    }

    /// Returns true if the fetch produced a document
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Anything that can turn a URL into a [`FetchResult`]
///
/// The pipeline is generic over this trait so rate limiting and request
/// counting can be layered on top of the HTTP client, and so heuristics can
/// be exercised against in-memory pages.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &Url) -> impl Future<Output = FetchResult> + Send;
}

impl<T: Fetch> Fetch for &T {
    fn fetch(&self, url: &Url) -> impl Future<Output = FetchResult> + Send {
        (**self).fetch(url)
    }
}

impl<T: Fetch> Fetch for std::sync::Arc<T> {
    fn fetch(&self, url: &Url) -> impl Future<Output = FetchResult> + Send {
        (**self).fetch(url)
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use career_scout::config::FetcherConfig;
/// use career_scout::crawler::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetcher backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher from the fetcher configuration
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Wraps an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult {
        fetch_url(&self.client, url).await
    }
}

/// Fetches a URL and parses the body
///
/// # Outcome Rules
///
/// | Condition | Result |
/// |-----------|--------|
/// | Status < 400, markup body | Success |
/// | Status >= 400 | Failure (HttpStatus) |
/// | Timeout | Failure (Timeout) |
/// | Connection refused / DNS / TLS | Failure (Connect) |
/// | Binary content type (pdf, image, ...) | Failure (ContentMismatch) |
/// | Body read error, redirect limit | Failure (Network) |
pub async fn fetch_url(client: &Client, url: &Url) -> FetchResult {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => return FetchResult::failure(url, classify_error(&e)),
    };

    let status = response.status();
    if status.as_u16() >= 400 {
        return FetchResult::failure(url, FailureReason::HttpStatus(status.as_u16()));
    }

    let final_url = response.url().clone();

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_lowercase();

    if !is_markup_content_type(&content_type) {
        return FetchResult::failure(url, FailureReason::ContentMismatch(content_type));
    }

    match response.text().await {
        Ok(body) => FetchResult::Success(parse_html(&body, &final_url)),
        Err(e) => FetchResult::failure(url, classify_error(&e)),
    }
}

/// Maps a reqwest error onto a failure reason
fn classify_error(e: &reqwest::Error) -> FailureReason {
    if e.is_timeout() {
        FailureReason::Timeout
    } else if e.is_connect() {
        FailureReason::Connect(e.to_string())
    } else {
        FailureReason::Network(e.to_string())
    }
}

/// Returns true for content types that can carry parseable markup
///
/// A missing header is accepted; plenty of small sites never send one.
fn is_markup_content_type(content_type: &str) -> bool {
    content_type.is_empty()
        || content_type.contains("html")
        || content_type.contains("xml")
        || content_type.starts_with("text/")
}
