//! Politeness layers for fetchers
//!
//! - [`ThrottledFetcher`] enforces a minimum delay between two requests to
//!   the same host, shared by every company task of a run.
//! - [`CountingFetcher`] counts the requests one company issued, so the
//!   coordinator can decide whether a cooldown is due.
//!
//! Neither layer changes what a fetch returns.

use crate::crawler::fetcher::{Fetch, FetchResult};
use crate::url::host_key;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use url::Url;

/// A [`Fetch`] wrapper that enforces a per-host minimum delay
///
/// Each request reserves the next free slot for its host while holding the
/// lock, then sleeps outside it. Two tasks targeting the same host are
/// therefore spaced by at least `delay` even when they arrive together.
#[derive(Clone)]
pub struct ThrottledFetcher<F> {
    inner: F,
    delay: Duration,
    /// Next instant at which each host may be contacted
    next_slot: Arc<Mutex<HashMap<String, Instant>>>,
}

impl<F: Fetch> ThrottledFetcher<F> {
    pub fn new(inner: F, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            next_slot: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Reserves a slot for the host and returns how long to wait for it
    async fn reserve(&self, host: &str) -> Duration {
        let mut slots = self.next_slot.lock().await;
        let now = Instant::now();

        let slot = match slots.get(host) {
            Some(&next) if next > now => next,
            _ => now,
        };
        slots.insert(host.to_string(), slot + self.delay);

        slot.saturating_duration_since(now)
    }
}

impl<F: Fetch> Fetch for ThrottledFetcher<F> {
    async fn fetch(&self, url: &Url) -> FetchResult {
        if !self.delay.is_zero() {
            if let Some(host) = host_key(url) {
                let wait = self.reserve(&host).await;
                if !wait.is_zero() {
                    tracing::trace!(host = %host, wait_ms = wait.as_millis() as u64, "Throttling request");
                    tokio::time::sleep(wait).await;
                }
            }
        }

        self.inner.fetch(url).await
    }
}

/// A [`Fetch`] wrapper that counts issued requests
pub struct CountingFetcher<F> {
    inner: F,
    requests: AtomicUsize,
}

impl<F: Fetch> CountingFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            requests: AtomicUsize::new(0),
        }
    }

    /// Number of requests issued so far
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }
}

impl<F: Fetch> Fetch for CountingFetcher<F> {
    async fn fetch(&self, url: &Url) -> FetchResult {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.inner.fetch(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::StaticFetcher;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_throttle_spaces_same_host() {
        let inner = StaticFetcher::new().with_page("https://acme.io/a", "<html></html>");
        let fetcher = ThrottledFetcher::new(inner, Duration::from_millis(100));

        let start = std::time::Instant::now();
        fetcher.fetch(&url("https://acme.io/a")).await;
        fetcher.fetch(&url("https://acme.io/b")).await;

        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_throttle_ignores_other_hosts() {
        let inner = StaticFetcher::new();
        let fetcher = ThrottledFetcher::new(inner, Duration::from_millis(300));

        let start = std::time::Instant::now();
        fetcher.fetch(&url("https://acme.io/")).await;
        fetcher.fetch(&url("https://globex.com/")).await;

        assert!(start.elapsed() < Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_throttle_passes_results_through() {
        let inner = StaticFetcher::new().with_page("https://acme.io/", "<title>Acme</title>");
        let fetcher = ThrottledFetcher::new(inner, Duration::ZERO);

        let document = fetcher.fetch(&url("https://acme.io/")).await.into_document();
        assert_eq!(document.unwrap().title, Some("Acme".to_string()));

        let missing = fetcher.fetch(&url("https://acme.io/missing")).await;
        assert!(!missing.is_success());
    }

    #[tokio::test]
    async fn test_counting_fetcher_counts_failures_too() {
        let inner = StaticFetcher::new().with_page("https://acme.io/", "<html></html>");
        let fetcher = CountingFetcher::new(inner);

        fetcher.fetch(&url("https://acme.io/")).await;
        fetcher.fetch(&url("https://acme.io/careers")).await;

        assert_eq!(fetcher.request_count(), 2);
    }
}
