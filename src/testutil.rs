//! In-memory fetcher for unit tests

use crate::crawler::{parse_html, FailureReason, Fetch, FetchResult};
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

/// Serves fixed HTML pages by exact URL; every other URL is a 404
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        let key = Url::parse(url).unwrap().to_string();
        self.pages.insert(key, html.to_string());
        self
    }

    /// URLs requested so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Fetch for StaticFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult {
        self.requested.lock().unwrap().push(url.to_string());

        match self.pages.get(url.as_str()) {
            Some(html) => FetchResult::Success(parse_html(html, url)),
            None => FetchResult::failure(url, FailureReason::HttpStatus(404)),
        }
    }
}
