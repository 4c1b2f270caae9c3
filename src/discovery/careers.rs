//! Careers page locator

use crate::crawler::{Anchor, Fetch};
use crate::discovery::{contains_any, Heuristics};
use crate::url::probe_url;
use url::Url;

/// Returns the first anchor whose text or href contains a careers keyword
///
/// Anchors are examined in document order and the scan stops at the first
/// hit; later, possibly better, candidates are never looked at.
pub fn find_career_anchor<'a>(anchors: &'a [Anchor], keywords: &[String]) -> Option<&'a Anchor> {
    anchors.iter().find(|anchor| {
        contains_any(&anchor.text_lower(), keywords) || contains_any(&anchor.href_lower(), keywords)
    })
}

/// Locates the careers page of a company
///
/// 1. Fetch the homepage; give up if it cannot be fetched
/// 2. Return the first homepage link matching a careers keyword
/// 3. Otherwise probe the configured path suffixes in order and return the
///    first one that fetches successfully
pub async fn locate_careers_page<F: Fetch>(
    fetcher: &F,
    homepage: &Url,
    heuristics: &Heuristics,
) -> Option<Url> {
    let document = fetcher.fetch(homepage).await.into_document()?;

    if let Some(anchor) = find_career_anchor(&document.anchors, &heuristics.career_keywords) {
        tracing::debug!("Careers link on {}: {:?} -> {}", homepage, anchor.text, anchor.url);
        return Some(anchor.url.clone());
    }

    for suffix in &heuristics.career_path_probe {
        let Some(candidate) = probe_url(homepage, suffix) else {
            continue;
        };

        if fetcher.fetch(&candidate).await.is_success() {
            tracing::debug!("Careers page found by probing {}", candidate);
            return Some(candidate);
        }
    }

    tracing::debug!("No careers page for {}", homepage);
    None
}
