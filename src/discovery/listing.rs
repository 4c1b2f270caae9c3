//! Listing page locator

use crate::crawler::{Anchor, Fetch};
use crate::discovery::{contains_any, Heuristics};
use url::Url;

/// Outcome of refining a careers page into a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// The page to extract postings from
    pub url: Url,

    /// Whether the careers page could be fetched during refinement
    pub careers_reachable: bool,
}

/// Finds the link from a careers page to its listing page
///
/// A call-to-action text match always beats an ATS domain match, even when
/// the ATS link appears earlier in the document.
pub fn find_listing_anchor<'a>(
    anchors: &'a [Anchor],
    cta_phrases: &[String],
    ats_domains: &[String],
) -> Option<&'a Anchor> {
    anchors
        .iter()
        .find(|anchor| contains_any(&anchor.text_lower(), cta_phrases))
        .or_else(|| {
            anchors
                .iter()
                .find(|anchor| contains_any(&anchor.href_lower(), ats_domains))
        })
}

/// Locates the listing page behind a careers page
///
/// Never fails: when the careers page is unreachable or has no better link,
/// the careers page itself is the listing page.
pub async fn locate_listing_page<F: Fetch>(
    fetcher: &F,
    careers: &Url,
    heuristics: &Heuristics,
) -> ListingPage {
    let Some(document) = fetcher.fetch(careers).await.into_document() else {
        return ListingPage {
            url: careers.clone(),
            careers_reachable: false,
        };
    };

    let url = match find_listing_anchor(
        &document.anchors,
        &heuristics.cta_phrases,
        &heuristics.ats_domains,
    ) {
        Some(anchor) => {
            tracing::debug!("Listing link on {}: {}", careers, anchor.url);
            anchor.url.clone()
        }
        None => careers.clone(),
    };

    ListingPage {
        url,
        careers_reachable: true,
    }
}
