//! Job posting extraction
//!
//! Postings are picked from a listing page's anchors:
//!
//! 1. Reject anchors whose text is too short or reads like navigation
//! 2. Reject anchors whose href carries a denylist token
//! 3. Keep only anchors whose href carries an allowlist token
//! 4. Skip URLs already accepted in this pass (first seen wins)
//! 5. Stop as soon as the cap is reached
//!
//! When the anchor text names a known location ("Backend Engineer - Remote")
//! the location is split off the title without any extra request.

use crate::crawler::{Anchor, Fetch};
use crate::discovery::{contains_any, enrich_posting, Heuristics};
use crate::model::JobPosting;
use chrono::NaiveDate;
use regex::{Match, Regex};
use std::collections::HashSet;
use url::Url;

/// Characters trimmed from a title once the location is cut out of it
const TITLE_SEPARATORS: &[char] = &[' ', '-', '–', '—', ',', '|', '(', ')'];

/// Case-insensitive matcher over the configured location vocabulary
///
/// Hyphens in a term also match a space, so `On-site` finds "on site".
/// A match always reports the term as configured, not as written on the
/// page.
#[derive(Debug, Clone)]
pub struct LocationMatcher {
    regex: Option<Regex>,
    terms: Vec<String>,
}

impl LocationMatcher {
    pub fn new(vocabulary: &[String]) -> Result<Self, regex::Error> {
        let terms: Vec<String> = vocabulary
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        if terms.is_empty() {
            return Ok(Self { regex: None, terms });
        }

        let alternation = terms
            .iter()
            .map(|term| {
                regex::escape(term)
                    .replace(r"\-", "-")
                    .replace('-', "[- ]")
            })
            .collect::<Vec<_>>()
            .join("|");

        let regex = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))?;
        Ok(Self {
            regex: Some(regex),
            terms,
        })
    }

    /// Finds the first location mention in `text`
    ///
    /// Returns the match within `text` and the canonical vocabulary term.
    pub fn find<'t>(&self, text: &'t str) -> Option<(Match<'t>, String)> {
        let found = self.regex.as_ref()?.find(text)?;
        let key = fold(found.as_str());

        let term = self
            .terms
            .iter()
            .find(|term| fold(term) == key)
            .cloned()
            .unwrap_or_else(|| found.as_str().to_string());

        Some((found, term))
    }
}

fn fold(s: &str) -> String {
    s.to_lowercase().replace(' ', "-")
}

/// Splits a location mention off an anchor text
///
/// Returns the cleaned title and the location, if any. A text that is
/// nothing but a location keeps its full text as the title.
pub fn split_title_location(text: &str, locations: &LocationMatcher) -> (String, Option<String>) {
    let Some((found, term)) = locations.find(text) else {
        return (text.to_string(), None);
    };

    let remainder = format!("{} {}", &text[..found.start()], &text[found.end()..]);
    let title = remainder
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let title = title.trim_matches(TITLE_SEPARATORS);

    if title.is_empty() {
        (text.to_string(), Some(term))
    } else {
        (title.to_string(), Some(term))
    }
}

/// Selects job postings from a listing page's anchors
///
/// Pure and deterministic: the same anchors always give the same postings
/// in the same order. At most `heuristics.max_jobs` postings are returned.
pub fn select_job_candidates(anchors: &[Anchor], heuristics: &Heuristics) -> Vec<JobPosting> {
    let mut jobs = Vec::new();
    let mut seen: HashSet<&Url> = HashSet::new();

    for anchor in anchors {
        if jobs.len() >= heuristics.max_jobs {
            break;
        }

        if !heuristics.is_valid_title(&anchor.text) {
            tracing::trace!("Rejected title {:?}", anchor.text);
            continue;
        }

        let href = anchor.href_lower();
        if contains_any(&href, &heuristics.href_denylist) {
            tracing::trace!("Rejected denylisted href {}", anchor.href);
            continue;
        }
        if !contains_any(&href, &heuristics.href_allowlist) {
            continue;
        }

        if !seen.insert(&anchor.url) {
            continue;
        }

        let (title, location) = split_title_location(&anchor.text, &heuristics.locations);
        let mut job = JobPosting::new(title, anchor.url.clone());
        if let Some(location) = location {
            job.location = location;
        }
        jobs.push(job);
    }

    jobs
}

/// Extracts up to `max_jobs` postings from a listing page
///
/// An unreachable listing page gives an empty list, exactly like a page
/// without postings. In enrichment mode each posting's page is visited in
/// turn for its location and posted date.
pub async fn extract_jobs<F: Fetch>(
    fetcher: &F,
    listing: &Url,
    heuristics: &Heuristics,
    today: NaiveDate,
) -> Vec<JobPosting> {
    let Some(document) = fetcher.fetch(listing).await.into_document() else {
        return Vec::new();
    };

    let candidates = select_job_candidates(&document.anchors, heuristics);
    tracing::debug!("{} posting(s) on {}", candidates.len(), listing);

    if !heuristics.enrich_job_details {
        return candidates;
    }

    let mut jobs = Vec::with_capacity(candidates.len());
    for job in candidates {
        jobs.push(enrich_posting(fetcher, job, &heuristics.locations, today).await);
    }
    jobs
}
