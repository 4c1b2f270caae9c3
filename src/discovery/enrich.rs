//! Posting enrichment from individual job pages
//!
//! Visits a posting's own page to fill in what the listing anchor did not
//! carry: the location (first vocabulary term in the page text) and the
//! posting date.
//!
//! # Posted date sources, in order
//!
//! 1. schema.org `datePosted` inside a JSON-LD block
//! 2. A "Posted on <date>" phrase in the visible text
//! 3. The run date as a "Month YYYY" stamp
//!
//! A discovered date later than the run date is ignored, so a past date is
//! never invented.

use crate::crawler::{Document, Fetch};
use crate::discovery::LocationMatcher;
use crate::model::JobPosting;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static RE_DATE_POSTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""datePosted"\s*:\s*"([^"]+)""#).expect("datePosted pattern is valid")
});

static RE_POSTED_ON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)posted\s*(?:on)?\s*:?\s*(\d{4}-\d{2}-\d{2}|[a-z]{3,9}\.?\s+\d{1,2},?\s+\d{4}|\d{1,2}\s+[a-z]{3,9}\.?,?\s+\d{4})",
    )
    .expect("posted-on pattern is valid")
});

/// Date layouts accepted in page text
const TEXT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Formats the run date as the fallback posting stamp ("June 2024")
pub fn month_stamp(today: NaiveDate) -> String {
    today.format("%B %Y").to_string()
}

/// Fills in location and posted date from the posting's own page
///
/// A location already split from the anchor text is kept. If the page
/// cannot be fetched the posting is kept as it was, stamped with the run
/// month.
pub async fn enrich_posting<F: Fetch>(
    fetcher: &F,
    mut job: JobPosting,
    locations: &LocationMatcher,
    today: NaiveDate,
) -> JobPosting {
    let document = fetcher.fetch(&job.url).await.into_document();

    if let Some(document) = &document {
        if !job.has_location() {
            if let Some((_, term)) = locations.find(&document.text) {
                job.location = term;
            }
        }
    }

    job.posted_at = document
        .as_ref()
        .and_then(|d| find_posted_date(d, today))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| month_stamp(today));

    job
}

/// Finds the posting date of a job page, if the page publishes one
pub fn find_posted_date(document: &Document, today: NaiveDate) -> Option<NaiveDate> {
    let from_structured = document.structured_data.iter().find_map(|block| {
        RE_DATE_POSTED
            .captures(block)
            .and_then(|caps| parse_iso_prefix(&caps[1]))
    });

    let date = from_structured.or_else(|| {
        RE_POSTED_ON
            .captures(&document.text)
            .and_then(|caps| parse_text_date(&caps[1]))
    })?;

    if date > today {
        tracing::debug!("Ignoring future posting date {} on {}", date, document.url);
        return None;
    }
    Some(date)
}

/// Parses the `YYYY-MM-DD` head of an ISO 8601 date or timestamp
fn parse_iso_prefix(value: &str) -> Option<NaiveDate> {
    let head = value.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

fn parse_text_date(value: &str) -> Option<NaiveDate> {
    let cleaned = value.replace('.', "");
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    TEXT_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
}
