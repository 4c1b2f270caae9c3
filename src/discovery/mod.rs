//! Discovery heuristics
//!
//! The staged heuristics that turn a homepage into job postings:
//!
//! 1. [`careers`]: homepage -> careers page (link keywords, then path probes)
//! 2. [`listing`]: careers page -> listing page (CTA text, then ATS link)
//! 3. [`jobs`]: listing page -> postings (allow/deny tokens, dedup, cap)
//! 4. [`enrich`]: posting page -> location and posted date (optional)
//! 5. [`linkedin`]: website -> postings on the company's LinkedIn jobs page
//!
//! Anchor scanning is done by pure functions over `&[Anchor]`; the async
//! wrappers only add the fetch in front of them.

pub mod careers;
pub mod enrich;
pub mod jobs;
pub mod linkedin;
pub mod listing;

pub use careers::{find_career_anchor, locate_careers_page};
pub use enrich::{enrich_posting, find_posted_date, month_stamp};
pub use jobs::{extract_jobs, select_job_candidates, split_title_location, LocationMatcher};
pub use linkedin::{linkedin_jobs, select_linkedin_candidates};
pub use listing::{find_listing_anchor, locate_listing_page, ListingPage};

use crate::config::Config;
use crate::ConfigError;

/// Compiled discovery vocabulary shared by every company of a run
///
/// All token lists are lower-cased once here so the scanners can compare
/// against lower-cased anchor text and hrefs directly.
#[derive(Debug, Clone)]
pub struct Heuristics {
    pub career_keywords: Vec<String>,
    pub career_path_probe: Vec<String>,
    pub cta_phrases: Vec<String>,
    pub ats_domains: Vec<String>,
    pub href_allowlist: Vec<String>,
    pub href_denylist: Vec<String>,
    pub title_denylist: Vec<String>,
    pub min_title_length: usize,
    pub max_jobs: usize,
    pub enrich_job_details: bool,
    pub locations: LocationMatcher,
    pub linkedin_enabled: bool,
    pub linkedin_base_url: String,
}

impl Heuristics {
    /// Compiles the heuristics from a validated configuration
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let locations = LocationMatcher::new(&config.extraction.location_vocabulary)
            .map_err(|e| ConfigError::Validation(format!("location-vocabulary: {}", e)))?;

        Ok(Self {
            career_keywords: lowered(&config.discovery.career_keywords),
            career_path_probe: config.discovery.career_path_probe.clone(),
            cta_phrases: lowered(&config.discovery.cta_phrases),
            ats_domains: lowered(&config.discovery.ats_domains),
            href_allowlist: lowered(&config.extraction.href_allowlist),
            href_denylist: lowered(&config.extraction.href_denylist),
            title_denylist: lowered(&config.extraction.title_denylist),
            min_title_length: config.extraction.min_title_length,
            max_jobs: config.extraction.max_jobs_per_company,
            enrich_job_details: config.extraction.enrich_job_details,
            locations,
            linkedin_enabled: config.linkedin.enabled,
            linkedin_base_url: config.linkedin.base_url.clone(),
        })
    }

    /// Returns true if anchor text is long enough and is not navigation
    pub fn is_valid_title(&self, text: &str) -> bool {
        if text.chars().count() < self.min_title_length {
            return false;
        }
        let lower = text.to_lowercase();
        !contains_any(&lower, &self.title_denylist)
    }
}

/// Returns true if `haystack` contains any of the (lower-cased) needles
pub(crate) fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}

fn lowered(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
