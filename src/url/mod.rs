//! URL handling module for Career-Scout
//!
//! This module provides website normalization, probe URL construction,
//! host extraction and LinkedIn slug derivation.

mod domain;
mod normalize;

pub use domain::{company_slug, extract_domain, host_key};
pub use normalize::{normalize_website, probe_url};

use url::Url;

/// Builds the LinkedIn jobs URL for a company slug
///
/// # Examples
///
/// ```
/// use career_scout::url::linkedin_jobs_url;
///
/// let url = linkedin_jobs_url("https://www.linkedin.com", "acme").unwrap();
/// assert_eq!(url.as_str(), "https://www.linkedin.com/company/acme/jobs/");
/// ```
pub fn linkedin_jobs_url(base: &str, slug: &str) -> Option<Url> {
    let base = base.trim_end_matches('/');
    Url::parse(&format!("{}/company/{}/jobs/", base, slug)).ok()
}
