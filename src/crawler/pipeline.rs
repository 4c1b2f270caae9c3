//! Per-company pipeline
//!
//! Sequences the discovery stages for one company and turns the outcome into
//! a [`CompanyResult`]:
//!
//! ```text
//! website -> normalize -> careers page -> listing page -> postings
//!                                                            |
//!                                          (empty) -> LinkedIn fallback
//! ```
//!
//! Nothing here returns an error. Every fetch failure or heuristic miss is
//! folded into the company's [`StatusCode`].

use crate::config::Config;
use crate::crawler::Fetch;
use crate::discovery::{
    extract_jobs, linkedin_jobs, locate_careers_page, locate_listing_page, Heuristics, ListingPage,
};
use crate::model::{Company, CompanyResult, JobPosting, StatusCode};
use crate::ranking::Ranker;
use crate::url::normalize_website;
use crate::ConfigError;
use chrono::NaiveDate;
use url::Url;

/// Discovery pipeline shared by every company of a run
#[derive(Debug, Clone)]
pub struct Pipeline {
    heuristics: Heuristics,
    ranker: Ranker,
    today: NaiveDate,
}

impl Pipeline {
    /// Builds the pipeline for a run
    ///
    /// `today` is the run date, used only for synthesized posting stamps.
    pub fn new(config: &Config, today: NaiveDate) -> Result<Self, ConfigError> {
        Ok(Self {
            heuristics: Heuristics::from_config(config)?,
            ranker: Ranker::new(&config.ranking, config.extraction.max_jobs_per_company),
            today,
        })
    }

    pub fn heuristics(&self) -> &Heuristics {
        &self.heuristics
    }

    /// Runs every stage for one company
    ///
    /// `index` is the company's zero-based input position.
    pub async fn process<F: Fetch>(&self, fetcher: &F, company: Company, index: usize) -> CompanyResult {
        let website = match company.website.as_deref().map(normalize_website) {
            Some(Ok(url)) => url,
            Some(Err(e)) => {
                tracing::debug!("{}: invalid website: {}", company.name, e);
                return self.invalid(company, index);
            }
            None => {
                tracing::debug!("{}: no website", company.name);
                return self.invalid(company, index);
            }
        };

        let careers_page = locate_careers_page(fetcher, &website, &self.heuristics).await;

        let mut listing: Option<ListingPage> = None;
        let mut jobs = Vec::new();
        if let Some(careers) = &careers_page {
            let page = locate_listing_page(fetcher, careers, &self.heuristics).await;
            jobs = extract_jobs(fetcher, &page.url, &self.heuristics, self.today).await;
            listing = Some(page);
        }

        let found_on_site = !jobs.is_empty();
        if !found_on_site && self.heuristics.linkedin_enabled {
            jobs = linkedin_jobs(fetcher, &website, &self.heuristics).await;
        }

        let status = resolve_status(
            careers_page.is_some(),
            listing.as_ref().map(|l| l.careers_reachable).unwrap_or(false),
            found_on_site,
            !jobs.is_empty(),
        );

        tracing::info!(
            "[{}] {}: {} ({} posting(s))",
            index + 1,
            company.name,
            status.label(),
            jobs.len()
        );

        self.finish(
            company,
            careers_page,
            listing.map(|l| l.url),
            jobs,
            status,
            index,
        )
    }

    /// Result for a company whose website is unusable or that never ran
    pub fn invalid(&self, company: Company, index: usize) -> CompanyResult {
        self.finish(company, None, None, Vec::new(), StatusCode::InvalidWebsite, index)
    }

    fn finish(
        &self,
        company: Company,
        careers_page: Option<Url>,
        listing_page: Option<Url>,
        mut jobs: Vec<JobPosting>,
        status: StatusCode,
        index: usize,
    ) -> CompanyResult {
        jobs.truncate(self.heuristics.max_jobs);
        let rank = self.ranker.rank(&company, status, &jobs, index);

        CompanyResult {
            company,
            careers_page,
            listing_page,
            jobs,
            status,
            rank,
        }
    }
}

/// Maps a pipeline outcome onto a status
///
/// | Careers page | Reachable | Site postings | Any postings | Status |
/// |---|---|---|---|---|
/// | any | any | yes | yes | `JobsFoundOnSite` |
/// | any | any | no | yes | `JobsOnLinkedIn` |
/// | no | - | no | no | `NoCareersPage` |
/// | yes | yes | no | no | `CareersPageNoJobs` |
/// | yes | no | no | no | `NoJobsFound` |
fn resolve_status(
    careers_found: bool,
    careers_reachable: bool,
    found_on_site: bool,
    any_jobs: bool,
) -> StatusCode {
    match (found_on_site, any_jobs, careers_found, careers_reachable) {
        (true, _, _, _) => StatusCode::JobsFoundOnSite,
        (false, true, _, _) => StatusCode::JobsOnLinkedIn,
        (false, false, false, _) => StatusCode::NoCareersPage,
        (false, false, true, true) => StatusCode::CareersPageNoJobs,
        (false, false, true, false) => StatusCode::NoJobsFound,
    }
}
