/// Status definitions for a processed company
///
/// This module defines every outcome the discovery pipeline can record for a company.
use std::fmt;

/// Final outcome of running the discovery pipeline for one company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusCode {
    // ===== Found States =====
    /// Postings were extracted from the company's own site or its ATS
    JobsFoundOnSite,

    /// The company site yielded nothing but LinkedIn listed postings
    JobsOnLinkedIn,

    // ===== Not Found States =====
    /// Careers page located and reachable, but no postings anywhere
    CareersPageNoJobs,

    /// Careers page located but unreachable when revisited, no postings anywhere
    NoJobsFound,

    /// No careers page could be located and LinkedIn yielded nothing
    NoCareersPage,

    /// Website missing or malformed, or the company was never processed
    InvalidWebsite,
}

impl StatusCode {
    /// Returns true if at least one posting was recorded
    pub fn is_found(&self) -> bool {
        matches!(self, Self::JobsFoundOnSite | Self::JobsOnLinkedIn)
    }

    /// Short machine-friendly name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JobsFoundOnSite => "jobs_found_on_site",
            Self::JobsOnLinkedIn => "jobs_on_linkedin",
            Self::CareersPageNoJobs => "careers_page_no_jobs",
            Self::NoJobsFound => "no_jobs_found",
            Self::NoCareersPage => "no_careers_page",
            Self::InvalidWebsite => "invalid_website",
        }
    }

    /// Human-readable label written to the results table
    pub fn label(&self) -> &'static str {
        match self {
            Self::JobsFoundOnSite => "Job Found",
            Self::JobsOnLinkedIn => "Jobs on LinkedIn",
            Self::CareersPageNoJobs => "Careers Page, No Jobs",
            Self::NoJobsFound => "No Jobs Found",
            Self::NoCareersPage => "No Careers Page",
            Self::InvalidWebsite => "Invalid Website",
        }
    }

    /// Coarse found / not found flag written next to the label
    pub fn job_status(&self) -> &'static str {
        if self.is_found() {
            "Found"
        } else {
            "Not Found"
        }
    }

    /// Returns all statuses in report order
    pub fn all_statuses() -> [Self; 6] {
        [
            Self::JobsFoundOnSite,
            Self::JobsOnLinkedIn,
            Self::CareersPageNoJobs,
            Self::NoJobsFound,
            Self::NoCareersPage,
            Self::InvalidWebsite,
        ]
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
