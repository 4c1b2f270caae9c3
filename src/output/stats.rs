//! Run statistics
//!
//! Totals computed from the final results, printed to stdout at the end of
//! a run and embedded in the Markdown summary.

use crate::model::{CompanyResult, StatusCode};
use std::collections::BTreeMap;

/// Totals of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Number of companies in the input
    pub companies: u64,

    /// Companies with at least one posting
    pub companies_with_jobs: u64,

    /// Companies with a located careers page
    pub careers_pages_found: u64,

    /// Postings across all companies
    pub total_jobs: u64,

    /// Postings with a discovered location
    pub jobs_with_location: u64,

    /// Count of companies by status
    pub by_status: BTreeMap<StatusCode, u64>,
}

impl RunStatistics {
    pub fn from_results(results: &[CompanyResult]) -> Self {
        let mut stats = Self {
            companies: results.len() as u64,
            ..Self::default()
        };

        for result in results {
            if result.status.is_found() {
                stats.companies_with_jobs += 1;
            }
            if result.careers_page.is_some() {
                stats.careers_pages_found += 1;
            }
            stats.total_jobs += result.jobs.len() as u64;
            stats.jobs_with_location += result.jobs_with_location() as u64;
            *stats.by_status.entry(result.status).or_insert(0) += 1;
        }

        stats
    }

    /// Companies without any posting
    pub fn companies_without_jobs(&self) -> u64 {
        self.companies - self.companies_with_jobs
    }

    /// Number of companies recorded with a status
    pub fn count(&self, status: StatusCode) -> u64 {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    /// Share of companies with postings, as a percentage
    pub fn hiring_rate(&self) -> f64 {
        if self.companies == 0 {
            return 0.0;
        }
        (self.companies_with_jobs as f64 / self.companies as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &RunStatistics) {
    println!("=== Run Statistics ===\n");

    println!("Overview:");
    println!("  Companies processed: {}", stats.companies);
    println!(
        "  With postings: {} ({:.1}%)",
        stats.companies_with_jobs,
        stats.hiring_rate()
    );
    println!("  Without postings: {}", stats.companies_without_jobs());
    println!("  Careers pages found: {}", stats.careers_pages_found);
    println!(
        "  Postings recorded: {} ({} with location)",
        stats.total_jobs, stats.jobs_with_location
    );
    println!();

    println!("Companies by Status:");
    for status in StatusCode::all_statuses() {
        let count = stats.count(status);
        if count > 0 {
            println!("  {}: {}", status.label(), count);
        }
    }
}
