//! Output handler traits and types
//!
//! This module defines the trait interface for output handlers and the
//! run summary shared by the report writers.

use crate::model::CompanyResult;
use crate::output::stats::RunStatistics;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Metadata and totals of one run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    // Run metadata
    pub started_at: String,
    pub finished_at: String,
    pub duration_seconds: u64,
    pub config_hash: String,
    pub max_jobs_per_company: usize,

    // Totals
    pub statistics: RunStatistics,
}

impl RunSummary {
    /// Builds a summary for a finished run
    pub fn new(
        started_at: chrono::DateTime<chrono::Utc>,
        finished_at: chrono::DateTime<chrono::Utc>,
        config_hash: &str,
        max_jobs_per_company: usize,
        results: &[CompanyResult],
    ) -> Self {
        Self {
            started_at: started_at.to_rfc3339(),
            finished_at: finished_at.to_rfc3339(),
            duration_seconds: (finished_at - started_at).num_seconds().max(0) as u64,
            config_hash: config_hash.to_string(),
            max_jobs_per_company,
            statistics: RunStatistics::from_results(results),
        }
    }
}

/// Trait for output handlers
///
/// An output handler receives the final, ranked results once per run.
pub trait OutputHandler {
    /// Writes the ranked results
    ///
    /// # Arguments
    ///
    /// * `results` - Results in final rank order
    fn write_results(&self, results: &[CompanyResult]) -> OutputResult<()>;
}
