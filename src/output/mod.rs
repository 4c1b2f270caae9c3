//! Output module for result tables and run reports
//!
//! This module handles:
//! - Writing the ranked results table (CSV)
//! - Generating the markdown methodology and summary report
//! - Computing and printing run statistics

mod csv_output;
mod markdown;
pub mod stats;
mod traits;

pub use csv_output::{header_row, result_row, write_table, CsvOutputHandler};
pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use stats::{print_statistics, RunStatistics};
pub use traits::{OutputError, OutputHandler, OutputResult, RunSummary};

use crate::config::Config;
use crate::model::CompanyResult;
use std::path::Path;

/// Writes every configured output of a run
///
/// The results table is always written; the markdown report only when a
/// summary path is configured.
///
/// # Arguments
///
/// * `config` - The configuration the run used
/// * `results` - Results in final rank order
/// * `summary` - Run metadata and totals
pub fn write_outputs(
    config: &Config,
    results: &[CompanyResult],
    summary: &RunSummary,
) -> OutputResult<()> {
    let table = CsvOutputHandler::new(
        &config.output.results_path,
        config.extraction.max_jobs_per_company,
    );
    table.write_results(results)?;

    if let Some(summary_path) = &config.output.summary_path {
        generate_markdown_summary(summary, config, Path::new(summary_path))?;
        tracing::info!("Summary written to {}", summary_path);
    }

    Ok(())
}
