//! Ranked results table
//!
//! One row per company, in rank order. Job columns are positional: job 1
//! fills `job post1 ...`, job 2 fills `job post2 ...`, and unused slots are
//! left empty.

use crate::model::CompanyResult;
use crate::output::traits::{OutputHandler, OutputResult};
use std::io::Write;
use std::path::PathBuf;

/// CSV output handler
pub struct CsvOutputHandler {
    path: PathBuf,
    max_jobs: usize,
}

impl CsvOutputHandler {
    /// Creates a handler writing to `path` with `max_jobs` job column groups
    pub fn new(path: impl Into<PathBuf>, max_jobs: usize) -> Self {
        Self {
            path: path.into(),
            max_jobs,
        }
    }
}

impl OutputHandler for CsvOutputHandler {
    fn write_results(&self, results: &[CompanyResult]) -> OutputResult<()> {
        let file = std::fs::File::create(&self.path)?;
        write_table(file, results, self.max_jobs)?;
        tracing::info!("Wrote {} rows to {}", results.len(), self.path.display());
        Ok(())
    }
}

/// Column headers for a table with `max_jobs` job slots
pub fn header_row(max_jobs: usize) -> Vec<String> {
    let mut header = vec![
        "Startup".to_string(),
        "Website URL".to_string(),
        "Careers Page URL".to_string(),
        "Job listings page URL".to_string(),
    ];

    for i in 1..=max_jobs {
        header.push(format!("job post{} URL", i));
        header.push(format!("job post{} title", i));
        header.push(format!("Job {} Location", i));
        header.push(format!("Job {} Post Date", i));
    }

    header.push("Job Status".to_string());
    header.push("Scraping Status".to_string());
    header
}

/// One table row for a company result
pub fn result_row(result: &CompanyResult, max_jobs: usize) -> Vec<String> {
    let mut row = vec![
        result.company.name.clone(),
        result.company.website.clone().unwrap_or_default(),
        result
            .careers_page
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
        result
            .listing_page
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
    ];

    for i in 0..max_jobs {
        match result.jobs.get(i) {
            Some(job) => {
                row.push(job.url.to_string());
                row.push(job.title.clone());
                row.push(job.location.clone());
                row.push(job.posted_at.clone());
            }
            None => row.extend(std::iter::repeat(String::new()).take(4)),
        }
    }

    row.push(result.status.job_status().to_string());
    row.push(result.status.label().to_string());
    row
}

/// Writes the results table to any writer
pub fn write_table<W: Write>(writer: W, results: &[CompanyResult], max_jobs: usize) -> OutputResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(header_row(max_jobs))?;
    for result in results {
        csv_writer.write_record(result_row(result, max_jobs))?;
    }
    csv_writer.flush()?;

    Ok(())
}
