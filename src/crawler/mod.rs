//! Crawler module for page fetching and per-company processing
//!
//! This module contains the network-facing half of the tool, including:
//! - HTTP fetching with typed failures
//! - HTML parsing into the anchor/text document model
//! - Per-host throttling and request counting
//! - The per-company pipeline and the run coordinator

mod coordinator;
mod fetcher;
mod parser;
mod pipeline;
mod throttle;

pub use coordinator::Coordinator;
pub use fetcher::{
    build_http_client, fetch_url, FailureReason, Fetch, FetchFailure, FetchResult, HttpFetcher,
};
pub use parser::{parse_html, resolve_link, Anchor, Document};
pub use pipeline::Pipeline;
pub use throttle::{CountingFetcher, ThrottledFetcher};

use crate::config::Config;
use crate::model::{Company, CompanyResult};
use crate::ScoutError;
use chrono::NaiveDate;

/// Runs discovery for a list of companies
///
/// This is the main entry point. It will:
/// 1. Build the HTTP client and compile the heuristics
/// 2. Process every company through the pipeline
/// 3. Return the results in rank order
///
/// # Arguments
///
/// * `config` - The validated configuration
/// * `companies` - Input companies; their order is the rank tie-break
/// * `today` - The run date
///
/// # Example
///
/// ```no_run
/// use career_scout::config::Config;
/// use career_scout::crawler::discover;
/// use career_scout::Company;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let companies = vec![Company::new("Acme", Some("acme.io".to_string()))];
/// let today = chrono::Local::now().date_naive();
/// let results = discover(&Config::default(), companies, today).await?;
/// # Ok(())
/// # }
/// ```
pub async fn discover(
    config: &Config,
    companies: Vec<Company>,
    today: NaiveDate,
) -> Result<Vec<CompanyResult>, ScoutError> {
    let coordinator = Coordinator::from_config(config, today)?;
    Ok(coordinator.run(companies).await)
}
