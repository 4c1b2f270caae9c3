//! Run coordinator - worker pool, politeness and output ordering
//!
//! This module runs the per-company pipeline for a whole input list:
//! - One task per company in a `JoinSet`, bounded by a semaphore
//! - A shared per-host throttle in front of every request
//! - A cooldown after companies that issued more than one request
//! - An optional run deadline; unfinished companies are marked invalid
//! - Results collected by input index and sorted by rank
//!
//! The output always holds exactly one record per input company, whatever
//! order the tasks complete in.

use crate::config::Config;
use crate::crawler::pipeline::Pipeline;
use crate::crawler::throttle::{CountingFetcher, ThrottledFetcher};
use crate::crawler::{Fetch, HttpFetcher};
use crate::model::{sort_results, Company, CompanyResult};
use crate::ScoutError;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Main run coordinator structure
pub struct Coordinator<F> {
    fetcher: Arc<ThrottledFetcher<F>>,
    pipeline: Arc<Pipeline>,
    max_concurrent: usize,
    cooldown: Duration,
    deadline: Option<Duration>,
}

impl Coordinator<HttpFetcher> {
    /// Creates a coordinator backed by a real HTTP client
    ///
    /// # Arguments
    ///
    /// * `config` - The validated configuration
    /// * `today` - The run date
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(ScoutError)` - The HTTP client or heuristics could not be built
    pub fn from_config(config: &Config, today: NaiveDate) -> Result<Self, ScoutError> {
        let fetcher = HttpFetcher::new(&config.fetcher)?;
        Self::new(fetcher, config, today)
    }
}

impl<F: Fetch + 'static> Coordinator<F> {
    /// Creates a coordinator around any fetcher
    pub fn new(fetcher: F, config: &Config, today: NaiveDate) -> Result<Self, ScoutError> {
        let politeness = &config.politeness;

        Ok(Self {
            fetcher: Arc::new(ThrottledFetcher::new(
                fetcher,
                Duration::from_millis(politeness.per_host_delay_ms),
            )),
            pipeline: Arc::new(Pipeline::new(config, today)?),
            max_concurrent: politeness.max_concurrent_companies.max(1),
            cooldown: Duration::from_millis(politeness.company_cooldown_ms),
            deadline: politeness.run_deadline_secs.map(Duration::from_secs),
        })
    }

    /// Processes every company and returns the ranked results
    ///
    /// The returned vector has one entry per input company, sorted by
    /// primary rank and then by input position.
    pub async fn run(&self, companies: Vec<Company>) -> Vec<CompanyResult> {
        let total = companies.len();
        tracing::info!(
            "Processing {} companies with {} worker(s)",
            total,
            self.max_concurrent
        );

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks = JoinSet::new();

        for (index, company) in companies.iter().cloned().enumerate() {
            let semaphore = Arc::clone(&semaphore);
            let fetcher = Arc::clone(&self.fetcher);
            let pipeline = Arc::clone(&self.pipeline);
            let cooldown = self.cooldown;

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();

                let counting = CountingFetcher::new(fetcher.as_ref());
                let result = pipeline.process(&counting, company, index).await;

                if counting.request_count() > 1 && !cooldown.is_zero() {
                    tokio::time::sleep(cooldown).await;
                }

                (index, result)
            });
        }

        let mut slots: Vec<Option<CompanyResult>> = (0..total).map(|_| None).collect();

        let collect = async {
            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok((index, result)) => slots[index] = Some(result),
                    Err(e) => tracing::warn!("Company task failed: {}", e),
                }
            }
        };

        match self.deadline {
            Some(deadline) => {
                if tokio::time::timeout(deadline, collect).await.is_err() {
                    tracing::warn!(
                        "Run deadline of {}s reached, abandoning unfinished companies",
                        deadline.as_secs()
                    );
                }
            }
            None => collect.await,
        }
        tasks.abort_all();

        let mut results = Vec::with_capacity(total);
        let mut unfinished = 0;
        for (index, (slot, company)) in slots.into_iter().zip(companies).enumerate() {
            match slot {
                Some(result) => results.push(result),
                None => {
                    unfinished += 1;
                    results.push(self.pipeline.invalid(company, index));
                }
            }
        }

        if unfinished > 0 {
            tracing::warn!("{} of {} companies did not finish", unfinished, total);
        }

        sort_results(&mut results);
        tracing::info!("Processed {} companies", total);
        results
    }
}
