//! Ranking engine
//!
//! Assigns every company a [`Rank`]. The primary rank is a pure function of
//! the override map, the status, the number of postings and the number of
//! postings with a discovered location. Posting dates never influence it.
//!
//! # Tiers (N = max postings per company)
//!
//! | Outcome | Primary |
//! |---------|---------|
//! | Name in the override map | configured value (below 2) |
//! | Postings, all with a location | `2 + (N - count)` |
//! | N postings, some without location | `2 + N` |
//! | Fewer postings, some without location | `3 + N` |
//! | Careers page, no postings | `4 + N` |
//! | Careers page unreachable, no postings | `5 + N` |
//! | No careers page | `6 + N` |
//! | Invalid website | `7 + N` |

use crate::config::RankingConfig;
use crate::model::{Company, JobPosting, Rank, StatusCode};
use std::collections::BTreeMap;

/// First primary rank produced by the tiers; overrides must sort before it
pub const FIRST_COMPUTED_RANK: u32 = 2;

/// Computes ranks for a run
#[derive(Debug, Clone)]
pub struct Ranker {
    overrides: BTreeMap<String, u32>,
    max_jobs: u32,
}

impl Ranker {
    pub fn new(config: &RankingConfig, max_jobs: usize) -> Self {
        Self {
            overrides: config
                .priority_overrides
                .iter()
                .map(|(name, rank)| (name.trim().to_lowercase(), *rank))
                .collect(),
            max_jobs: u32::try_from(max_jobs).unwrap_or(u32::MAX / 2),
        }
    }

    /// Ranks one company; `index` is its zero-based input position
    pub fn rank(
        &self,
        company: &Company,
        status: StatusCode,
        jobs: &[JobPosting],
        index: usize,
    ) -> Rank {
        Rank {
            primary: self.primary(company, status, jobs),
            secondary: index,
        }
    }

    fn primary(&self, company: &Company, status: StatusCode, jobs: &[JobPosting]) -> u32 {
        if let Some(&forced) = self.overrides.get(&company.name_key()) {
            return forced;
        }

        let n = self.max_jobs;
        let base = FIRST_COMPUTED_RANK;

        match status {
            StatusCode::JobsFoundOnSite | StatusCode::JobsOnLinkedIn => {
                let count = jobs.len().min(n as usize) as u32;
                let located = jobs.iter().filter(|j| j.has_location()).count() as u32;

                if count == 0 {
                    base + n + 4
                } else if located == count {
                    base + (n - count)
                } else if count == n {
                    base + n
                } else {
                    base + n + 1
                }
            }
            StatusCode::CareersPageNoJobs => base + n + 2,
            StatusCode::NoJobsFound => base + n + 3,
            StatusCode::NoCareersPage => base + n + 4,
            StatusCode::InvalidWebsite => base + n + 5,
        }
    }
}
