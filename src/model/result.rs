use crate::model::{Company, JobPosting, StatusCode};
use std::cmp::Ordering;
use url::Url;

/// Sort key of a company in the final table
///
/// Lower values come first. `secondary` is the company's zero-based input
/// position, so two results never compare equal unless they are the same row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rank {
    pub primary: u32,
    pub secondary: usize,
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.primary
            .cmp(&other.primary)
            .then_with(|| self.secondary.cmp(&other.secondary))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Final record for one input company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyResult {
    pub company: Company,
    pub careers_page: Option<Url>,
    pub listing_page: Option<Url>,
    pub jobs: Vec<JobPosting>,
    pub status: StatusCode,
    pub rank: Rank,
}

impl CompanyResult {
    /// Number of postings with a discovered location
    pub fn jobs_with_location(&self) -> usize {
        self.jobs.iter().filter(|j| j.has_location()).count()
    }
}

/// Sorts results into their final order (primary rank, then input order)
pub fn sort_results(results: &mut [CompanyResult]) {
    results.sort_by_key(|r| r.rank);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, primary: u32, secondary: usize) -> CompanyResult {
        CompanyResult {
            company: Company::new(name, None),
            careers_page: None,
            listing_page: None,
            jobs: vec![],
            status: StatusCode::InvalidWebsite,
            rank: Rank { primary, secondary },
        }
    }

    #[test]
    fn test_rank_orders_by_primary_then_secondary() {
        let a = Rank { primary: 2, secondary: 5 };
        let b = Rank { primary: 3, secondary: 0 };
        let c = Rank { primary: 2, secondary: 1 };

        assert!(a < b);
        assert!(c < a);
    }

    #[test]
    fn test_sort_results_is_stable_on_input_order() {
        let mut results = vec![
            result("d", 9, 0),
            result("a", 4, 1),
            result("b", 9, 2),
            result("c", 4, 3),
        ];
        sort_results(&mut results);

        let names: Vec<_> = results.iter().map(|r| r.company.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "d", "b"]);
    }
}
