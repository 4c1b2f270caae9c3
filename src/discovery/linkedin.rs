//! LinkedIn fallback
//!
//! Guesses the company's LinkedIn jobs page from its website host and lists
//! the postings linked from it. The guess is never confirmed: a company whose
//! LinkedIn identifier differs from its domain label simply yields nothing.

use crate::crawler::{Anchor, Fetch};
use crate::discovery::Heuristics;
use crate::model::JobPosting;
use crate::url::{company_slug, linkedin_jobs_url};
use std::collections::HashSet;
use url::Url;

/// Marker of an individual posting link on a LinkedIn page
const JOB_VIEW_MARKER: &str = "/jobs/view/";

/// Selects postings from a LinkedIn jobs page
///
/// Same title rules, dedup and cap as the company-site extractor. Location
/// and date stay at their defaults.
pub fn select_linkedin_candidates(anchors: &[Anchor], heuristics: &Heuristics) -> Vec<JobPosting> {
    let mut jobs = Vec::new();
    let mut seen: HashSet<&Url> = HashSet::new();

    for anchor in anchors {
        if jobs.len() >= heuristics.max_jobs {
            break;
        }

        if !anchor.href.contains(JOB_VIEW_MARKER) || !heuristics.is_valid_title(&anchor.text) {
            continue;
        }

        if seen.insert(&anchor.url) {
            jobs.push(JobPosting::new(anchor.text.clone(), anchor.url.clone()));
        }
    }

    jobs
}

/// Lists postings from the company's probable LinkedIn jobs page
///
/// Returns an empty list when the slug cannot be derived, the URL cannot be
/// built or the page cannot be fetched.
pub async fn linkedin_jobs<F: Fetch>(
    fetcher: &F,
    website: &Url,
    heuristics: &Heuristics,
) -> Vec<JobPosting> {
    let Some(slug) = company_slug(website) else {
        return Vec::new();
    };

    let Some(jobs_url) = linkedin_jobs_url(&heuristics.linkedin_base_url, &slug) else {
        tracing::debug!("Cannot build LinkedIn URL for slug {:?}", slug);
        return Vec::new();
    };

    let Some(document) = fetcher.fetch(&jobs_url).await.into_document() else {
        return Vec::new();
    };

    let jobs = select_linkedin_candidates(&document.anchors, heuristics);
    tracing::debug!("{} LinkedIn posting(s) on {}", jobs.len(), jobs_url);
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::crawler::parse_html;
    use crate::model::NOT_DEFINED;
    use crate::testutil::StaticFetcher;

    fn heuristics() -> Heuristics {
        Heuristics::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_select_only_job_view_links() {
        let base = Url::parse("https://www.linkedin.com/company/acme/jobs/").unwrap();
        let html = r#"
            <a href="/company/acme/">Acme on LinkedIn</a>
            <a href="/jobs/view/101/">Backend Engineer - Remote</a>
            <a href="/jobs/view/101/">Backend Engineer - Remote</a>
            <a href="/jobs/view/102/">QA</a>
            <a href="https://www.linkedin.com/jobs/view/103/">Support Specialist</a>
        "#;
        let document = parse_html(html, &base);
        let jobs = select_linkedin_candidates(&document.anchors, &heuristics());

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].url.as_str(), "https://www.linkedin.com/jobs/view/101/");
        assert_eq!(jobs[0].title, "Backend Engineer - Remote");
        assert_eq!(jobs[0].location, NOT_DEFINED);
        assert_eq!(jobs[1].title, "Support Specialist");
    }

    #[tokio::test]
    async fn test_fetches_slug_page() {
        let fetcher = StaticFetcher::new().with_page(
            "https://www.linkedin.com/company/acme/jobs/",
            r#"<a href="/jobs/view/1/">Growth Marketer</a>"#,
        );
        let website = Url::parse("https://www.acme.io/").unwrap();

        let jobs = linkedin_jobs(&fetcher, &website, &heuristics()).await;
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Growth Marketer");
    }

    #[tokio::test]
    async fn test_unreachable_page_is_empty() {
        let fetcher = StaticFetcher::new();
        let website = Url::parse("https://acme.io/").unwrap();

        assert!(linkedin_jobs(&fetcher, &website, &heuristics()).await.is_empty());
        assert_eq!(
            fetcher.requested(),
            vec!["https://www.linkedin.com/company/acme/jobs/".to_string()]
        );
    }
}
