//! Per-company pipeline runs against mock sites

use crate::support::{page, test_config, today};
use career_scout::config::Config;
use career_scout::crawler::{HttpFetcher, Pipeline};
use career_scout::model::{Company, CompanyResult, StatusCode, NOT_DEFINED};
use wiremock::MockServer;

async fn process(config: &Config, website: &str) -> CompanyResult {
    let fetcher = HttpFetcher::new(&config.fetcher).unwrap();
    let pipeline = Pipeline::new(config, today()).unwrap();
    pipeline
        .process(&fetcher, Company::new("Acme", Some(website.to_string())), 0)
        .await
}

#[tokio::test]
async fn test_homepage_careers_link_and_cta_listing() {
    let site = MockServer::start().await;
    page(&site, "/", r#"<a href="/about">About</a><a href="/careers">Careers</a>"#).await;
    page(&site, "/careers", r#"<a href="/careers/open">View jobs</a>"#).await;
    page(
        &site,
        "/careers/open",
        r#"
        <a href="/jobs/backend">Backend Engineer - Remote</a>
        <a href="/jobs/frontend">Frontend Engineer - Pune</a>
        "#,
    )
    .await;

    let mut config = test_config();
    config.linkedin.enabled = false;
    let result = process(&config, &site.uri()).await;

    assert_eq!(result.status, StatusCode::JobsFoundOnSite);
    assert_eq!(
        result.careers_page.unwrap().as_str(),
        format!("{}/careers", site.uri())
    );
    assert_eq!(
        result.listing_page.unwrap().as_str(),
        format!("{}/careers/open", site.uri())
    );
    assert_eq!(result.jobs.len(), 2);
    assert_eq!(result.jobs[0].title, "Backend Engineer");
    assert_eq!(result.jobs[0].location, "Remote");
    assert_eq!(result.jobs[1].location, "Pune");
    assert_eq!(result.rank.primary, 3);
}

#[tokio::test]
async fn test_external_ats_board() {
    let site = MockServer::start().await;
    let ats = MockServer::start().await;
    page(&site, "/", r#"<a href="/careers">Careers</a>"#).await;
    page(
        &site,
        "/careers",
        &format!(r#"<a href="{}/acme">Work with us</a>"#, ats.uri()),
    )
    .await;
    page(
        &ats,
        "/acme",
        r#"<a href="/acme/jobs/1">Account Executive</a><a href="/acme/jobs/2">Support Engineer</a>"#,
    )
    .await;

    let mut config = test_config();
    config.linkedin.enabled = false;
    config.discovery.ats_domains = vec![ats.address().to_string()];
    let result = process(&config, &site.uri()).await;

    assert_eq!(result.status, StatusCode::JobsFoundOnSite);
    assert_eq!(
        result.listing_page.unwrap().as_str(),
        format!("{}/acme", ats.uri())
    );
    assert!(result.jobs.iter().all(|j| j.url.as_str().starts_with(&ats.uri())));
    assert!(result.jobs.iter().all(|j| j.location == NOT_DEFINED));
}

#[tokio::test]
async fn test_five_postings_capped_at_three() {
    let site = MockServer::start().await;
    page(&site, "/", r#"<a href="/jobs">Jobs</a>"#).await;
    page(
        &site,
        "/jobs",
        r#"
        <a href="/jobs/1">Backend Engineer</a>
        <a href="/jobs/1">Backend Engineer</a>
        <a href="/jobs/2">Frontend Engineer</a>
        <a href="/jobs/3">Data Scientist</a>
        <a href="/jobs/4">Product Manager</a>
        <a href="/jobs/5">Sales Executive</a>
        "#,
    )
    .await;

    let config = test_config();
    let result = process(&config, &site.uri()).await;

    let paths: Vec<_> = result.jobs.iter().map(|j| j.url.path().to_string()).collect();
    assert_eq!(paths, vec!["/jobs/1", "/jobs/2", "/jobs/3"]);
    assert_eq!(result.rank.primary, 5);
}

#[tokio::test]
async fn test_no_careers_page_with_linkedin_disabled() {
    let site = MockServer::start().await;
    page(&site, "/", r#"<a href="/pricing">Pricing</a>"#).await;

    let mut config = test_config();
    config.linkedin.enabled = false;
    let result = process(&config, &site.uri()).await;

    assert_eq!(result.status, StatusCode::NoCareersPage);
    assert!(result.jobs.is_empty());
    assert!(result.careers_page.is_none());
    assert_eq!(result.rank.primary, 9);

    // homepage plus the three path probes
    let requests = site.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4);
}

#[tokio::test]
async fn test_homepage_query_not_carried_into_probes() {
    let site = MockServer::start().await;
    page(&site, "/", "<p>Welcome</p>").await;

    let mut config = test_config();
    config.linkedin.enabled = false;
    let result = process(&config, &format!("{}/?ref=list", site.uri())).await;

    assert_eq!(result.status, StatusCode::NoCareersPage);
    assert!(result.careers_page.is_none());
    assert_eq!(result.rank.primary, 9);

    let requests = site.received_requests().await.unwrap();
    let probes: Vec<_> = requests.iter().skip(1).map(|r| r.url.clone()).collect();
    assert_eq!(probes.len(), 3);
    assert!(probes.iter().all(|u| u.query().is_none()));
}

#[tokio::test]
async fn test_probe_finds_careers_page() {
    let site = MockServer::start().await;
    page(&site, "/", "<p>Welcome</p>").await;
    page(&site, "/join-us", r#"<a href="/jobs/9">Growth Marketer</a>"#).await;

    let mut config = test_config();
    config.linkedin.enabled = false;
    let result = process(&config, &site.uri()).await;

    assert_eq!(
        result.careers_page.unwrap().as_str(),
        format!("{}/join-us", site.uri())
    );
    assert_eq!(result.jobs[0].title, "Growth Marketer");
}

#[tokio::test]
async fn test_linkedin_fallback_returns_two_postings() {
    let site = MockServer::start().await;
    let linkedin = MockServer::start().await;
    page(&site, "/", r#"<a href="/careers">Careers</a>"#).await;
    page(&site, "/careers", "<p>No open roles right now.</p>").await;
    page(
        &linkedin,
        "/company/127/jobs/",
        r#"
        <a href="/jobs/view/11/">Operations Manager</a>
        <a href="/company/127/">Company page</a>
        <a href="/jobs/view/12/">Field Sales Lead</a>
        "#,
    )
    .await;

    let mut config = test_config();
    config.linkedin.base_url = linkedin.uri();
    let result = process(&config, &site.uri()).await;

    assert_eq!(result.status, StatusCode::JobsOnLinkedIn);
    assert_eq!(result.jobs.len(), 2);
    assert_eq!(result.jobs[0].title, "Operations Manager");
    assert_eq!(result.jobs[1].posted_at, NOT_DEFINED);
    assert!(result.careers_page.is_some());
}

#[tokio::test]
async fn test_server_errors_collapse_to_status() {
    let site = MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .respond_with(wiremock::ResponseTemplate::new(503))
        .mount(&site)
        .await;

    let mut config = test_config();
    config.linkedin.enabled = false;
    let result = process(&config, &site.uri()).await;

    assert_eq!(result.status, StatusCode::NoCareersPage);
    assert!(result.jobs.is_empty());
}

#[tokio::test]
async fn test_enrichment_reads_job_pages() {
    let site = MockServer::start().await;
    page(&site, "/", r#"<a href="/careers">Careers</a>"#).await;
    page(&site, "/careers", r#"<a href="/jobs/1">Platform Engineer</a>"#).await;
    page(
        &site,
        "/jobs/1",
        r#"
        <script type="application/ld+json">{"@type":"JobPosting","datePosted":"2024-05-02"}</script>
        <h1>Platform Engineer</h1>
        <p>This role is hybrid, based in Singapore.</p>
        "#,
    )
    .await;

    let mut config = test_config();
    config.extraction.enrich_job_details = true;
    let result = process(&config, &site.uri()).await;

    assert_eq!(result.jobs.len(), 1);
    assert_eq!(result.jobs[0].location, "Hybrid");
    assert_eq!(result.jobs[0].posted_at, "2024-05-02");
    assert_eq!(result.rank.primary, 4);
}
