//! Whole-run tests: coordinator ordering, deadline, input and output files

use crate::support::{html, page, test_config, today};
use career_scout::config::parse_config;
use career_scout::crawler::{Coordinator, HttpFetcher};
use career_scout::input::read_companies;
use career_scout::model::{Company, StatusCode};
use career_scout::output::{write_outputs, RunSummary};
use std::io::Write;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

async fn hiring_site(titles: &[&str]) -> MockServer {
    let site = MockServer::start().await;
    page(&site, "/", r#"<a href="/careers">Careers</a>"#).await;

    let anchors: String = titles
        .iter()
        .enumerate()
        .map(|(i, title)| format!(r#"<a href="/jobs/{}">{}</a>"#, i, title))
        .collect();
    page(&site, "/careers", &anchors).await;
    site
}

#[tokio::test]
async fn test_results_ranked_with_stable_tiebreak() {
    let full = hiring_site(&["Engineer - Remote", "Designer - UK", "Analyst - India"]).await;
    let partial = hiring_site(&["Engineer - Remote"]).await;
    let quiet = MockServer::start().await;
    page(&quiet, "/", "<p>Nothing here</p>").await;

    let mut config = test_config();
    config.linkedin.enabled = false;
    config.politeness.max_concurrent_companies = 3;
    config
        .ranking
        .priority_overrides
        .insert("charzer".to_string(), 1);

    let companies = vec![
        Company::new("Quiet", Some(quiet.uri())),
        Company::new("Nowhere", None),
        Company::new("Partial", Some(partial.uri())),
        Company::new("Charzer", Some("".to_string())),
        Company::new("Full", Some(full.uri())),
        Company::new("Quiet Twin", Some(quiet.uri())),
    ];

    let fetcher = HttpFetcher::new(&config.fetcher).unwrap();
    let coordinator = Coordinator::new(fetcher, &config, today()).unwrap();
    let results = coordinator.run(companies).await;

    let names: Vec<_> = results.iter().map(|r| r.company.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Charzer", "Full", "Partial", "Quiet", "Quiet Twin", "Nowhere"]
    );

    let primaries: Vec<_> = results.iter().map(|r| r.rank.primary).collect();
    assert_eq!(primaries, vec![1, 2, 4, 9, 9, 10]);
    assert_eq!(results[3].rank.secondary, 0);
    assert_eq!(results[4].rank.secondary, 5);
}

#[tokio::test]
async fn test_deadline_marks_unfinished_companies_invalid() {
    let slow = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/careers">Careers</a>"#).set_delay(Duration::from_secs(4)))
        .mount(&slow)
        .await;
    let fast = hiring_site(&["Backend Engineer"]).await;

    let mut config = test_config();
    config.linkedin.enabled = false;
    config.politeness.max_concurrent_companies = 2;
    config.politeness.run_deadline_secs = Some(1);

    let companies = vec![
        Company::new("Slow", Some(slow.uri())),
        Company::new("Fast", Some(fast.uri())),
    ];

    let fetcher = HttpFetcher::new(&config.fetcher).unwrap();
    let coordinator = Coordinator::new(fetcher, &config, today()).unwrap();

    let started = std::time::Instant::now();
    let results = coordinator.run(companies).await;
    assert!(started.elapsed() < Duration::from_secs(3));

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].company.name, "Fast");
    assert_eq!(results[0].status, StatusCode::JobsFoundOnSite);
    assert_eq!(results[1].company.name, "Slow");
    assert_eq!(results[1].status, StatusCode::InvalidWebsite);
}

#[tokio::test]
async fn test_csv_in_csv_out() {
    let site = hiring_site(&["Backend Engineer - Remote", "QA Engineer"]).await;
    let dir = tempfile::tempdir().unwrap();

    let input_path = dir.path().join("companies.csv");
    let mut input = std::fs::File::create(&input_path).unwrap();
    writeln!(input, "Startup,Website URL").unwrap();
    writeln!(input, "Broken,").unwrap();
    writeln!(input, "Acme,{}", site.uri()).unwrap();
    drop(input);

    let results_path = dir.path().join("results.csv");
    let summary_path = dir.path().join("summary.md");
    let config = parse_config(&format!(
        r#"
[politeness]
per-host-delay-ms = 0
company-cooldown-ms = 0

[linkedin]
enabled = false

[output]
results-path = "{}"
summary-path = "{}"
"#,
        results_path.display(),
        summary_path.display()
    ))
    .unwrap();

    let companies = read_companies(&input_path, &config.input).unwrap();
    let fetcher = HttpFetcher::new(&config.fetcher).unwrap();
    let coordinator = Coordinator::new(fetcher, &config, today()).unwrap();
    let started = chrono::Utc::now();
    let results = coordinator.run(companies).await;

    let summary = RunSummary::new(started, chrono::Utc::now(), "test", 3, &results);
    write_outputs(&config, &results, &summary).unwrap();

    let mut reader = csv::Reader::from_path(&results_path).unwrap();
    let header = reader.headers().unwrap().clone();
    assert_eq!(header.len(), 4 + 3 * 4 + 2);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "Acme");
    assert_eq!(&rows[0][5], "Backend Engineer");
    assert_eq!(&rows[0][6], "Remote");
    assert_eq!(&rows[0][9], "QA Engineer");
    assert_eq!(&rows[0][16], "Found");
    assert_eq!(&rows[1][0], "Broken");
    assert_eq!(&rows[1][17], "Invalid Website");

    let report = std::fs::read_to_string(&summary_path).unwrap();
    assert!(report.contains("**Companies Processed**: 2"));
    assert!(report.contains("| Job Found | 1 |"));
}
