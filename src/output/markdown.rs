//! Markdown summary generation
//!
//! This module generates a human-readable report of a run: run metadata,
//! the methodology the heuristics followed and the result totals.

use crate::config::Config;
use crate::model::StatusCode;
use crate::output::traits::{OutputResult, RunSummary};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Generates a markdown summary of a run
///
/// # Arguments
///
/// * `summary` - The run summary data
/// * `config` - The configuration the run used (for the methodology section)
/// * `output_path` - Path where the markdown file should be written
pub fn generate_markdown_summary(
    summary: &RunSummary,
    config: &Config,
    output_path: &Path,
) -> OutputResult<()> {
    let markdown = format_markdown_summary(summary, config);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a run summary as markdown
pub fn format_markdown_summary(summary: &RunSummary, config: &Config) -> String {
    let mut md = String::new();
    let stats = &summary.statistics;

    md.push_str("# Career-Scout Run Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Started**: {}\n", summary.started_at));
    md.push_str(&format!("- **Finished**: {}\n", summary.finished_at));
    md.push_str(&format!(
        "- **Duration**: {} seconds ({:.2} minutes)\n",
        summary.duration_seconds,
        summary.duration_seconds as f64 / 60.0
    ));
    md.push_str(&format!("- **Config Hash**: {}\n\n", summary.config_hash));

    md.push_str(&format_methodology(config));

    // Totals
    md.push_str("## Totals\n\n");
    md.push_str(&format!("- **Companies Processed**: {}\n", stats.companies));
    md.push_str(&format!(
        "- **Companies With Jobs**: {} ({:.1}%)\n",
        stats.companies_with_jobs,
        stats.hiring_rate()
    ));
    md.push_str(&format!(
        "- **Companies Without Jobs**: {}\n",
        stats.companies_without_jobs()
    ));
    md.push_str(&format!(
        "- **Careers Pages Found**: {}\n",
        stats.careers_pages_found
    ));
    md.push_str(&format!("- **Total Jobs**: {}\n", stats.total_jobs));
    md.push_str(&format!(
        "- **Jobs With Location**: {}\n\n",
        stats.jobs_with_location
    ));

    // Status breakdown
    md.push_str("## Status Breakdown\n\n");
    md.push_str("| Status | Companies |\n");
    md.push_str("|--------|-----------|\n");
    for status in StatusCode::all_statuses() {
        md.push_str(&format!("| {} | {} |\n", status.label(), stats.count(status)));
    }
    md.push('\n');

    md
}

/// Describes the steps the heuristics take, with the configured vocabulary
fn format_methodology(config: &Config) -> String {
    let discovery = &config.discovery;
    let extraction = &config.extraction;
    let mut md = String::new();

    md.push_str("## Methodology\n\n");
    md.push_str(&format!(
        "1. Normalize the website URL (https:// is assumed when no scheme is given).\n\
         2. Find the careers page: first homepage link whose text or URL contains one of {}; \
         otherwise the first reachable path among {}.\n",
        quoted(&discovery.career_keywords),
        quoted(&discovery.career_path_probe)
    ));
    md.push_str(&format!(
        "3. Find the listing page: first careers page link reading {}, else first link to {}, \
         else the careers page itself.\n",
        quoted(&discovery.cta_phrases),
        quoted(&discovery.ats_domains)
    ));
    md.push_str(&format!(
        "4. Extract up to {} postings: link text of at least {} characters, URL containing {} \
         and none of {}; duplicates by URL are dropped.\n",
        extraction.max_jobs_per_company,
        extraction.min_title_length,
        quoted(&extraction.href_allowlist),
        quoted(&extraction.href_denylist)
    ));
    if extraction.enrich_job_details {
        md.push_str(
            "5. Visit each posting for its location and posted date \
             (the run month is recorded when no date is published).\n",
        );
    } else {
        md.push_str("5. Take locations from the link text only; posting pages are not visited.\n");
    }
    if config.linkedin.enabled {
        md.push_str(
            "6. When the site yields no postings, read the company's LinkedIn jobs page \
             (slug guessed from the website domain).\n",
        );
    } else {
        md.push_str("6. LinkedIn fallback disabled.\n");
    }
    md.push_str(
        "7. Rank by completeness: more postings with known locations first, \
         then careers pages without postings, then no careers page, then invalid websites.\n\n",
    );

    md
}

fn quoted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("`{}`", item))
        .collect::<Vec<_>>()
        .join(", ")
}
