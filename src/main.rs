//! Career-Scout main entry point
//!
//! This is the command-line interface for the Career-Scout hiring-signal crawler.

use anyhow::Context;
use career_scout::config::{load_config_with_hash, validate, Config};
use career_scout::crawler::Coordinator;
use career_scout::input::read_companies;
use career_scout::model::Company;
use career_scout::output::{print_statistics, write_outputs, RunSummary};
use career_scout::url::normalize_website;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Career-Scout: find out which companies are hiring
///
/// Career-Scout reads a list of companies, locates each company's careers
/// page and job listings, falls back to LinkedIn when the site shows
/// nothing, and writes a table ranked by how complete the hiring data is.
#[derive(Parser, Debug)]
#[command(name = "career-scout")]
#[command(version)]
#[command(about = "Hiring-signal crawler for lead prioritization", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// CSV file listing the companies
    #[arg(short, long, value_name = "CSV")]
    input: PathBuf,

    /// Results table path (overrides output.results-path)
    #[arg(short, long, value_name = "CSV")]
    output: Option<PathBuf>,

    /// Markdown summary path (overrides output.summary-path)
    #[arg(long, value_name = "MD")]
    summary: Option<PathBuf>,

    /// Visit every posting for location and date
    #[arg(long)]
    enrich: bool,

    /// Disable the LinkedIn fallback
    #[arg(long)]
    no_linkedin: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and input and show what would be processed, without network access
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    apply_overrides(&mut config, &cli);
    validate(&config).context("command-line overrides")?;

    let companies = read_companies(&cli.input, &config.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    if cli.dry_run {
        handle_dry_run(&config, &companies);
        return Ok(());
    }

    handle_run(config, &config_hash, companies, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("career_scout=info,warn"),
            1 => EnvFilter::new("career_scout=debug,info"),
            2 => EnvFilter::new("career_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(output) = &cli.output {
        config.output.results_path = output.display().to_string();
    }
    if let Some(summary) = &cli.summary {
        config.output.summary_path = Some(summary.display().to_string());
    }
    if cli.enrich {
        config.extraction.enrich_job_details = true;
    }
    if cli.no_linkedin {
        config.linkedin.enabled = false;
    }
}

/// Handles the --dry-run mode: shows the plan without any network access
fn handle_dry_run(config: &Config, companies: &[Company]) {
    println!("=== Career-Scout Dry Run ===\n");

    println!("Politeness:");
    println!(
        "  Concurrent companies: {}",
        config.politeness.max_concurrent_companies
    );
    println!("  Per-host delay: {}ms", config.politeness.per_host_delay_ms);
    println!(
        "  Company cooldown: {}ms",
        config.politeness.company_cooldown_ms
    );
    match config.politeness.run_deadline_secs {
        Some(secs) => println!("  Run deadline: {}s", secs),
        None => println!("  Run deadline: none"),
    }

    println!("\nExtraction:");
    println!(
        "  Max jobs per company: {}",
        config.extraction.max_jobs_per_company
    );
    println!("  Enrich job details: {}", config.extraction.enrich_job_details);
    println!("  LinkedIn fallback: {}", config.linkedin.enabled);

    println!("\nOutput:");
    println!("  Results: {}", config.output.results_path);
    if let Some(summary) = &config.output.summary_path {
        println!("  Summary: {}", summary);
    }

    println!("\nCompanies ({}):", companies.len());
    let mut valid = 0;
    for (index, company) in companies.iter().enumerate() {
        match company.website.as_deref().map(normalize_website) {
            Some(Ok(url)) => {
                valid += 1;
                println!("  {:>4}. {} -> {}", index + 1, company.name, url);
            }
            Some(Err(e)) => println!("  {:>4}. {} (invalid website: {})", index + 1, company.name, e),
            None => println!("  {:>4}. {} (no website)", index + 1, company.name),
        }
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would process {} companies ({} with a usable website)",
        companies.len(),
        valid
    );
}

/// Handles the main discovery run
async fn handle_run(
    config: Config,
    config_hash: &str,
    companies: Vec<Company>,
    quiet: bool,
) -> anyhow::Result<()> {
    let started_at = chrono::Utc::now();
    let today = chrono::Local::now().date_naive();

    let coordinator =
        Coordinator::from_config(&config, today).context("building the HTTP client")?;
    let results = coordinator.run(companies).await;

    let summary = RunSummary::new(
        started_at,
        chrono::Utc::now(),
        config_hash,
        config.extraction.max_jobs_per_company,
        &results,
    );

    write_outputs(&config, &results, &summary).context("writing results")?;

    if !quiet {
        println!();
        print_statistics(&summary.statistics);
    }

    tracing::info!("Run completed in {}s", summary.duration_seconds);
    Ok(())
}
