use serde::Deserialize;
use std::collections::BTreeMap;

/// Main configuration structure for Career-Scout
///
/// Every section is optional; a missing section takes the defaults below,
/// which mirror the constants the tool has always shipped with.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub politeness: PolitenessConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub linkedin: LinkedinConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP fetch behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of redirects followed per request
    #[serde(rename = "max-redirects", default = "default_max_redirects")]
    pub max_redirects: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
        }
    }
}

/// Rate limiting and worker pool configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PolitenessConfig {
    /// Minimum time between two requests to the same host (milliseconds)
    #[serde(rename = "per-host-delay-ms", default = "default_per_host_delay_ms")]
    pub per_host_delay_ms: u64,

    /// Pause after a company that issued more than one request (milliseconds)
    #[serde(rename = "company-cooldown-ms", default = "default_company_cooldown_ms")]
    pub company_cooldown_ms: u64,

    /// Number of companies processed at the same time
    #[serde(
        rename = "max-concurrent-companies",
        default = "default_max_concurrent_companies"
    )]
    pub max_concurrent_companies: usize,

    /// Hard limit on the whole run; unfinished companies are marked invalid
    #[serde(rename = "run-deadline-secs", default)]
    pub run_deadline_secs: Option<u64>,
}

impl Default for PolitenessConfig {
    fn default() -> Self {
        Self {
            per_host_delay_ms: default_per_host_delay_ms(),
            company_cooldown_ms: default_company_cooldown_ms(),
            max_concurrent_companies: default_max_concurrent_companies(),
            run_deadline_secs: None,
        }
    }
}

/// Careers and listing page discovery vocabulary
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    /// Tokens that mark a homepage link as the careers page (text or href)
    #[serde(rename = "career-keywords", default = "default_career_keywords")]
    pub career_keywords: Vec<String>,

    /// Path suffixes probed in order when no homepage link matches
    #[serde(rename = "career-path-probe", default = "default_career_path_probe")]
    pub career_path_probe: Vec<String>,

    /// Call-to-action phrases leading from a careers page to its listing
    #[serde(rename = "cta-phrases", default = "default_cta_phrases")]
    pub cta_phrases: Vec<String>,

    /// Hosted applicant tracking system domains
    #[serde(rename = "ats-domains", default = "default_ats_domains")]
    pub ats_domains: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            career_keywords: default_career_keywords(),
            career_path_probe: default_career_path_probe(),
            cta_phrases: default_cta_phrases(),
            ats_domains: default_ats_domains(),
        }
    }
}

/// Job posting extraction rules
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Maximum number of postings recorded per company
    #[serde(rename = "max-jobs-per-company", default = "default_max_jobs")]
    pub max_jobs_per_company: usize,

    /// Visit every accepted posting to discover its location and date
    #[serde(rename = "enrich-job-details", default)]
    pub enrich_job_details: bool,

    /// Shortest anchor text accepted as a job title
    #[serde(rename = "min-title-length", default = "default_min_title_length")]
    pub min_title_length: usize,

    /// An href must contain one of these tokens to be a posting
    #[serde(rename = "href-allowlist", default = "default_href_allowlist")]
    pub href_allowlist: Vec<String>,

    /// An href containing one of these tokens is never a posting
    #[serde(rename = "href-denylist", default = "default_href_denylist")]
    pub href_denylist: Vec<String>,

    /// Anchor texts containing one of these phrases are navigation, not postings
    #[serde(rename = "title-denylist", default = "default_title_denylist")]
    pub title_denylist: Vec<String>,

    /// Recognised location terms
    #[serde(rename = "location-vocabulary", default = "default_location_vocabulary")]
    pub location_vocabulary: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_jobs_per_company: default_max_jobs(),
            enrich_job_details: false,
            min_title_length: default_min_title_length(),
            href_allowlist: default_href_allowlist(),
            href_denylist: default_href_denylist(),
            title_denylist: default_title_denylist(),
            location_vocabulary: default_location_vocabulary(),
        }
    }
}

/// LinkedIn fallback configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LinkedinConfig {
    /// Whether to try LinkedIn when the company site yields no postings
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Scheme and host used to build company jobs URLs
    #[serde(rename = "base-url", default = "default_linkedin_base_url")]
    pub base_url: String,
}

impl Default for LinkedinConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_linkedin_base_url(),
        }
    }
}

/// Ranking configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingConfig {
    /// Lower-cased company name -> forced primary rank
    #[serde(rename = "priority-overrides", default)]
    pub priority_overrides: BTreeMap<String, u32>,
}

/// Input table layout
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Column holding the company name
    #[serde(rename = "name-column", default = "default_name_column")]
    pub name_column: String,

    /// Column holding the company website
    #[serde(rename = "website-column", default = "default_website_column")]
    pub website_column: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            name_column: default_name_column(),
            website_column: default_website_column(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the ranked CSV table
    #[serde(rename = "results-path", default = "default_results_path")]
    pub results_path: String,

    /// Path to the markdown methodology and summary report
    #[serde(rename = "summary-path", default)]
    pub summary_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: default_results_path(),
            summary_path: None,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string()
}

fn default_max_redirects() -> usize {
    10
}

fn default_per_host_delay_ms() -> u64 {
    500
}

fn default_company_cooldown_ms() -> u64 {
    1500
}

fn default_max_concurrent_companies() -> usize {
    1
}

fn default_career_keywords() -> Vec<String> {
    strings(&["career", "careers", "jobs", "join", "hiring"])
}

fn default_career_path_probe() -> Vec<String> {
    strings(&["/careers", "/jobs", "/join-us"])
}

fn default_cta_phrases() -> Vec<String> {
    strings(&["open positions", "view jobs", "see openings"])
}

fn default_ats_domains() -> Vec<String> {
    strings(&[
        "lever.co",
        "greenhouse.io",
        "workable.com",
        "zohorecruit",
        "ashbyhq",
    ])
}

fn default_max_jobs() -> usize {
    3
}

fn default_min_title_length() -> usize {
    6
}

fn default_href_allowlist() -> Vec<String> {
    strings(&["job", "opening", "position", "req"])
}

fn default_href_denylist() -> Vec<String> {
    strings(&["privacy", "terms", "about", "blog", "login"])
}

fn default_title_denylist() -> Vec<String> {
    strings(&[
        "our open positions",
        "job openings",
        "job opportunities",
        "frequently asked questions",
        "privacy",
        "terms",
        "about",
    ])
}

fn default_location_vocabulary() -> Vec<String> {
    strings(&[
        "Remote",
        "Hybrid",
        "On-site",
        "India",
        "Bengaluru",
        "Bangalore",
        "Mumbai",
        "Delhi",
        "Pune",
        "Hyderabad",
        "Chennai",
        "Singapore",
        "Sydney",
        "Melbourne",
        "Australia",
        "USA",
        "UK",
    ])
}

fn default_linkedin_base_url() -> String {
    "https://www.linkedin.com".to_string()
}

fn default_name_column() -> String {
    "Startup".to_string()
}

fn default_website_column() -> String {
    "Website URL".to_string()
}

fn default_results_path() -> String {
    "results.csv".to_string()
}
