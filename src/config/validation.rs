use crate::config::types::{
    Config, DiscoveryConfig, ExtractionConfig, FetcherConfig, LinkedinConfig, PolitenessConfig,
    RankingConfig,
};
use crate::ranking::FIRST_COMPUTED_RANK;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_politeness_config(&config.politeness)?;
    validate_discovery_config(&config.discovery)?;
    validate_extraction_config(&config.extraction)?;
    validate_linkedin_config(&config.linkedin)?;
    validate_ranking_config(&config.ranking)?;
    validate_output_config(&config.output)?;
    Ok(())
}

fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.timeout_secs == 0 || config.timeout_secs > 120 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 120, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_politeness_config(config: &PolitenessConfig) -> Result<(), ConfigError> {
    if config.max_concurrent_companies < 1 || config.max_concurrent_companies > 32 {
        return Err(ConfigError::Validation(format!(
            "max-concurrent-companies must be between 1 and 32, got {}",
            config.max_concurrent_companies
        )));
    }

    if config.run_deadline_secs == Some(0) {
        return Err(ConfigError::Validation(
            "run-deadline-secs must be positive when set".to_string(),
        ));
    }

    Ok(())
}

fn validate_discovery_config(config: &DiscoveryConfig) -> Result<(), ConfigError> {
    validate_vocabulary("career-keywords", &config.career_keywords)?;
    validate_vocabulary("cta-phrases", &config.cta_phrases)?;
    validate_vocabulary("ats-domains", &config.ats_domains)?;

    // An empty probe list is allowed: it disables path probing.
    for suffix in &config.career_path_probe {
        if !suffix.starts_with('/') || suffix.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "career-path-probe entries must look like '/careers', got '{}'",
                suffix
            )));
        }
    }

    Ok(())
}

fn validate_extraction_config(config: &ExtractionConfig) -> Result<(), ConfigError> {
    if config.max_jobs_per_company < 1 || config.max_jobs_per_company > 10 {
        return Err(ConfigError::Validation(format!(
            "max-jobs-per-company must be between 1 and 10, got {}",
            config.max_jobs_per_company
        )));
    }

    if config.min_title_length == 0 {
        return Err(ConfigError::Validation(
            "min-title-length must be at least 1".to_string(),
        ));
    }

    validate_vocabulary("href-allowlist", &config.href_allowlist)?;
    validate_vocabulary("location-vocabulary", &config.location_vocabulary)?;

    if config.href_denylist.iter().any(|t| t.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "href-denylist cannot contain blank entries".to_string(),
        ));
    }

    Ok(())
}

fn validate_linkedin_config(config: &LinkedinConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid linkedin base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "linkedin base-url must be http(s), got '{}'",
            config.base_url
        )));
    }

    Ok(())
}

fn validate_ranking_config(config: &RankingConfig) -> Result<(), ConfigError> {
    for (name, rank) in &config.priority_overrides {
        if name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "priority-overrides cannot contain an empty company name".to_string(),
            ));
        }

        if name.to_lowercase() != *name {
            return Err(ConfigError::Validation(format!(
                "priority-overrides keys must be lower-case, got '{}'",
                name
            )));
        }

        if *rank >= FIRST_COMPUTED_RANK {
            return Err(ConfigError::Validation(format!(
                "priority override for '{}' must be below {}, got {}",
                name, FIRST_COMPUTED_RANK, rank
            )));
        }
    }

    Ok(())
}

fn validate_output_config(config: &crate::config::types::OutputConfig) -> Result<(), ConfigError> {
    if config.results_path.is_empty() {
        return Err(ConfigError::Validation(
            "results-path cannot be empty".to_string(),
        ));
    }

    if matches!(config.summary_path.as_deref(), Some("")) {
        return Err(ConfigError::Validation(
            "summary-path cannot be empty when set".to_string(),
        ));
    }

    Ok(())
}

/// A vocabulary list must be non-empty and contain no blank entries
fn validate_vocabulary(name: &str, terms: &[String]) -> Result<(), ConfigError> {
    if terms.is_empty() {
        return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
    }

    if terms.iter().any(|t| t.trim().is_empty()) {
        return Err(ConfigError::Validation(format!(
            "{} cannot contain blank entries",
            name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_vocabulary() {
        assert!(validate_vocabulary("x", &["jobs".to_string()]).is_ok());

        assert!(validate_vocabulary("x", &[]).is_err());
        assert!(validate_vocabulary("x", &["jobs".to_string(), "  ".to_string()]).is_err());
    }

    #[test]
    fn test_probe_suffix_must_be_a_path() {
        let mut config = Config::default();
        config.discovery.career_path_probe = vec!["careers".to_string()];
        assert!(validate(&config).is_err());

        config.discovery.career_path_probe = vec!["/".to_string()];
        assert!(validate(&config).is_err());

        config.discovery.career_path_probe = vec![];
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_override_rank_must_precede_computed_tiers() {
        let mut config = Config::default();
        config
            .ranking
            .priority_overrides
            .insert("acme".to_string(), FIRST_COMPUTED_RANK);
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_override_keys_must_be_lowercase() {
        let mut config = Config::default();
        config
            .ranking
            .priority_overrides
            .insert("Acme".to_string(), 0);
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_linkedin_base_url() {
        let mut config = Config::default();
        config.linkedin.base_url = "not a url".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));

        config.linkedin.base_url = "ftp://linkedin.com".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_concurrency_bounds() {
        let mut config = Config::default();
        config.politeness.max_concurrent_companies = 0;
        assert!(validate(&config).is_err());

        config.politeness.max_concurrent_companies = 33;
        assert!(validate(&config).is_err());

        config.politeness.max_concurrent_companies = 8;
        assert!(validate(&config).is_ok());
    }
}
