//! Career-Scout: a hiring-signal crawler for lead prioritization
//!
//! This crate takes a list of companies, locates each company's careers page
//! and job-listing page, extracts a handful of job postings (falling back to
//! LinkedIn when the company site yields nothing) and ranks the companies by
//! how complete the extracted hiring data is.

pub mod config;
pub mod crawler;
pub mod discovery;
pub mod input;
pub mod model;
pub mod output;
pub mod ranking;
pub mod url;

#[cfg(test)]
pub(crate) mod testutil;

use thiserror::Error;

/// Main error type for Career-Scout operations
///
/// Only run-level failures are represented here. Everything that can go
/// wrong while processing a single company is absorbed into that company's
/// [`model::StatusCode`].
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("Website value is empty")]
    Empty,

    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for Career-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Coordinator, HttpFetcher};
pub use model::{Company, CompanyResult, JobPosting, Rank, StatusCode};
pub use crate::url::{company_slug, extract_domain, normalize_website};
