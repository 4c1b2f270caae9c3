use url::Url;

/// Placeholder written for a location or date that could not be discovered
pub const NOT_DEFINED: &str = "Not Defined";

/// One input row: a company and the website it was listed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Display name as it appeared in the input
    pub name: String,

    /// Raw website value, `None` when the cell was missing
    pub website: Option<String>,
}

impl Company {
    pub fn new(name: impl Into<String>, website: Option<String>) -> Self {
        Self {
            name: name.into(),
            website,
        }
    }

    /// Lower-cased, trimmed name used for override matching
    pub fn name_key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// A single job posting extracted from a listing page
///
/// Two postings are the same posting when their URLs are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub title: String,
    pub url: Url,
    pub location: String,
    pub posted_at: String,
}

impl JobPosting {
    /// Creates a posting with undiscovered location and date
    pub fn new(title: impl Into<String>, url: Url) -> Self {
        Self {
            title: title.into(),
            url,
            location: NOT_DEFINED.to_string(),
            posted_at: NOT_DEFINED.to_string(),
        }
    }

    /// Returns true if a real location was discovered
    pub fn has_location(&self) -> bool {
        self.location != NOT_DEFINED
    }
}
