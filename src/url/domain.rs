use url::Url;

/// Extracts the lowercase host from a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use career_scout::url::extract_domain;
///
/// let url = Url::parse("https://Jobs.Lever.co/acme").unwrap();
/// assert_eq!(extract_domain(&url), Some("jobs.lever.co".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Derives a probable LinkedIn company slug from a website URL
///
/// The slug is the first DNS label of the host once a leading `www.` is
/// stripped. This is a guess: nothing confirms the company actually uses
/// that identifier on LinkedIn.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use career_scout::url::company_slug;
///
/// let url = Url::parse("https://www.acme.io/").unwrap();
/// assert_eq!(company_slug(&url), Some("acme".to_string()));
/// ```
pub fn company_slug(url: &Url) -> Option<String> {
    let host = extract_domain(url)?;
    let host = host.strip_prefix("www.").unwrap_or(&host);
    host.split('.')
        .next()
        .filter(|label| !label.is_empty())
        .map(|label| label.to_string())
}

/// Key identifying a host for rate limiting (scheme://host:port)
pub fn host_key(url: &Url) -> Option<String> {
    let host = extract_domain(url)?;
    let port = url
        .port_or_known_default()
        .map(|p| format!(":{}", p))
        .unwrap_or_default();
    Some(format!("{}://{}{}", url.scheme(), host, port))
}
