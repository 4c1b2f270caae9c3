use crate::UrlError;
use url::Url;

/// Normalizes a raw website cell into an absolute http(s) URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace; reject if nothing is left
/// 2. Prepend `https://` when the value carries no scheme
/// 3. Parse the URL; reject if malformed
/// 4. Reject schemes other than http and https
/// 5. Reject URLs without a host
///
/// # Examples
///
/// ```
/// use career_scout::url::normalize_website;
///
/// let url = normalize_website("acme.io").unwrap();
/// assert_eq!(url.as_str(), "https://acme.io/");
///
/// let url = normalize_website("http://acme.io/en").unwrap();
/// assert_eq!(url.as_str(), "http://acme.io/en");
/// ```
pub fn normalize_website(raw: &str) -> Result<Url, UrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let candidate = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&candidate).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::MissingDomain),
    }
}

/// Builds a probe URL by appending a path suffix to the homepage path
///
/// Query and fragment are dropped and trailing slashes trimmed, so a
/// homepage of `https://acme.io/?ref=list` and suffix `/careers` gives
/// `https://acme.io/careers`.
pub fn probe_url(homepage: &Url, suffix: &str) -> Option<Url> {
    if homepage.cannot_be_a_base() {
        return None;
    }

    let mut probe = homepage.clone();
    probe.set_query(None);
    probe.set_fragment(None);

    let path = format!("{}{}", homepage.path().trim_end_matches('/'), suffix);
    probe.set_path(&path);
    Some(probe)
}

/// Returns true if the value starts with an explicit `scheme://`
fn has_scheme(value: &str) -> bool {
    match value.find("://") {
        Some(idx) => {
            let scheme = &value[..idx];
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        }
        None => false,
    }
}
