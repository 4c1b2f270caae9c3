//! HTML parser producing the transport-independent document model
//!
//! This module turns raw markup into a [`Document`]:
//! - Every hyperlink (`<a href>`) in document order, with its visible text
//!   and its href resolved against the page URL
//! - The page title
//! - The visible page text (script and style content excluded)
//! - Raw JSON-LD blocks, which job pages use to publish `datePosted`
//!
//! The document owns plain strings only, so it can be moved freely between
//! tasks after parsing.

use scraper::{Html, Selector};
use url::Url;

/// A hyperlink element of a parsed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Visible link text with whitespace collapsed
    pub text: String,

    /// The href attribute exactly as written in the markup
    pub href: String,

    /// The href resolved to an absolute http(s) URL
    pub url: Url,
}

impl Anchor {
    /// Lower-cased link text, used for case-insensitive matching
    pub fn text_lower(&self) -> String {
        self.text.to_lowercase()
    }

    /// Lower-cased raw href, used for token matching
    pub fn href_lower(&self) -> String {
        self.href.to_lowercase()
    }
}

/// Parsed page exposing anchors, title and text
#[derive(Debug, Clone)]
pub struct Document {
    /// The URL the markup was served from (after redirects)
    pub url: Url,

    /// The page title (from `<title>`)
    pub title: Option<String>,

    /// All resolvable anchors in document order
    pub anchors: Vec<Anchor>,

    /// Visible text, whitespace collapsed
    pub text: String,

    /// Contents of `<script type="application/ld+json">` blocks
    pub structured_data: Vec<String>,
}

/// Parses HTML content into a [`Document`]
///
/// # Anchor Extraction Rules
///
/// **Include:**
/// - `<a href="...">` tags anywhere in the page, in document order
///
/// **Exclude:**
/// - `javascript:`, `mailto:`, `tel:` links
/// - Data URIs
/// - Fragment-only links (`#section`)
/// - Hrefs that do not resolve to an http(s) URL
///
/// # Example
///
/// ```
/// use career_scout::crawler::parse_html;
/// use url::Url;
///
/// let html = r#"<html><head><title>Acme</title></head><body><a href="/careers">Careers</a></body></html>"#;
/// let base_url = Url::parse("https://acme.io/").unwrap();
/// let document = parse_html(html, &base_url);
/// assert_eq!(document.title, Some("Acme".to_string()));
/// assert_eq!(document.anchors[0].url.as_str(), "https://acme.io/careers");
/// ```
pub fn parse_html(html: &str, base_url: &Url) -> Document {
    let document = Html::parse_document(html);

    Document {
        url: base_url.clone(),
        title: extract_title(&document),
        anchors: extract_anchors(&document, base_url),
        text: extract_text(&document),
        structured_data: extract_structured_data(&document),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| collapse_whitespace(&element.text().collect::<Vec<_>>().join(" ")))
        .filter(|s| !s.is_empty())
}

/// Extracts all resolvable anchors from the HTML document
fn extract_anchors(document: &Html, base_url: &Url) -> Vec<Anchor> {
    let mut anchors = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            if let Some(url) = resolve_link(href, base_url) {
                let text = collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "));
                anchors.push(Anchor {
                    text,
                    href: href.trim().to_string(),
                    url,
                });
            }
        }
    }

    anchors
}

/// Collects visible text, skipping script, style and noscript content
fn extract_text(document: &Html) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for node in document.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .map(|element| matches!(element.name(), "script" | "style" | "noscript"))
            .unwrap_or(false);

        if !hidden {
            parts.push(text);
        }
    }

    collapse_whitespace(&parts.join(" "))
}

/// Collects the raw contents of JSON-LD script blocks
fn extract_structured_data(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse(r#"script[type="application/ld+json"]"#) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .filter(|content| !content.trim().is_empty())
        .collect()
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - fragment-only links
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
pub fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lower = href.to_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) if matches!(absolute_url.scheme(), "http" | "https") => {
            Some(absolute_url)
        }
        _ => None,
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
