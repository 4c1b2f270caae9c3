use career_scout::config::Config;
use chrono::NaiveDate;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Fixed run date so synthesized stamps are predictable
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Default configuration without politeness delays
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.fetcher.timeout_secs = 5;
    config.politeness.per_host_delay_ms = 0;
    config.politeness.company_cooldown_ms = 0;
    config
}

/// 200 response with an HTML body
pub fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!("<html><head><title>Test</title></head><body>{}</body></html>", body),
        "text/html",
    )
}

/// Serves `body` as HTML for GET requests to `route`
pub async fn page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(body))
        .mount(server)
        .await;
}
