use crate::config::ScrapeConfig;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};

/// Fetches a page with a plain HTTP GET, no script execution.
///
/// Sends browser-like headers to reduce 403 responses, follows redirects,
/// and treats non-2xx statuses as errors. The caller converts a failure
/// into a non-fatal fetch error and keeps the pipeline going.
pub async fn fetch_static(url: &str, config: &ScrapeConfig) -> Result<String, reqwest::Error> {
    ::log::debug!("Static fetch: {}", url);

    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.fetch_timeout())
        .build()?;

    let response = client
        .get(url)
        .header(
            ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .send()
        .await?
        .error_for_status()?;

    let body = response.text().await?;
    ::log::debug!("Static fetch returned {} bytes for {}", body.len(), url);
    Ok(body)
}
