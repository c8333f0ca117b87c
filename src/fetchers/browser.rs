use crate::config::ScrapeConfig;
use crate::results::{ErrorPhase, Interactions, ScrapeError};
use fantoccini::{Client, ClientBuilder, Locator};
use regex::Regex;
use tokio::time::{sleep, timeout};

/// Script used for each scroll-to-bottom step
const SCROLL_SCRIPT: &str = "window.scrollTo(0, document.body.scrollHeight);";

/// Interactive element tags checked for a "load more" control, in order
/// of preference
const CLICKABLE_TAGS: [&str; 2] = ["button", "a"];

/// Outcome of a rendered fetch. `html` is the final page source when
/// rendering got far enough to take a snapshot; the interaction log and
/// any non-fatal errors are returned regardless.
pub struct RenderOutcome {
    pub html: Option<String>,
    pub interactions: Interactions,
    pub errors: Vec<ScrapeError>,
}

/// Loads the page in a headless browser, lets scripts run, performs the
/// scroll and click interactions, and returns the hydrated page source.
///
/// Every failure is converted into a non-fatal render error; the session
/// is closed on every exit path so no browser resources outlive the call.
pub async fn fetch_rendered(url: &str, config: &ScrapeConfig) -> RenderOutcome {
    ::log::info!("Rendered fetch: {}", url);

    let mut interactions = Interactions::default();
    interactions.visit(url);
    let mut errors = Vec::new();

    let client = match connect(&config.webdriver_url).await {
        Some(client) => client,
        None => {
            errors.push(ScrapeError::new(
                ErrorPhase::Render,
                format!(
                    "failed to connect to WebDriver at {}",
                    config.webdriver_url
                ),
            ));
            return RenderOutcome {
                html: None,
                interactions,
                errors,
            };
        }
    };

    // The whole rendered pass runs under one bounded budget so a hung
    // page cannot stall the pipeline
    let html = match timeout(
        config.render_timeout(),
        render_session(&client, url, config, &mut interactions, &mut errors),
    )
    .await
    {
        Ok(Ok(source)) => Some(source),
        Ok(Err(message)) => {
            ::log::error!("Rendered fetch failed for {}: {}", url, message);
            errors.push(ScrapeError::new(ErrorPhase::Render, message));
            None
        }
        Err(_) => {
            ::log::error!("Rendered fetch timed out for {}", url);
            errors.push(ScrapeError::new(
                ErrorPhase::Render,
                format!(
                    "rendered fetch timed out after {}s",
                    config.render_timeout_secs
                ),
            ));
            None
        }
    };

    // The session belongs to this request alone; release it on every path
    if let Err(e) = client.close().await {
        ::log::warn!("Failed to close WebDriver session: {}", e);
    }

    RenderOutcome {
        html,
        interactions,
        errors,
    }
}

/// Connects to the WebDriver instance, falling back to common local
/// driver endpoints when the configured one is unreachable
async fn connect(webdriver_url: &str) -> Option<Client> {
    match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Some(client);
        }
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
        }
    }

    let fallback_urls = [
        "http://localhost:9515", // ChromeDriver default
        "http://localhost:4444", // Selenium/geckodriver default
        "http://127.0.0.1:4444", // Try with IP instead of localhost
    ];

    for url in fallback_urls.iter() {
        if *url == webdriver_url {
            continue; // Skip if it's the same as the one we already tried
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Some(client);
        }
    }

    ::log::error!("Failed to connect to any WebDriver server");
    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    None
}

/// Navigates and performs the interaction sequence: scrolls first, then
/// the single "load more" click, then the final source snapshot.
///
/// Navigation failure is fatal to rendering; interaction failures are not.
async fn render_session(
    client: &Client,
    url: &str,
    config: &ScrapeConfig,
    interactions: &mut Interactions,
    errors: &mut Vec<ScrapeError>,
) -> Result<String, String> {
    match timeout(config.navigation_timeout(), client.goto(url)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(format!("navigation to {} failed: {}", url, e)),
        Err(_) => {
            return Err(format!(
                "navigation to {} timed out after {}s",
                url, config.navigation_timeout_secs
            ));
        }
    }

    // Scrolling precedes the click attempt so controls revealed by
    // lazy loading are still discoverable
    perform_scrolls(client, config, interactions).await;
    click_load_more(client, config, interactions, errors).await;

    // Record the URL the browser ended up on (redirects, same-page state)
    match client.current_url().await {
        Ok(current) => interactions.visit(current.as_str()),
        Err(e) => ::log::warn!("Failed to read current URL: {}", e),
    }

    client
        .source()
        .await
        .map_err(|e| format!("failed to take page source snapshot: {}", e))
}

/// Performs the configured number of scroll-to-bottom steps, each
/// followed by a settle wait. A step that errors is skipped, not counted
/// and not retried.
async fn perform_scrolls(client: &Client, config: &ScrapeConfig, interactions: &mut Interactions) {
    for step in 0..config.scroll_count {
        match client.execute(SCROLL_SCRIPT, vec![]).await {
            Ok(_) => {
                interactions.scroll_count += 1;
                sleep(config.scroll_settle()).await;
            }
            Err(e) => {
                ::log::warn!("Scroll step {} failed, skipping: {}", step + 1, e);
            }
        }
    }
}

/// Clicks the first interactive element whose visible text matches
/// "load more" or "show more" (case-insensitive). Buttons are checked
/// before anchors. At most one click per scrape; a failed click is
/// swallowed as a non-fatal error.
async fn click_load_more(
    client: &Client,
    config: &ScrapeConfig,
    interactions: &mut Interactions,
    errors: &mut Vec<ScrapeError>,
) {
    let pattern = Regex::new(r"(?i)\b(load more|show more)\b").unwrap();

    for tag in CLICKABLE_TAGS {
        let elements = match client.find_all(Locator::Css(tag)).await {
            Ok(elements) => elements,
            Err(e) => {
                ::log::warn!("Failed to query {} elements: {}", tag, e);
                continue;
            }
        };

        for element in elements {
            let text = match element.text().await {
                Ok(text) => text,
                Err(_) => continue, // Element detached mid-scan
            };
            if !pattern.is_match(&text) {
                continue;
            }

            let descriptor = format!("{}:has-text('{}')", tag, text.trim());
            match element.click().await {
                Ok(_) => {
                    ::log::info!("Clicked {}", descriptor);
                    interactions.clicked_selectors.push(descriptor);
                    sleep(config.click_settle()).await;
                }
                Err(e) => {
                    ::log::warn!("Click on {} failed: {}", descriptor, e);
                    errors.push(ScrapeError::new(
                        ErrorPhase::Render,
                        format!("click on {} failed: {}", descriptor, e),
                    ));
                }
            }

            // Only the first matching element is ever attempted
            return;
        }
    }
}
