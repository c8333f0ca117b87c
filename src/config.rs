use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Configuration for the scrape pipeline
///
/// Every threshold and timeout the pipeline uses flows through here;
/// nothing is read from ambient globals mid-scrape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Timeout for the static HTTP fetch, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Overall budget for the rendered fetch (connect, navigate,
    /// interactions, snapshot), in seconds
    #[serde(default = "default_render_timeout_secs")]
    pub render_timeout_secs: u64,

    /// Budget for browser navigation alone, in seconds
    #[serde(default = "default_navigation_timeout_secs")]
    pub navigation_timeout_secs: u64,

    /// Number of scroll-to-bottom steps performed during rendering
    #[serde(default = "default_scroll_count")]
    pub scroll_count: u32,

    /// Wait after each scroll for lazy content to settle, in milliseconds
    #[serde(default = "default_scroll_settle_ms")]
    pub scroll_settle_ms: u64,

    /// Wait after a successful "load more" click, in milliseconds
    #[serde(default = "default_click_settle_ms")]
    pub click_settle_ms: u64,

    /// Character limit for a section's concatenated text
    #[serde(default = "default_text_limit")]
    pub text_limit: usize,

    /// Static pages with less visible text than this are treated as
    /// JS-dependent and re-fetched through the browser
    #[serde(default = "default_completeness_threshold")]
    pub completeness_threshold: usize,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// User agent sent on the static fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: default_fetch_timeout_secs(),
            render_timeout_secs: default_render_timeout_secs(),
            navigation_timeout_secs: default_navigation_timeout_secs(),
            scroll_count: default_scroll_count(),
            scroll_settle_ms: default_scroll_settle_ms(),
            click_settle_ms: default_click_settle_ms(),
            text_limit: default_text_limit(),
            completeness_threshold: default_completeness_threshold(),
            webdriver_url: default_webdriver_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl ScrapeConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Static fetch timeout as a Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Rendered fetch budget as a Duration
    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }

    /// Navigation budget as a Duration
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    /// Post-scroll settle wait as a Duration
    pub fn scroll_settle(&self) -> Duration {
        Duration::from_millis(self.scroll_settle_ms)
    }

    /// Post-click settle wait as a Duration
    pub fn click_settle(&self) -> Duration {
        Duration::from_millis(self.click_settle_ms)
    }
}

/// Default static fetch timeout in seconds
fn default_fetch_timeout_secs() -> u64 {
    10
}

/// Default overall rendered fetch budget in seconds
fn default_render_timeout_secs() -> u64 {
    45
}

/// Default navigation budget in seconds
fn default_navigation_timeout_secs() -> u64 {
    30
}

/// Default number of scroll-to-bottom steps
fn default_scroll_count() -> u32 {
    3
}

/// Default post-scroll settle wait in milliseconds
fn default_scroll_settle_ms() -> u64 {
    1500
}

/// Default post-click settle wait in milliseconds
fn default_click_settle_ms() -> u64 {
    2000
}

/// Default section text character limit
fn default_text_limit() -> usize {
    2000
}

/// Default completeness threshold in visible text characters
fn default_completeness_threshold() -> usize {
    500
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default browser-like user agent for the static fetch
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}
