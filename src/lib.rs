// Re-export modules
pub mod config;
pub mod fetchers;
pub mod parsers;
pub mod pipeline;
pub mod results;

// Re-export commonly used types for convenience
pub use config::ScrapeConfig;
pub use results::{ScrapeResult, Section, SectionTag};

/// Builder for a single scrape invocation
///
/// Each invocation is independent: it owns its configuration and, when
/// rendering is needed, its own WebDriver session. Concurrent scrapes
/// share no mutable state.
pub struct Scrape {
    url: String,
    config: ScrapeConfig,
}

impl Scrape {
    /// Create a new scrape for the given URL with default configuration
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            config: ScrapeConfig::default(),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: ScrapeConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = ScrapeConfig::from_file(path)?;
        Ok(self)
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(mut self, json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = ScrapeConfig::from_json(json)?;
        Ok(self)
    }

    /// Run the scrape pipeline.
    ///
    /// Never fails: all errors end up inside the returned result's
    /// `errors` sequence.
    pub async fn run(mut self) -> ScrapeResult {
        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.config.webdriver_url = webdriver_url;
            }
        }

        pipeline::scrape(&self.url, &self.config).await
    }
}
