use clap::Parser;
use section_scrape::ScrapeConfig;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "section-scrape")]
#[command(about = "Extracts section-aware structured content from a web page as JSON")]
#[command(version)]
pub struct Args {
    /// URL to scrape
    pub url: String,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// WebDriver endpoint used for the rendered fetch
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Visible-text length below which the page is re-fetched through the browser
    #[arg(long)]
    pub threshold: Option<usize>,

    /// Character limit for a section's concatenated text
    #[arg(long)]
    pub text_limit: Option<usize>,

    /// Static fetch timeout in seconds
    #[arg(long)]
    pub fetch_timeout: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

/// Build the effective configuration: file (or defaults), then flag
/// overrides on top
pub fn build_config(args: &Args) -> Result<ScrapeConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => ScrapeConfig::from_file(path)?,
        None => ScrapeConfig::default(),
    };

    if let Some(webdriver_url) = &args.webdriver_url {
        config.webdriver_url = webdriver_url.clone();
    }
    if let Some(threshold) = args.threshold {
        config.completeness_threshold = threshold;
    }
    if let Some(text_limit) = args.text_limit {
        config.text_limit = text_limit;
    }
    if let Some(fetch_timeout) = args.fetch_timeout {
        config.fetch_timeout_secs = fetch_timeout;
    }

    Ok(config)
}
