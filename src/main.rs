use clap::Parser;
use section_scrape::Scrape;

mod args;
use args::{Args, build_config};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting scrape for URL: {}", args.url);

    // JSON goes to stdout, so operator hints go to stderr
    eprintln!("Note: rendering JS-heavy pages requires a WebDriver server (e.g., ChromeDriver).");
    eprintln!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            std::process::exit(2);
        }
    };

    let start_time = std::time::Instant::now();
    let result = Scrape::new(&args.url).with_config(config).run().await;

    ::log::info!(
        "Scrape complete - {} sections, {} errors in {:.2} seconds",
        result.sections.len(),
        result.errors.len(),
        start_time.elapsed().as_secs_f64()
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };

    match json {
        Ok(output) => println!("{}", output),
        Err(e) => {
            ::log::error!("Failed to serialize result: {}", e);
            std::process::exit(1);
        }
    }
}
