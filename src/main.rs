use log::{error, info, warn};
use recipe_scrape::{RecipeScraper, ScraperConfig};
use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    // Get the URL from command-line arguments
    let Some(url) = env::args().nth(1) else {
        eprintln!("Usage: recipe-scrape <URL>");
        return ExitCode::FAILURE;
    };

    match run(&url).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = ScraperConfig::load()?;
    let scraper = RecipeScraper::from_config(&config)?;

    let result = scraper.scrape(url).await?;
    info!("Extraction outcome: {:?}", result.outcome);

    if result.is_degraded() {
        warn!("Completion fallback unavailable; recipe may be incomplete");
        eprintln!("Warning: recipe may be incomplete");
    }

    let missing = result.recipe.missing_required_fields();
    if !missing.is_empty() {
        warn!("Recipe is missing required fields: {}", missing.join(", "));
    }

    println!("{}", serde_json::to_string_pretty(&result.recipe)?);
    Ok(())
}
