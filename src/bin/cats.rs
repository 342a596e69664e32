use anyhow::{Context, Result};
use cat_api::{CatService, Config, RequestLimit};
use clap::Parser;
use colored::Colorize;

/// Fetch a handful of cat images
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// How many cats to show, between 6 and 10
    count: Option<String>,

    /// Print the raw JSON instead of image URLs
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let config = Config::new();
    let limit = RequestLimit::parse(args.count.as_deref());

    eprintln!(
        "{}",
        format!("\n=== Fetching {} cats from {} ===\n", limit, config.api_url)
            .cyan()
    );

    let service = CatService::new(config);
    let images = service
        .fetch_images_from_input(args.count.as_deref())
        .await
        .context("Failed to fetch cats")?;

    if args.json {
        println!("{}", cat_gallery::render_json(&images)?);
    } else {
        for line in cat_gallery::render_lines(&images) {
            println!("{}", line);
        }
    }

    Ok(())
}
