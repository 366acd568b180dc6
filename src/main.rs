// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr)
// 3. Crawl the site and sort what we found
// 4. Write the sitemap or print the pages
// 5. Exit with proper code (0 = success, 1 = no pages found, 2 = error)
// =============================================================================

mod cli;
mod crawl;
mod error;
mod sitemap;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands, CrawlArgs};
use crawl::LinkCollector;
use tracing::Level;
use url::Url;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so stdout only carries command output
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

// Returns:
//   Ok(0) = pages found and written/printed
//   Ok(1) = the crawl found no pages
//   Err   = bad input or the sitemap couldn't be written
async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Sitemap { crawl, output } => handle_sitemap(&crawl, output).await,
        Commands::Crawl { crawl, json } => handle_crawl(&crawl, json).await,
    }
}

async fn handle_sitemap(args: &CrawlArgs, output: Option<std::path::PathBuf>) -> Result<i32> {
    println!("🔍 Crawling website: {}", args.url);
    println!("📊 Max crawl depth: {}", args.max_depth);

    let pages = discover_pages(args).await?;
    if pages.is_empty() {
        println!("⚠️  No pages found, sitemap not written");
        return Ok(1);
    }

    match &output {
        Some(path) => sitemap::write_sitemap_to(path, &pages)?,
        None => sitemap::write_sitemap(&pages)?,
    }

    let written_to = output
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| sitemap::SITEMAP_FILE.to_string());
    println!("✅ Wrote {} page(s) to {}", pages.len(), written_to);

    Ok(0)
}

async fn handle_crawl(args: &CrawlArgs, json: bool) -> Result<i32> {
    let pages = discover_pages(args).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pages)?);
    } else {
        for page in &pages {
            println!("{}", page);
        }
        println!("\n📋 Total: {} page(s)", pages.len());
    }

    Ok(if pages.is_empty() { 1 } else { 0 })
}

// Validates the starting URL, runs the crawl and returns the pages sorted
async fn discover_pages(args: &CrawlArgs) -> Result<Vec<String>> {
    let seed = Url::parse(&args.url).with_context(|| format!("invalid URL '{}'", args.url))?;
    if seed.scheme() != "http" && seed.scheme() != "https" {
        bail!("only http and https URLs can be crawled, got '{}'", args.url);
    }

    let collector = LinkCollector::new();
    let mut pages: Vec<String> = crawl::crawl(&collector, &args.url, args.max_depth)
        .await
        .into_iter()
        .collect();
    pages.sort();

    Ok(pages)
}
