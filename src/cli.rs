// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - sitemap: crawl a site and write sitemap.xml
// - crawl:   crawl a site and print the pages found (plain list or JSON)
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sitemap-builder",
    version,
    about = "Crawl a website and build a sitemap.xml for it",
    long_about = "sitemap-builder walks a website breadth-first from a starting URL, \
                  collects every page on the same origin up to a depth limit, \
                  and writes them out as a sitemaps.org sitemap.xml."
)]
pub struct Cli {
    /// Show debug logging (every page fetched and how many links it had)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website and write its sitemap
    ///
    /// Example: sitemap-builder sitemap https://example.com --max-depth 3
    Sitemap {
        #[command(flatten)]
        crawl: CrawlArgs,

        /// Where to write the sitemap (default: sitemap.xml in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Crawl a website and print the pages found
    ///
    /// Example: sitemap-builder crawl https://example.com --json
    Crawl {
        #[command(flatten)]
        crawl: CrawlArgs,

        /// Print the pages as a JSON array instead of one per line
        #[arg(long)]
        json: bool,
    },
}

// Arguments shared by every command that crawls
#[derive(Args, Debug)]
pub struct CrawlArgs {
    /// Website URL to start from (e.g., https://example.com)
    pub url: String,

    /// Number of crawl rounds
    ///
    /// Depth 0 = nothing is crawled
    /// Depth 1 = just the starting page
    /// Depth 2 = starting page + the pages it links to
    /// etc.
    #[arg(long, default_value_t = 3)]
    pub max_depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sitemap_defaults() {
        let cli = Cli::parse_from(["sitemap-builder", "sitemap", "https://example.com"]);
        match cli.command {
            Commands::Sitemap { crawl, output } => {
                assert_eq!(crawl.url, "https://example.com");
                assert_eq!(crawl.max_depth, 3);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_crawl_with_flags() {
        let cli = Cli::parse_from([
            "sitemap-builder",
            "crawl",
            "https://example.com",
            "--max-depth",
            "5",
            "--json",
            "-v",
        ]);
        match cli.command {
            Commands::Crawl { crawl, json } => {
                assert_eq!(crawl.max_depth, 5);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(cli.verbose);
    }
}
