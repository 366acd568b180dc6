// src/error.rs
// =============================================================================
// Error types for the crawl and sitemap modules.
//
// The application layer (main.rs) works with anyhow::Result, but the modules
// underneath return typed errors so callers can tell the failure kinds apart.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

// Everything that can go wrong while fetching one page.
//
// These never escape the Link Collector: a failed fetch is logged and
// treated as a page with zero links.
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {0} from {1}")]
    Status(u16, String),

    #[error("Not an HTML page (content-type: {0})")]
    NotHtml(String),
}

// Errors from building or writing the sitemap document
#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("failed to encode sitemap XML: {0}")]
    Encode(String),

    #[error("failed to write sitemap to {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
