// src/sitemap/mod.rs
// =============================================================================
// This module turns a list of URLs into a sitemaps.org sitemap.xml.
//
// Submodules:
// - writer: builds the XML document and writes it to disk
// =============================================================================

mod writer;

pub use writer::{encode_sitemap, write_sitemap, write_sitemap_to, SITEMAP_FILE, SITEMAP_NAMESPACE};
