// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Submodules:
// - collect: fetches one page and returns its same-origin links
// - queue: breadth-first crawl driver, bounded by a depth limit
//
// Crawling is strictly sequential: one page is fetched at a time.
// =============================================================================

mod collect;
mod queue;

pub use collect::LinkCollector;
pub use queue::crawl;
