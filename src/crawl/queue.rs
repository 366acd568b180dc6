// src/crawl/queue.rs
// =============================================================================
// The Crawl Driver: a bounded breadth-first walk over a site's links.
//
// How it works:
// 1. The first frontier is just the seed URL (minus one trailing '/')
// 2. Each round, every frontier URL we haven't seen yet is marked visited,
//    fetched, and its links go into the next frontier
// 3. After `max_depth` rounds we return everything we visited
//
// A URL only counts as discovered once a round expands it, so max_depth = 0
// returns nothing and max_depth = 1 returns just the seed.
//
// Termination doesn't depend on the link graph: the loop runs at most
// `max_depth` times and the visited set stops any page being fetched twice.
// =============================================================================

use super::collect::{strip_trailing_slash, LinkCollector};
use std::collections::HashSet;
use std::mem;
use tracing::{debug, info};

// Crawls from `seed` for `max_depth` expansion rounds.
//
// Returns the set of visited URLs (unordered; sort it if you need stable
// output). Pages that fail to load are still counted as visited, they just
// contribute no links.
pub async fn crawl(collector: &LinkCollector, seed: &str, max_depth: usize) -> HashSet<String> {
    info!(seed, max_depth, "starting crawl");

    let mut visited: HashSet<String> = HashSet::new();
    // The seed follows the same slash rule as every discovered link
    let mut next_frontier: HashSet<String> =
        HashSet::from([strip_trailing_slash(seed.to_string())]);

    for depth in 1..=max_depth {
        let frontier = mem::take(&mut next_frontier);
        if frontier.is_empty() {
            debug!(depth, "frontier is empty, stopping early");
            break;
        }

        for url in frontier {
            if !visited.insert(url.clone()) {
                continue;
            }

            let links = collector.collect(&url).await;
            debug!(depth, url = %url, links = links.len(), "expanded page");

            next_frontier.extend(links);
        }
    }

    info!(seed, pages = visited.len(), "crawl finished");
    visited
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why two sets instead of a VecDeque?
//    - Each round expands a whole level at once, so we swap in a fresh set
//      for the next level instead of tracking a depth per queue entry
//    - Sets also drop duplicate links found on several pages of one level
//
// 2. What does mem::take do?
//    - Moves the value out and leaves Default::default() (an empty set) behind
//    - Cheaper than cloning the frontier and then clearing it
//
// 3. Why does visited.insert() double as the "seen it?" check?
//    - HashSet::insert returns false when the value was already there
//    - One lookup instead of contains() followed by insert()
// -----------------------------------------------------------------------------
