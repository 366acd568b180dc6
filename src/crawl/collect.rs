// src/crawl/collect.rs
// =============================================================================
// The Link Collector: turns one page URL into the same-site links on it.
//
// How it works:
// 1. GET the page (reqwest follows redirects for us)
// 2. Work out the origin (scheme://host[:port]) of where the request landed
// 3. Pull every <a href> out of the HTML with scraper
// 4. Make root-relative links absolute, keep http(s) links, drop the rest
// 5. Strip one trailing slash, dedupe, keep only links under the origin
//
// Failure policy:
// A page that can't be fetched (network error, bad status, not HTML) simply
// contributes no links. The error is logged and the crawl carries on.
// =============================================================================

use crate::error::CrawlError;
use reqwest::{header, Client};
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use tracing::{debug, warn};
use url::Url;

// A page as it came back from the server
#[derive(Debug)]
struct FetchedPage {
    // Where the request actually ended up after redirects
    final_url: Url,
    html: String,
}

// Fetches pages and extracts their same-origin links.
//
// Holds a single reqwest Client so connections are pooled across the crawl.
#[derive(Debug, Clone, Default)]
pub struct LinkCollector {
    client: Client,
}

impl LinkCollector {
    // Creates a collector with reqwest's default client settings
    // (no custom timeout, headers or cookies)
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    // Collects the same-origin links found on `page_url`.
    //
    // Never fails: any fetch error is logged and yields an empty Vec.
    pub async fn collect(&self, page_url: &str) -> Vec<String> {
        let page = match self.fetch_page(page_url).await {
            Ok(page) => page,
            Err(e) => {
                warn!(url = page_url, error = %e, "failed to fetch page, treating it as having no links");
                return Vec::new();
            }
        };

        let origin = origin_of(&page.final_url);
        let hrefs = extract_hrefs(&page.html);
        let links = normalize_links(&origin, &hrefs);

        debug!(
            url = page_url,
            origin = %origin,
            hrefs = hrefs.len(),
            links = links.len(),
            "collected links"
        );

        links
    }

    async fn fetch_page(&self, url: &str) -> Result<FetchedPage, CrawlError> {
        let url = Url::parse(url).map_err(|e| CrawlError::InvalidUrl(format!("{}: {}", url, e)))?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(CrawlError::Status(
                response.status().as_u16(),
                response.url().to_string(),
            ));
        }

        // No content-type at all is given the benefit of the doubt
        if let Some(content_type) = response.headers().get(header::CONTENT_TYPE) {
            let content_type = content_type
                .to_str()
                .unwrap_or_default()
                .to_ascii_lowercase();
            if !content_type.contains("html") {
                return Err(CrawlError::NotHtml(content_type));
            }
        }

        let final_url = response.url().clone();
        let html = response.text().await?;

        Ok(FetchedPage { final_url, html })
    }
}

// Returns "scheme://host" for a URL, with ":port" only when it isn't the
// scheme's default
pub fn origin_of(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    }
}

// Returns the raw href value of every <a href> element, in document order
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").expect("'a[href]' is a valid selector");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

// Turns raw hrefs into the deduplicated, same-origin links of a page.
//
// - "/path"        -> origin + "/path"
// - "http..."      -> kept as written
// - anything else  -> dropped (mailto:, #anchor, relative paths, ...)
//
// One trailing '/' is stripped, then only links starting with `origin` are
// kept. The check is a plain string prefix, so "https://a.com.evil.com" passes
// for origin "https://a.com".
pub fn normalize_links<I, S>(origin: &str, hrefs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let unique: BTreeSet<String> = hrefs
        .into_iter()
        .filter_map(|href| absolutize(origin, href.as_ref()))
        .map(strip_trailing_slash)
        .filter(|link| link.starts_with(origin))
        .collect();

    unique.into_iter().collect()
}

// Drops exactly one trailing '/', so "https://a.com/" and "https://a.com"
// are the same page
pub fn strip_trailing_slash(link: String) -> String {
    match link.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => link,
    }
}

fn absolutize(origin: &str, href: &str) -> Option<String> {
    if href.starts_with('/') {
        Some(format!("{}{}", origin, href))
    } else if href.starts_with("http") {
        Some(href.to_string())
    } else {
        None
    }
}
