// src/sitemap/writer.rs
// =============================================================================
// Builds the sitemap document and writes it out.
//
// The document shape is fixed by the sitemaps.org protocol:
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//    <url>
//     <loc>https://example.com/page1</loc>
//    </url>
//   </urlset>
//
// We describe that shape with serde structs and let quick-xml serialize it.
// quick-xml also takes care of escaping '&', '<' and friends inside URLs.
// =============================================================================

use crate::error::SitemapError;
use quick_xml::se::Serializer;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// File name used when no output path is given
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Namespace every sitemap root element must carry
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

// <urlset xmlns="..."> with one <url> child per page.
// The '@' prefix tells quick-xml to write the field as an attribute.
#[derive(Debug, Serialize)]
#[serde(rename = "urlset")]
struct UrlSet<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "url")]
    urls: Vec<UrlEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct UrlEntry<'a> {
    loc: &'a str,
}

/// Encodes `urls` as a complete sitemap document (declaration included).
///
/// Entries appear in the same order as `urls`.
pub fn encode_sitemap<S: AsRef<str>>(urls: &[S]) -> Result<String, SitemapError> {
    let document = UrlSet {
        xmlns: SITEMAP_NAMESPACE,
        urls: urls.iter().map(|url| UrlEntry { loc: url.as_ref() }).collect(),
    };

    let mut xml = String::from(XML_HEADER);
    let mut serializer = Serializer::new(&mut xml);
    serializer.indent(' ', 1);
    document
        .serialize(serializer)
        .map_err(|e| SitemapError::Encode(e.to_string()))?;

    Ok(xml)
}

/// Writes the sitemap for `urls` to `sitemap.xml` in the current directory
pub fn write_sitemap<S: AsRef<str>>(urls: &[S]) -> Result<(), SitemapError> {
    write_sitemap_to(SITEMAP_FILE, urls)
}

/// Writes the sitemap for `urls` to `path`, replacing any existing file
pub fn write_sitemap_to<P, S>(path: P, urls: &[S]) -> Result<(), SitemapError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let xml = encode_sitemap(urls)?;

    std::fs::write(path, xml).map_err(|source| SitemapError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), entries = urls.len(), "wrote sitemap");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct ParsedUrlSet {
        #[serde(rename = "url", default)]
        urls: Vec<ParsedUrl>,
    }

    #[derive(Debug, Deserialize)]
    struct ParsedUrl {
        loc: String,
    }

    #[test]
    fn test_encode_two_urls() {
        let xml = encode_sitemap(&["https://a.com/x", "https://a.com/y"]).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert_eq!(xml.matches("<url>").count(), 2);

        let x = xml.find("<loc>https://a.com/x</loc>").unwrap();
        let y = xml.find("<loc>https://a.com/y</loc>").unwrap();
        assert!(x < y, "entries must keep input order");
    }

    #[test]
    fn test_encode_reads_back() {
        let urls = vec!["https://a.com/x".to_string(), "https://a.com/y".to_string()];
        let xml = encode_sitemap(&urls).unwrap();

        let parsed: ParsedUrlSet = quick_xml::de::from_str(&xml).unwrap();
        let locs: Vec<_> = parsed.urls.into_iter().map(|u| u.loc).collect();
        assert_eq!(locs, urls);
    }

    #[test]
    fn test_encode_indents_with_single_space() {
        let xml = encode_sitemap(&["https://a.com/x"]).unwrap();
        assert!(xml.contains("\n <url>\n  <loc>https://a.com/x</loc>\n </url>\n</urlset>"));
    }

    #[test]
    fn test_encode_escapes_special_characters() {
        let xml = encode_sitemap(&["https://a.com/search?q=1&page=2"]).unwrap();
        assert!(xml.contains("<loc>https://a.com/search?q=1&amp;page=2</loc>"));
    }

    #[test]
    fn test_encode_empty_list() {
        let urls: [&str; 0] = [];
        let xml = encode_sitemap(&urls).unwrap();
        assert!(xml.contains(SITEMAP_NAMESPACE));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_write_sitemap_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SITEMAP_FILE);

        write_sitemap_to(&path, &["https://a.com/x"]).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, encode_sitemap(&["https://a.com/x"]).unwrap());
    }

    #[test]
    fn test_write_sitemap_uses_fixed_name_in_current_dir() {
        assert_eq!(SITEMAP_FILE, "sitemap.xml");

        let dir = tempfile::tempdir().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let result = write_sitemap(&["https://a.com/x"]);
        std::env::set_current_dir(previous).unwrap();
        result.unwrap();

        let written = std::fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(written.contains("<loc>https://a.com/x</loc>"));
    }

    #[test]
    fn test_write_sitemap_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join(SITEMAP_FILE);

        let err = write_sitemap_to(&path, &["https://a.com/x"]).unwrap_err();
        assert!(matches!(err, SitemapError::Io { .. }));
    }
}
