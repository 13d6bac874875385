//! Press article metadata extraction from HTML head tags.
//!
//! Each record field is filled from an ordered chain of candidate extractors.
//! The first candidate producing a non-blank value wins; if none does, the
//! field gets its documented default. Extraction never fails, so a partially
//! tagged or malformed page still yields a complete [`ArticleRecord`].
//!
//! | Field | Candidates | Default |
//! |-------|------------|---------|
//! | `title` | `og:title`, `<title>` | `"Untitled"` |
//! | `description` | `og:description`, `meta[name=description]` | `"No description available"` |
//! | `image` | `og:image` | [`DEFAULT_IMAGE`] |
//! | `date` | `article:published_time` | `"Unknown date"` |
//! | `source` | host of the article URL | `"Unknown source"` |

use crate::models::ArticleRecord;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_DESCRIPTION: &str = "No description available";
pub const DEFAULT_IMAGE: &str = "assets/placeholder.webp";
pub const DEFAULT_DATE: &str = "Unknown date";
pub const DEFAULT_SOURCE: &str = "Unknown source";

static OG_TITLE: Lazy<Selector> = Lazy::new(|| selector(r#"meta[property="og:title"]"#));
static DOCUMENT_TITLE: Lazy<Selector> = Lazy::new(|| selector("title"));
static OG_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| selector(r#"meta[property="og:description"]"#));
static META_DESCRIPTION: Lazy<Selector> = Lazy::new(|| selector(r#"meta[name="description"]"#));
static OG_IMAGE: Lazy<Selector> = Lazy::new(|| selector(r#"meta[property="og:image"]"#));
static PUBLISHED_TIME: Lazy<Selector> =
    Lazy::new(|| selector(r#"meta[property="article:published_time"]"#));

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// A single candidate source for one field.
type Candidate = fn(&Html) -> Option<String>;

const TITLE_CHAIN: &[Candidate] = &[og_title, document_title];
const DESCRIPTION_CHAIN: &[Candidate] = &[og_description, meta_description];
const IMAGE_CHAIN: &[Candidate] = &[og_image];
const DATE_CHAIN: &[Candidate] = &[published_time];

/// Build an [`ArticleRecord`] from a page's HTML using the default placeholder image.
///
/// # Arguments
///
/// * `html` - Raw page body, possibly malformed or truncated
/// * `source_uri` - The URL the page was fetched from; copied verbatim into `link`
pub fn extract(html: &str, source_uri: &str) -> ArticleRecord {
    extract_with_image(html, source_uri, DEFAULT_IMAGE)
}

/// Build an [`ArticleRecord`], using `default_image` when the page has no `og:image`.
///
/// A relative `og:image` is resolved against `source_uri` when that URL parses.
pub fn extract_with_image(html: &str, source_uri: &str, default_image: &str) -> ArticleRecord {
    let document = Html::parse_document(html);
    let base = Url::parse(source_uri).ok();

    let image = first_non_empty(&document, IMAGE_CHAIN)
        .map(|image| resolve_against(base.as_ref(), image))
        .unwrap_or_else(|| default_image.to_string());

    ArticleRecord {
        title: first_non_empty(&document, TITLE_CHAIN).unwrap_or_else(|| DEFAULT_TITLE.into()),
        description: first_non_empty(&document, DESCRIPTION_CHAIN)
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.into()),
        image,
        date: first_non_empty(&document, DATE_CHAIN).unwrap_or_else(|| DEFAULT_DATE.into()),
        source: host_of(base.as_ref()).unwrap_or_else(|| DEFAULT_SOURCE.into()),
        link: source_uri.to_string(),
    }
}

/// Evaluate candidates in priority order, returning the first trimmed non-blank value.
fn first_non_empty(document: &Html, chain: &[Candidate]) -> Option<String> {
    chain.iter().find_map(|candidate| {
        candidate(document)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
}

fn og_title(document: &Html) -> Option<String> {
    meta_content(document, &OG_TITLE)
}

fn document_title(document: &Html) -> Option<String> {
    document
        .select(&DOCUMENT_TITLE)
        .next()
        .map(|element| element.text().collect::<String>())
}

fn og_description(document: &Html) -> Option<String> {
    meta_content(document, &OG_DESCRIPTION)
}

fn meta_description(document: &Html) -> Option<String> {
    meta_content(document, &META_DESCRIPTION)
}

fn og_image(document: &Html) -> Option<String> {
    meta_content(document, &OG_IMAGE)
}

fn published_time(document: &Html) -> Option<String> {
    meta_content(document, &PUBLISHED_TIME)
}

fn host_of(url: Option<&Url>) -> Option<String> {
    url.and_then(Url::host_str)
        .filter(|host| !host.is_empty())
        .map(str::to_string)
}

fn resolve_against(base: Option<&Url>, image: String) -> String {
    match base.map(|base| base.join(&image)) {
        Some(Ok(resolved)) => resolved.to_string(),
        _ => image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = r#"<!doctype html>
<html><head>
  <title>Fallback Title | Example News</title>
  <meta property="og:title" content="Drone startup raises seed round">
  <meta property="og:description" content="The company plans to expand its fleet.">
  <meta name="description" content="Plain description">
  <meta property="og:image" content="https://cdn.example/lead.jpg">
  <meta property="article:published_time" content="2024-09-12T08:00:00Z">
</head><body><p>Story</p></body></html>"#;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_extract_prefers_open_graph() {
        let record = extract(FULL_PAGE, "https://news.example.com/story/1");

        assert_eq!(record.title, "Drone startup raises seed round");
        assert_eq!(record.description, "The company plans to expand its fleet.");
        assert_eq!(record.image, "https://cdn.example/lead.jpg");
        assert_eq!(record.date, "2024-09-12T08:00:00Z");
        assert_eq!(record.source, "news.example.com");
        assert_eq!(record.link, "https://news.example.com/story/1");
    }

    #[test]
    fn test_extract_falls_back_to_standard_tags() {
        let html = r#"<html><head>
            <title>
                Plain Title
            </title>
            <meta name="description" content="Standard description">
        </head></html>"#;
        let record = extract(html, "https://blog.example/post");

        assert_eq!(record.title, "Plain Title");
        assert_eq!(record.description, "Standard description");
        assert_eq!(record.image, DEFAULT_IMAGE);
        assert_eq!(record.date, DEFAULT_DATE);
    }

    #[test]
    fn test_extract_defaults_for_empty_document() {
        let record = extract("", "https://a.example/x");

        assert_eq!(record.title, DEFAULT_TITLE);
        assert_eq!(record.description, DEFAULT_DESCRIPTION);
        assert_eq!(record.image, DEFAULT_IMAGE);
        assert_eq!(record.date, DEFAULT_DATE);
        assert_eq!(record.source, "a.example");
        for field in [&record.title, &record.description, &record.image, &record.date] {
            assert!(!field.is_empty());
        }
    }

    #[test]
    fn test_extract_tolerates_malformed_html() {
        let html = r#"<html><head><meta property="og:title" content="Broken <b>page"><title>Unclosed"#;
        let record = extract(html, "https://a.example/x");
        assert_eq!(record.title, "Broken <b>page");
        assert_eq!(record.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_blank_open_graph_value_falls_through() {
        let html = r#"<head><meta property="og:title" content="   "><title>Real</title></head>"#;
        assert_eq!(extract(html, "https://a.example/x").title, "Real");
    }

    #[test]
    fn test_link_is_verbatim() {
        for uri in [
            "https://a.example/x",
            "  https://a.example/padded  ",
            "HTTPS://A.EXAMPLE/Upper?q=1#frag",
            "not a url",
            "",
        ] {
            assert_eq!(extract("<html></html>", uri).link, uri);
        }
    }

    #[test]
    fn test_unparseable_uri_has_unknown_source() {
        assert_eq!(extract("", "not a url").source, DEFAULT_SOURCE);
        assert_eq!(extract("", "mailto:press@example.com").source, DEFAULT_SOURCE);
    }

    #[test]
    fn test_relative_image_resolved_against_source() {
        let html = r#"<head><meta property="og:image" content="/img/lead.png"></head>"#;
        let record = extract(html, "https://news.example.com/story/1");
        assert_eq!(record.image, "https://news.example.com/img/lead.png");
    }

    #[test]
    fn test_custom_default_image() {
        let record = extract_with_image("", "https://a.example/x", "assets/avawatz.webp");
        assert_eq!(record.image, "assets/avawatz.webp");
    }

    #[test]
    fn test_title_candidates_in_isolation() {
        let doc = parse(FULL_PAGE);
        assert_eq!(
            og_title(&doc).as_deref(),
            Some("Drone startup raises seed round")
        );
        assert_eq!(
            document_title(&doc).as_deref(),
            Some("Fallback Title | Example News")
        );
        assert_eq!(og_title(&parse("<title>x</title>")), None);
    }

    #[test]
    fn test_description_candidates_in_isolation() {
        let doc = parse(FULL_PAGE);
        assert_eq!(
            og_description(&doc).as_deref(),
            Some("The company plans to expand its fleet.")
        );
        assert_eq!(meta_description(&doc).as_deref(), Some("Plain description"));
    }

    #[test]
    fn test_first_non_empty_respects_order() {
        let doc = parse(FULL_PAGE);
        let reversed: &[Candidate] = &[meta_description, og_description];
        assert_eq!(
            first_non_empty(&doc, reversed).as_deref(),
            Some("Plain description")
        );
        assert_eq!(first_non_empty(&doc, &[]), None);
    }
}
