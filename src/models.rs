//! Data models for press articles, risk disclosures and the pitch page snapshot.
//!
//! This module defines the core data structures used throughout the application:
//! - [`ArticleLink`]: A configured press mention URL (input seed)
//! - [`ArticleRecord`]: Normalized metadata scraped from an article page
//! - [`RiskEntry`]: A static risk disclosure entry
//! - [`TeamMember`] and [`TimelineEvent`]: Display data passed through to the page
//! - [`PitchPage`]: Everything the rendering surface needs, serialized as one document
//!
//! Config files use `link` for article URLs and camelCase for timeline fields,
//! matching the JSON the pitch site already ships.

use crate::invest::InvestmentInput;
use crate::risk::RiskViewState;
use serde::{Deserialize, Serialize};

/// A configured press mention.
///
/// Serialized as `{ "link": "https://..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleLink {
    /// The article URL, used verbatim as the record's identity.
    #[serde(rename = "link")]
    pub uri: String,
}

impl ArticleLink {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// Metadata extracted from a press article page.
///
/// Every field other than `link` is best effort and falls back to a documented
/// default, so a record is always complete. Records are never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// Headline from `og:title` or the document `<title>`.
    pub title: String,
    /// Summary from `og:description` or the standard meta description.
    pub description: String,
    /// Preview image URL from `og:image`, or the placeholder image.
    pub image: String,
    /// Publication timestamp from `article:published_time`, as published.
    pub date: String,
    /// Host name of the article URL.
    pub source: String,
    /// The original article URL, verbatim.
    pub link: String,
}

/// A risk disclosure shown before investing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RiskEntry {
    pub title: String,
    pub content: String,
}

/// A leadership team member shown on the pitch page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub linkedin: String,
}

/// A company milestone or update shown in the timeline section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub read_more_link: String,
}

/// A complete snapshot of the pitch page state.
///
/// Each run produces one `PitchPage`, which is serialized to JSON for any view
/// layer and rendered to Markdown for reading.
#[derive(Debug, Serialize)]
pub struct PitchPage {
    /// Company the pitch is for.
    pub company: String,
    /// When this snapshot was produced, RFC 3339 UTC.
    pub generated_at: String,
    /// Press coverage in fetch completion order.
    pub articles: Vec<ArticleRecord>,
    /// Risk disclosure pagination and selection.
    pub risks: RiskViewState,
    /// Time left until the offering closes, e.g. `"3d 4h 0m 12s"`.
    pub countdown: String,
    /// Current investment input and whether it passes the minimum.
    pub investment: InvestmentInput,
    pub team: Vec<TeamMember>,
    pub timeline: Vec<TimelineEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_link_uses_link_key() {
        let links: Vec<ArticleLink> =
            serde_json::from_str(r#"[{"link": "https://a.example/x"}]"#).unwrap();
        assert_eq!(links, vec![ArticleLink::new("https://a.example/x")]);

        let json = serde_json::to_string(&links[0]).unwrap();
        assert_eq!(json, r#"{"link":"https://a.example/x"}"#);
    }

    #[test]
    fn test_timeline_event_camel_case_and_defaults() {
        let event: TimelineEvent = serde_json::from_str(
            r#"{"date": "2024-06-01", "title": "Seed round", "readMoreLink": "https://blog.example/seed"}"#,
        )
        .unwrap();

        assert_eq!(event.read_more_link, "https://blog.example/seed");
        assert_eq!(event.likes, 0);
        assert_eq!(event.author, "");
    }

    #[test]
    fn test_team_member_optional_fields() {
        let member: TeamMember =
            serde_yaml::from_str("name: Ada\nrole: CEO\n").unwrap();
        assert_eq!(member.name, "Ada");
        assert_eq!(member.linkedin, "");
    }
}
