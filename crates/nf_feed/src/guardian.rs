//! Guardian content API search results.
//!
//! Accepts the full `{"response": {...}}` envelope or a bare `results` array.
//! Records that cannot become an [`Article`] are skipped with a warning.

use chrono::{DateTime, Utc};
use nf_core::{Article, Error, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedDocument {
    Envelope {
        response: FeedResponse,
    },
    Response {
        status: Option<String>,
        results: Vec<FeedItem>,
    },
    Results(Vec<FeedItem>),
}

/// Error replies carry only `status` and `message`, so `results` may be absent.
#[derive(Debug, Deserialize)]
struct FeedResponse {
    status: Option<String>,
    message: Option<String>,
    #[serde(default)]
    results: Vec<FeedItem>,
}

/// One entry of the `results` array. Only the fields a row needs are read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub web_publication_date: Option<String>,
    pub web_title: Option<String>,
    pub section_name: Option<String>,
    pub web_url: Option<String>,
}

impl FeedItem {
    pub fn into_article(self) -> std::result::Result<Article, String> {
        let title = non_empty(self.web_title).ok_or("missing webTitle")?;
        let url = non_empty(self.web_url).ok_or("missing webUrl")?;
        let raw_date = self
            .web_publication_date
            .ok_or("missing webPublicationDate")?;
        let published_at = parse_date(&raw_date)
            .ok_or_else(|| format!("unparseable webPublicationDate {:?}", raw_date))?;

        Ok(Article::new(
            published_at,
            title,
            self.section_name.unwrap_or_default(),
            url,
        ))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn check_status(status: Option<&str>, message: Option<&str>) -> Result<()> {
    match (status, message) {
        (None | Some("ok"), _) => Ok(()),
        (Some(status), Some(message)) => Err(Error::InvalidFeed(format!(
            "feed status is {:?}: {}",
            status, message
        ))),
        (Some(status), None) => Err(Error::InvalidFeed(format!("feed status is {:?}", status))),
    }
}

/// Parse a feed document into articles, keeping feed order.
pub fn parse_feed(json: &str) -> Result<Vec<Article>> {
    let items = match serde_json::from_str::<FeedDocument>(json)? {
        FeedDocument::Envelope { response } => {
            check_status(response.status.as_deref(), response.message.as_deref())?;
            response.results
        }
        FeedDocument::Response { status, results } => {
            check_status(status.as_deref(), None)?;
            results
        }
        FeedDocument::Results(items) => items,
    };

    let total = items.len();
    let mut articles = Vec::with_capacity(total);
    for (position, item) in items.into_iter().enumerate() {
        match item.into_article() {
            Ok(article) => {
                debug!("Parsed article {}: {}", position, article.title);
                articles.push(article);
            }
            Err(reason) => warn!("Skipping feed record {}: {}", position, reason),
        }
    }

    info!("Parsed {} of {} feed records", articles.len(), total);
    Ok(articles)
}
