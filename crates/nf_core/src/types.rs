use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::section::section_style;

/// A single news item as handed over by the feed layer.
///
/// Articles are immutable once built. The icon glyph is derived from the
/// section name on demand instead of being stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub published_at: DateTime<Utc>,
    pub title: String,
    pub section_name: String,
    pub url: String,
}

impl Article {
    pub fn new(
        published_at: DateTime<Utc>,
        title: impl Into<String>,
        section_name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            published_at,
            title: title.into(),
            section_name: section_name.into(),
            url: url.into(),
        }
    }

    /// The one or two letter abbreviation shown inside the row icon.
    pub fn icon_glyph(&self) -> &'static str {
        section_style(&self.section_name).glyph
    }
}
