//! Row model for an article list.
//!
//! [`present`] turns one article into the values a row displays. [`ArticleList`]
//! owns the ordered articles and answers per-index queries; view reuse is left
//! to whatever draws the rows.

use serde::Serialize;

use crate::date::DateFormatter;
use crate::palette::ColorSlot;
use crate::section::section_style;
use crate::types::Article;

/// Display values for one list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRow {
    pub slot: ColorSlot,
    pub glyph: &'static str,
    pub title: String,
    pub section: String,
    pub date: String,
}

pub fn present(article: &Article, formatter: &DateFormatter) -> ArticleRow {
    let style = section_style(&article.section_name);
    ArticleRow {
        slot: style.slot,
        glyph: style.glyph,
        title: article.title.clone(),
        section: article.section_name.clone(),
        date: formatter.format(&article.published_at),
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArticleList {
    articles: Vec<Article>,
    formatter: DateFormatter,
}

impl ArticleList {
    pub fn new(articles: Vec<Article>, formatter: DateFormatter) -> Self {
        Self { articles, formatter }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn formatter(&self) -> &DateFormatter {
        &self.formatter
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, index: usize) -> Option<&Article> {
        self.articles.get(index)
    }

    pub fn row(&self, index: usize) -> Option<ArticleRow> {
        self.get(index).map(|article| present(article, &self.formatter))
    }

    pub fn rows(&self) -> impl Iterator<Item = ArticleRow> + '_ {
        self.articles
            .iter()
            .map(move |article| present(article, &self.formatter))
    }

    /// Link a row opens when selected.
    pub fn url(&self, index: usize) -> Option<&str> {
        self.get(index).map(|article| article.url.as_str())
    }

    /// Articles whose section matches `section_name`, ignoring case, in their
    /// original order.
    pub fn filter_section(&self, section_name: &str) -> ArticleList {
        let key = section_name.to_uppercase();
        let articles = self
            .articles
            .iter()
            .filter(|article| article.section_name.to_uppercase() == key)
            .cloned()
            .collect();
        ArticleList::new(articles, self.formatter)
    }
}

impl From<Vec<Article>> for ArticleList {
    fn from(articles: Vec<Article>) -> Self {
        ArticleList::new(articles, DateFormatter::default())
    }
}
