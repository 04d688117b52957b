use std::io::Write;

use crossterm::style::Color;
use nf_core::{ArticleList, ArticleRow, Error, Result};
use tracing::debug;

use crate::config::RenderConfig;
use crate::style::Style;
use crate::text::{display_width, truncate};

/// Shown in place of rows when the feed had no articles.
pub const EMPTY_TEXT: &str = "No articles found.";

const BADGE_WIDTH: usize = 4;
const MIN_TITLE_WIDTH: usize = 6;

/// A row split into the segments that get styled separately.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RowLayout {
    badge: String,
    title: String,
    tail: String,
}

fn layout_row(row: &ArticleRow, width: usize) -> RowLayout {
    let badge = format!(" {:<2} ", row.glyph);
    let budget = width.saturating_sub(BADGE_WIDTH + 1);

    let mut tail = if row.section.is_empty() {
        format!("  {}", row.date)
    } else {
        format!("  {} · {}", row.section, row.date)
    };
    let max_tail = budget.saturating_sub(MIN_TITLE_WIDTH);
    if display_width(&tail) > max_tail {
        tail = truncate(&tail, max_tail);
    }

    let title = truncate(&row.title, budget.saturating_sub(display_width(&tail)));
    RowLayout { badge, title, tail }
}

/// Writes article rows as single terminal lines.
pub struct ListRenderer<W: Write> {
    writer: W,
    config: RenderConfig,
}

impl<W: Write> ListRenderer<W> {
    pub fn new(writer: W, config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { writer, config })
    }

    pub fn render_row(&mut self, row: &ArticleRow) -> Result<()> {
        let layout = layout_row(row, self.config.line_width());

        if self.config.use_color() {
            let mut title = Style::new();
            title.bold();
            let tail = Style::with_foreground(Color::DarkGrey);

            Style::badge(row.slot).paint(&mut self.writer, &layout.badge)?;
            write!(self.writer, " ")?;
            title.paint(&mut self.writer, &layout.title)?;
            tail.paint(&mut self.writer, &layout.tail)?;
        } else {
            write!(self.writer, "{} {}{}", layout.badge, layout.title, layout.tail)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    /// Render every row of `list`, or the empty text. Returns the rows written.
    pub fn render_list(&mut self, list: &ArticleList) -> Result<usize> {
        if list.is_empty() {
            writeln!(self.writer, "{}", EMPTY_TEXT)?;
            self.writer.flush()?;
            return Ok(0);
        }

        let mut count = 0;
        for row in list.rows() {
            self.render_row(&row)?;
            count += 1;
        }
        self.writer.flush()?;
        debug!("Rendered {} rows at width {}", count, self.config.line_width());
        Ok(count)
    }

    pub fn render_at(&mut self, list: &ArticleList, index: usize) -> Result<()> {
        let row = list.row(index).ok_or_else(|| {
            Error::Render(format!("no row at index {} (list has {})", index, list.len()))
        })?;
        self.render_row(&row)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use nf_core::{Article, DateFormatter, DisplayZone};

    fn list() -> ArticleList {
        let at = Utc.with_ymd_and_hms(2017, 6, 3, 21, 45, 0).unwrap();
        ArticleList::new(
            vec![
                Article::new(at, "Champions League final: match report", "Football", "https://g.co/1"),
                Article::new(at, "Crossword", "", "https://g.co/2"),
            ],
            DateFormatter::new(DisplayZone::Utc),
        )
    }

    fn plain(width: usize) -> ListRenderer<Vec<u8>> {
        ListRenderer::new(Vec::new(), RenderConfig::new().width(width).color(false)).unwrap()
    }

    fn output(renderer: ListRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_list() {
        let mut renderer = plain(40);
        assert_eq!(renderer.render_list(&list()).unwrap(), 2);
        let out = output(renderer);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], " FB  Champions…  Football · Jun 03, 2017");
        assert_eq!(lines[1], " *   Crossword  Jun 03, 2017");
        assert!(lines.iter().all(|l| display_width(l) <= 40));
    }

    #[test]
    fn test_wide_line_keeps_full_title() {
        let mut renderer = plain(100);
        renderer.render_at(&list(), 0).unwrap();
        assert_eq!(
            output(renderer),
            " FB  Champions League final: match report  Football · Jun 03, 2017\n"
        );
    }

    #[test]
    fn test_long_section_is_cut_before_title() {
        let row = ArticleRow {
            slot: nf_core::ColorSlot::Slot9,
            glyph: "SB",
            title: "Supply chains".to_string(),
            section: "Guardian Sustainable Business".to_string(),
            date: "Jun 02, 2017".to_string(),
        };
        let layout = layout_row(&row, 30);
        assert!(display_width(&layout.title) >= MIN_TITLE_WIDTH);
        let total = display_width(&layout.badge)
            + 1
            + display_width(&layout.title)
            + display_width(&layout.tail);
        assert!(total <= 30);
    }

    #[test]
    fn test_empty_list() {
        let mut renderer = plain(40);
        let empty = ArticleList::new(vec![], DateFormatter::new(DisplayZone::Utc));
        assert_eq!(renderer.render_list(&empty).unwrap(), 0);
        assert_eq!(output(renderer), "No articles found.\n");
    }

    #[test]
    fn test_colored_row() {
        let mut renderer =
            ListRenderer::new(Vec::new(), RenderConfig::new().width(60).color(true)).unwrap();
        renderer.render_at(&list(), 0).unwrap();
        let out = output(renderer);
        // Slot 2 background.
        assert!(out.contains("48;2;4;180;179"));
        assert!(out.contains(" FB "));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_render_at_out_of_range() {
        let mut renderer = plain(40);
        assert!(matches!(renderer.render_at(&list(), 5), Err(Error::Render(_))));
    }

    #[test]
    fn test_rejects_narrow_config() {
        let result = ListRenderer::new(Vec::new(), RenderConfig::new().width(4));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
