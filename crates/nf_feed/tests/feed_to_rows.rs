use nf_core::{ArticleList, ColorSlot, DateFormatter, DisplayZone};
use nf_feed::parse_feed;

const SEARCH: &str = include_str!("fixtures/search.json");

fn list() -> ArticleList {
    let articles = parse_feed(SEARCH).unwrap();
    ArticleList::new(articles, DateFormatter::new(DisplayZone::Utc))
}

#[test]
fn test_feed_becomes_rows() {
    let list = list();
    // The undated draft is dropped.
    assert_eq!(list.len(), 4);

    let rows: Vec<_> = list.rows().collect();
    let summary: Vec<_> = rows.iter().map(|r| (r.slot, r.glyph, r.date.as_str())).collect();
    assert_eq!(
        summary,
        vec![
            (ColorSlot::Slot2, "FB", "Jun 03, 2017"),
            (ColorSlot::Slot1, "S", "Jun 03, 2017"),
            (ColorSlot::Slot9, "SB", "Jun 02, 2017"),
            (ColorSlot::Slot10, "*", "Jun 01, 2017"),
        ]
    );
    assert_eq!(rows[3].section, "Crosswords");
}

#[test]
fn test_row_links() {
    let list = list();
    assert_eq!(
        list.url(2),
        Some("https://www.theguardian.com/sustainable-business/2017/jun/02/supply-chains")
    );
    assert_eq!(list.url(4), None);
}

#[test]
fn test_local_offset_changes_dates_only() {
    let articles = parse_feed(SEARCH).unwrap();
    let tokyo = ArticleList::new(articles, DateFormatter::new("+09:00".parse().unwrap()));
    let row = tokyo.row(0).unwrap();
    assert_eq!(row.date, "Jun 04, 2017");
    assert_eq!(row.glyph, "FB");
}
