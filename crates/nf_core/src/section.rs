//! Section name to icon presentation mapping.
//!
//! The lookup is total: anything outside [`SECTION_TABLE`] resolves to
//! [`DEFAULT_STYLE`].

use serde::Serialize;

use crate::palette::ColorSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionStyle {
    pub slot: ColorSlot,
    pub glyph: &'static str,
}

/// Uppercased section names and their presentation, in lookup order.
pub const SECTION_TABLE: &[(&str, SectionStyle)] = &[
    ("US NEWS", SectionStyle { slot: ColorSlot::Slot1, glyph: "S" }),
    ("SPORT", SectionStyle { slot: ColorSlot::Slot1, glyph: "S" }),
    ("FOOTBALL", SectionStyle { slot: ColorSlot::Slot2, glyph: "FB" }),
    ("FILM", SectionStyle { slot: ColorSlot::Slot3, glyph: "F" }),
    ("MEDIA", SectionStyle { slot: ColorSlot::Slot4, glyph: "M" }),
    ("SOCIETY", SectionStyle { slot: ColorSlot::Slot5, glyph: "SC" }),
    ("POLITICS", SectionStyle { slot: ColorSlot::Slot6, glyph: "P" }),
    ("TECHNOLOGY", SectionStyle { slot: ColorSlot::Slot7, glyph: "T" }),
    ("BUSINESS", SectionStyle { slot: ColorSlot::Slot8, glyph: "B" }),
    (
        "GUARDIAN SUSTAINABLE BUSINESS",
        SectionStyle { slot: ColorSlot::Slot9, glyph: "SB" },
    ),
];

pub const DEFAULT_STYLE: SectionStyle = SectionStyle {
    slot: ColorSlot::Slot10,
    glyph: "*",
};

/// Resolve the icon color and glyph for a section name, ignoring case.
pub fn section_style(section_name: &str) -> SectionStyle {
    let key = section_name.to_uppercase();
    SECTION_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_STYLE)
}

/// Same as [`section_style`], with a missing section treated as unknown.
pub fn section_style_opt(section_name: Option<&str>) -> SectionStyle {
    section_name.map(section_style).unwrap_or(DEFAULT_STYLE)
}
