//! The ten fixed icon background colors.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Slot1,
    Slot2,
    Slot3,
    Slot4,
    Slot5,
    Slot6,
    Slot7,
    Slot8,
    Slot9,
    /// Fallback for any section outside the table.
    Slot10,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 10] = [
        ColorSlot::Slot1,
        ColorSlot::Slot2,
        ColorSlot::Slot3,
        ColorSlot::Slot4,
        ColorSlot::Slot5,
        ColorSlot::Slot6,
        ColorSlot::Slot7,
        ColorSlot::Slot8,
        ColorSlot::Slot9,
        ColorSlot::Slot10,
    ];

    /// 1-based position in the palette.
    pub fn index(self) -> u8 {
        match self {
            ColorSlot::Slot1 => 1,
            ColorSlot::Slot2 => 2,
            ColorSlot::Slot3 => 3,
            ColorSlot::Slot4 => 4,
            ColorSlot::Slot5 => 5,
            ColorSlot::Slot6 => 6,
            ColorSlot::Slot7 => 7,
            ColorSlot::Slot8 => 8,
            ColorSlot::Slot9 => 9,
            ColorSlot::Slot10 => 10,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorSlot::Slot1 => (0x4A, 0x7B, 0xA7),
            ColorSlot::Slot2 => (0x04, 0xB4, 0xB3),
            ColorSlot::Slot3 => (0x10, 0xCA, 0xC9),
            ColorSlot::Slot4 => (0xF5, 0xA6, 0x23),
            ColorSlot::Slot5 => (0xFF, 0x7D, 0x50),
            ColorSlot::Slot6 => (0xFC, 0x66, 0x44),
            ColorSlot::Slot7 => (0xE7, 0x5F, 0x40),
            ColorSlot::Slot8 => (0xE1, 0x3A, 0x20),
            ColorSlot::Slot9 => (0xD9, 0x32, 0x18),
            ColorSlot::Slot10 => (0xC0, 0x38, 0x23),
        }
    }

    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl Serialize for ColorSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index())
    }
}
