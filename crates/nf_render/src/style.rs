use std::io::{self, Write};

use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::QueueableCommand;
use nf_core::ColorSlot;

/// Terminal color for an icon palette slot.
pub fn slot_color(slot: ColorSlot) -> Color {
    let (r, g, b) = slot.rgb();
    Color::Rgb { r, g, b }
}

/// Foreground color, background color and attributes for one text segment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    foreground: Option<Color>,
    background: Option<Color>,
    attributes: Vec<Attribute>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_foreground(foreground: Color) -> Self {
        let mut style = Self::new();
        style.foreground = Some(foreground);
        style
    }

    pub fn with_background(background: Color) -> Self {
        let mut style = Self::new();
        style.background = Some(background);
        style
    }

    /// White bold text on the slot's color, used for the row icon.
    pub fn badge(slot: ColorSlot) -> Self {
        let mut style = Self::with_background(slot_color(slot));
        style.foreground(Color::White).bold();
        style
    }

    pub fn foreground(&mut self, color: Color) -> &mut Self {
        self.foreground = Some(color);
        self
    }

    pub fn attribute(&mut self, attr: Attribute) -> &mut Self {
        self.attributes.push(attr);
        self
    }

    pub fn bold(&mut self) -> &mut Self {
        self.attribute(Attribute::Bold)
    }

    pub fn is_plain(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.attributes.is_empty()
    }

    /// Queue the style's escape sequences onto `w`.
    pub fn apply<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        if let Some(color) = self.foreground {
            w.queue(SetForegroundColor(color))?;
        }
        if let Some(color) = self.background {
            w.queue(SetBackgroundColor(color))?;
        }
        for attr in &self.attributes {
            w.queue(SetAttribute(*attr))?;
        }
        Ok(())
    }

    /// Write `text` in this style and reset afterwards.
    pub fn paint<W: Write + ?Sized>(&self, w: &mut W, text: &str) -> io::Result<()> {
        if self.is_plain() {
            w.queue(Print(text))?;
            return Ok(());
        }
        self.apply(w)?;
        w.queue(Print(text))?;
        w.queue(SetAttribute(Attribute::Reset))?;
        w.queue(ResetColor)?;
        Ok(())
    }
}
