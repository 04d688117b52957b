use std::io::IsTerminal;

use nf_core::{DateFormatter, DisplayZone, Error, Result};
use tracing::debug;

pub const DEFAULT_WIDTH: usize = 80;
/// Narrowest line a row can be laid out in: badge, gap and a few title cells.
pub const MIN_WIDTH: usize = 16;

/// How rows are laid out on the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    width: usize,
    color: bool,
    zone: DisplayZone,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            color: true,
            zone: DisplayZone::Local,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width from the current terminal, color only when stdout is a terminal.
    pub fn detect() -> Self {
        let width = match crossterm::terminal::size() {
            Ok((cols, _)) if cols > 0 => cols as usize,
            Ok(_) => DEFAULT_WIDTH,
            Err(e) => {
                debug!("Terminal size unavailable ({}), using {} columns", e, DEFAULT_WIDTH);
                DEFAULT_WIDTH
            }
        };
        Self {
            width,
            color: std::io::stdout().is_terminal(),
            zone: DisplayZone::Local,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn line_width(&self) -> usize {
        self.width
    }

    pub fn use_color(&self) -> bool {
        self.color
    }

    pub fn display_zone(&self) -> DisplayZone {
        self.zone
    }

    pub fn date_formatter(&self) -> DateFormatter {
        DateFormatter::new(self.zone)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_WIDTH {
            return Err(Error::Config(format!(
                "line width {} is below the minimum of {}",
                self.width, MIN_WIDTH
            )));
        }
        Ok(())
    }
}
