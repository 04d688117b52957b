//! Terminal rendering of article rows.
//!
//! The list model in `nf_core` decides what each row shows; this crate only
//! decides how it looks on a terminal.

mod config;
mod renderer;
mod style;
mod text;

pub use config::{RenderConfig, DEFAULT_WIDTH, MIN_WIDTH};
pub use renderer::{ListRenderer, EMPTY_TEXT};
pub use style::{slot_color, Style};
pub use text::{display_width, truncate};
