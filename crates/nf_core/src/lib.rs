pub mod date;
pub mod error;
pub mod list;
pub mod palette;
pub mod section;
pub mod types;

pub use date::{DateFormatter, DisplayZone, DATE_PATTERN};
pub use error::{Error, Result};
pub use list::{present, ArticleList, ArticleRow};
pub use palette::ColorSlot;
pub use section::{section_style, section_style_opt, SectionStyle, DEFAULT_STYLE, SECTION_TABLE};
pub use types::Article;
