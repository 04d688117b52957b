pub mod guardian;
pub mod loader;

pub use guardian::{parse_feed, FeedItem};
pub use loader::{load_feed, read_feed, FeedSource};
