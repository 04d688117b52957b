use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use nf_core::{Article, Result};
use tracing::debug;

use crate::guardian::parse_feed;

/// Where an already-fetched feed document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Stdin,
    File(PathBuf),
}

impl FeedSource {
    /// `None` and `-` both mean standard input.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => FeedSource::File(path.to_path_buf()),
            _ => FeedSource::Stdin,
        }
    }

    pub fn load(&self) -> Result<Vec<Article>> {
        match self {
            FeedSource::Stdin => read_feed(std::io::stdin().lock()),
            FeedSource::File(path) => load_feed(path),
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Stdin => write!(f, "<stdin>"),
            FeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn load_feed(path: impl AsRef<Path>) -> Result<Vec<Article>> {
    let path = path.as_ref();
    debug!("Reading feed from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    parse_feed(&json)
}

pub fn read_feed<R: Read>(mut reader: R) -> Result<Vec<Article>> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    parse_feed(&json)
}
