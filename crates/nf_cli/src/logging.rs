use std::sync::Once;

use tracing::Level;

static INIT: Once = Once::new();

/// Level for the number of `-v` flags given.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the fmt subscriber once. Logs go to stderr so stdout stays clean
/// for rows and JSON.
pub fn init_logging(verbosity: u8) {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(level_for(verbosity))
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), Level::INFO);
        assert_eq!(level_for(1), Level::DEBUG);
        assert_eq!(level_for(4), Level::TRACE);
    }
}
