//! Tracing setup for the command line tool.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Map a level name to a filter, falling back to INFO
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse::<LevelFilter>().unwrap_or(LevelFilter::INFO)
}

/// Install the global subscriber
pub fn init_tracing(level: &str) {
    let filter = parse_level(level);

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .try_init();

    if let Err(e) = result {
        eprintln!("Tracing already initialized: {}", e);
    }
}
