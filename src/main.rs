//! optional-patterns
//!
//! Runs every `Option` demonstration once and prints one line per
//! demonstration.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin optional-patterns
//!
//! DEMO_CUSTOMER="Bruce Wayne" DEMO_COUNTRY=IN DEMO_MINIMUM_RATING=1000 \
//!   RUST_LOG=optional_patterns=debug cargo run --bin optional-patterns
//! ```

use optional_patterns::config::DemoConfig;
use optional_patterns::demo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = DemoConfig::from_env().unwrap_or_else(|error| {
        tracing::warn!("Failed to load configuration from environment: {error}");
        tracing::info!("Using default configuration");
        DemoConfig::default()
    });

    let report = demo::run(&config);
    for line in report.lines() {
        println!("{line}");
    }
}
