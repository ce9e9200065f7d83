//! Sitemark CLI Library
//!
//! This library provides the command implementations for the Sitemark CLI.
//! It is used by the binary entry point while also exposing public APIs for
//! documentation and integration purposes.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (generate, check, init)

pub mod cmd;

// Re-export core types for convenience
pub use sitemark_core::{Config, ConfigOverrides};
pub use sitemark_generator::{Builder, GenerateStats};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
