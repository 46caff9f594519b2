//! Logging Setup
//!
//! Installs the global tracing subscriber. Output goes to stderr so the
//! rendered view on stdout stays readable.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter directives for the configured level, used when `RUST_LOG` is unset
pub fn default_directives(config: &LoggingConfig) -> String {
    format!("hamgo={level},hamgo_client={level}", level = config.level)
}

/// Initialize logging from the `[logging]` section
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config)));

    let registry = tracing_subscriber::registry().with(filter);

    match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        };
        assert_eq!(default_directives(&config), "hamgo=debug,hamgo_client=debug");
    }
}
