//! Tracing subscriber setup

use std::fs::{File, OpenOptions};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::{LogConfig, LogFormat};
use crate::error::{Error, Result};

/// Build the event filter. `RUST_LOG` wins over the configured level.
pub fn env_filter(config: &LogConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    filter_from_level(&config.level)
}

/// Parse a level (`info`) or a directive list (`warn,flagstore=debug`)
///
/// A bare word must be a level; as a directive it would be read as a
/// target name and silence everything else.
fn filter_from_level(level: &str) -> Result<EnvFilter> {
    let invalid = |reason: String| Error::InvalidLogLevel {
        level: level.to_string(),
        reason,
    };

    if !level.contains(['=', ',']) {
        let level_filter = level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|e| invalid(e.to_string()))?;
        return EnvFilter::try_new(level_filter.to_string()).map_err(|e| invalid(e.to_string()));
    }

    EnvFilter::try_new(level).map_err(|e| invalid(e.to_string()))
}

fn open_log_file(path: &str) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::LogFile {
            path: path.to_string(),
            source,
        })
}

/// Install the global subscriber described by `config`
pub fn init(config: &LogConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_target(true)
        .with_thread_ids(true);

    let installed = match (&config.file, config.format) {
        (None, LogFormat::Text) => builder.try_init(),
        (None, LogFormat::Json) => builder.json().try_init(),
        (Some(path), format) => {
            let builder = builder
                .with_writer(Arc::new(open_log_file(path)?))
                .with_ansi(false);
            match format {
                LogFormat::Text => builder.try_init(),
                LogFormat::Json => builder.json().try_init(),
            }
        }
    };

    installed.map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_rejected() {
        // Only meaningful when RUST_LOG is not overriding the level.
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        for level in ["flagstore=loud", "bogus"] {
            let config = LogConfig {
                level: level.to_string(),
                ..LogConfig::default()
            };
            let err = env_filter(&config).unwrap_err();
            assert!(matches!(err, Error::InvalidLogLevel { .. }));
        }
    }

    #[test]
    fn test_bare_word_must_be_a_level() {
        for level in ["bogus", "verbose", "flagstore"] {
            let err = filter_from_level(level).unwrap_err();
            assert!(
                matches!(err, Error::InvalidLogLevel { .. }),
                "level {level:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_bare_levels_accepted() {
        for level in ["off", "error", "warn", "info", "debug", "trace", "INFO", " debug "] {
            assert!(filter_from_level(level).is_ok(), "level {level:?} should load");
        }

        let filter = filter_from_level("debug").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_directive_levels_accepted() {
        let config = LogConfig {
            level: "warn,flagstore=debug".to_string(),
            ..LogConfig::default()
        };
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn test_unwritable_log_file() {
        let config = LogConfig {
            file: Some("/nonexistent/dir/flagstore.log".to_string()),
            ..LogConfig::default()
        };
        let err = init(&config).unwrap_err();
        assert!(matches!(err, Error::LogFile { .. }));
    }
}
