use clap::ValueEnum;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::settings::{LogFormat, LoggingConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match *self {
            LogLevel::TRACE => "TRACE",
            LogLevel::DEBUG => "DEBUG",
            LogLevel::INFO => "INFO",
            LogLevel::WARN => "WARN",
            LogLevel::ERROR => "ERROR",
        }
    }
}

/// Merge the command line level over the configured one.
/// Command line wins, then config, then `info`. Without a command line level a
/// verbose client lifts a `warn`/`error`/`off` config to `info` so its
/// diagnostics get through.
pub fn resolve(
    config: Option<&LoggingConfig>,
    arg_log_level: Option<LogLevel>,
    verbose: bool,
) -> LoggingConfig {
    let base = config.cloned().unwrap_or_default();
    match arg_log_level {
        Some(level) => LoggingConfig::new(level.as_str().to_lowercase(), base.format),
        None if verbose && hides_info(&base.level) => {
            LoggingConfig::new("info".to_owned(), base.format)
        }
        None => base,
    }
}

fn hides_info(level: &str) -> bool {
    matches!(level.trim().to_lowercase().as_str(), "warn" | "error" | "off")
}

/// Initialize tracing with the desired config.
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_new(&cfg.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .flatten_event(true)
                .with_ansi(false)
                .with_writer(std::io::stderr);

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(true)
                .with_writer(std::io::stderr);

            let _ = registry.with(layer).try_init();
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;

    fn warn_config() -> LoggingConfig {
        LoggingConfig::new("warn".to_owned(), LogFormat::Compact)
    }

    #[test]
    fn verbose_lifts_quiet_levels_to_info() {
        assert_eq!(resolve(Some(&warn_config()), None, true).level, "info");
        assert_eq!(resolve(Some(&warn_config()), None, false).level, "warn");

        let debug = LoggingConfig::new("debug".to_owned(), LogFormat::Json);
        let resolved = resolve(Some(&debug), None, true);
        assert_eq!(resolved.level, "debug");
        assert_eq!(resolved.format, LogFormat::Json);
    }

    #[test]
    fn command_line_level_wins_over_verbose() {
        assert_eq!(resolve(Some(&warn_config()), Some(LogLevel::ERROR), true).level, "error");
        assert_eq!(resolve(None, None, false).level, "info");
    }
}
