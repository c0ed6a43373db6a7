//! Diagnostic logging on stderr.
//!
//! Stdout carries the demo output and must stay byte-exact, so every log line
//! is routed to stderr. The filter comes from `RUST_LOG` when set, otherwise
//! from [`LoggingConfig::default_level`].
//!
//! ```rust,no_run
//! use lambda_demo::{init_logging, Config};
//!
//! let config = Config::load().unwrap_or_default();
//! init_logging(&config.logging);
//! ```

use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Formatter that drops the INFO prefix and adds the target for WARN and ERROR
pub struct CompactFormatter;

impl<S, N> FormatEvent<S, N> for CompactFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = *metadata.level();

        if level != Level::INFO {
            write!(writer, "{}", level)?;
            if matches!(level, Level::ERROR | Level::WARN) {
                write!(writer, " {}", metadata.target())?;
            }
            write!(writer, ": ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Build the env filter, falling back to `default_level` when RUST_LOG is unset
/// or unparsable
pub fn create_env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed, in which case the
/// existing one is left untouched.
pub fn init_logging(config: &LoggingConfig) -> bool {
    tracing_subscriber::registry()
        .with(create_env_filter(&config.default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(CompactFormatter),
        )
        .try_init()
        .is_ok()
}
