//! `tracing` setup for the API binary.

use std::io;
use std::str::FromStr;

use tracing_subscriber::{fmt, EnvFilter};

/// Used when `RUST_LOG` is unset: our own crates at info, request spans from
/// `tower_http`, and only warnings from the ORM and driver (they log every statement).
pub const DEFAULT_FILTER: &str = "info,server=info,service=info,models=info,tower_http=info,sea_orm=warn,sqlx=warn";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One line per event, for terminals.
    #[default]
    Compact,
    /// One JSON object per event, for log shippers.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown LOG_FORMAT {other:?}")),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber on stdout. A second call is a no-op.
pub fn init_logging(format: LogFormat) {
    let builder = fmt().with_env_filter(env_filter()).with_target(false).with_writer(io::stdout);
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

/// Format from `LOG_FORMAT`; an unknown value falls back to compact and says so.
pub fn init_logging_from_env() {
    let raw = std::env::var("LOG_FORMAT").unwrap_or_default();
    match raw.parse::<LogFormat>() {
        Ok(format) => init_logging(format),
        Err(msg) => {
            init_logging(LogFormat::Compact);
            tracing::warn!("{msg}; using compact logs");
        }
    }
}
