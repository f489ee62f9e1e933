//! Tracing/logging initialization.
//!
//! JSON logs by default, human-readable when `RIM_LOG_FORMAT=pretty`.
//! Filtering follows `RUST_LOG` (default `info`).
//!
//! On `wasm32` there is no process environment or stdout: the default filter
//! applies and plain-text lines go to the browser console (see
//! [`crate::console`]).

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "RIM_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Parse a format name; unrecognised names fall back to JSON.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> Self {
        let format = std::env::var(LOG_FORMAT_ENV)
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();

        Self {
            format,
            ..Self::default()
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
#[cfg(not(target_arch = "wasm32"))]
pub fn init(config: &TracingConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(target_arch = "wasm32")]
pub fn init(config: &TracingConfig) {
    use tracing_subscriber::EnvFilter;

    use crate::console::ConsoleMakeWriter;

    // No clock source for `SystemTime` here; devtools timestamps each line.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.default_filter))
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(ConsoleMakeWriter)
        .try_init();
}
