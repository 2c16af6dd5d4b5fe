use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directives in this variable replace `--log-level` entirely.
pub const LOG_ENV: &str = "RSLCOMM_LOG";

/// Crates whose events follow `--log-level`. Everything else stays at warn.
const DRIVER_TARGETS: [&str; 5] = [
    "rslcomm",
    "rslcomm_frame",
    "rslcomm_transport",
    "rslcomm_registers",
    "rslcomm_driver",
];

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    /// Single-line records.
    Compact,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    /// Includes every buffered byte count and discarded candidate.
    Trace,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// `--log-level` as filter directives: the driver crates at `level`,
/// dependencies at `level` or warn, whichever is quieter.
pub fn filter_directives(level: LogLevel) -> String {
    let others = if LevelFilter::from(level) > LevelFilter::WARN {
        LogLevel::Warn
    } else {
        level
    };
    let mut directives = vec![others.as_str().to_string()];
    directives.extend(
        DRIVER_TARGETS
            .iter()
            .map(|target| format!("{target}={}", level.as_str())),
    );
    directives.join(",")
}

/// Install the stderr subscriber. Stdout is reserved for command output.
pub fn init_logging(format: LogFormat, level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_env_var(LOG_ENV)
        .try_from_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    // Frame, transport and driver events interleave once debug is on.
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(LevelFilter::from(level) >= LevelFilter::DEBUG);

    let registry = tracing_subscriber::registry().with(filter);
    let _ = match format {
        LogFormat::Text => registry.with(layer).try_init(),
        LogFormat::Compact => registry.with(layer.compact()).try_init(),
        LogFormat::Json => registry.with(layer.json()).try_init(),
    };
}
