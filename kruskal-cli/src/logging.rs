//! Logging initialisation for the `kruskal` binary.
//!
//! Installs a global `tracing` subscriber writing to stderr, so the spanning
//! tree printed on stdout stays machine-readable, and bridges the `log`
//! facade into it.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt};

const LOG_FORMAT_ENV: &str = "KRUSKAL_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format for diagnostics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per event.
    Json,
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `KRUSKAL_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing`.
        #[source]
        source: SetGlobalDefaultError,
    },
}

/// What [`init_logging`] did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoggingOutcome {
    /// Our subscriber is now the global default.
    Installed,
    /// An earlier call already installed logging.
    AlreadyInitialised,
    /// Another subscriber owned the global slot and was kept.
    ExternalSubscriber,
}

/// Installs global structured logging unless it is already configured.
///
/// `KRUSKAL_LOG_FORMAT` selects `human` (default) or `json` output and
/// `RUST_LOG` sets the filter, defaulting to `info`. Calling this more than
/// once is a no-op.
///
/// # Errors
/// Returns [`LoggingError`] if `KRUSKAL_LOG_FORMAT` is not valid Unicode or
/// names an unsupported format.
pub fn init_logging() -> Result<LoggingOutcome, LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(LoggingOutcome::AlreadyInitialised);
    }

    let outcome = match install_subscriber(log_format_from_env()?) {
        Ok(()) => LoggingOutcome::Installed,
        Err(LoggingError::InstallFailed { source }) => {
            report_existing_subscriber(&source);
            LoggingOutcome::ExternalSubscriber
        }
        Err(err) => return Err(err),
    };
    let _ = INITIALISED.set(());
    Ok(outcome)
}

fn log_format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
            source,
        }),
    }
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Json => fmt_layer.json().with_current_span(true).boxed(),
        LogFormat::Human => fmt_layer.boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(env_filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| LoggingError::InstallFailed { source })?;

    // Another logger may already own the `log` slot; keep it if so.
    let _ = LogTracer::init();
    Ok(())
}

#[expect(
    clippy::print_stderr,
    reason = "No subscriber of ours is installed to report through"
)]
fn report_existing_subscriber(source: &SetGlobalDefaultError) {
    eprintln!("structured logging already configured elsewhere: {source}");
}

fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}
