//! Structured logging
//!
//! One global subscriber: an `EnvFilter`, a `fmt` layer in the configured
//! format, and a `tracing-indicatif` layer. The fmt layer writes through the
//! indicatif writers so log lines never tear an active progress bar.

use crate::primitives::*;
use std::sync::OnceLock;
use tracing::Subscriber;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

/// `EnvFilter` directives used when `RUST_LOG` is unset
pub fn default_filter(level: LogLevel) -> String {
    let level = level.as_filter();
    format!("deporder={level},deporder_lib={level},warn")
}

/// fmt layer for `format`; JSON never carries ANSI codes
fn format_layer<S, W>(format: LogFormat, ansi: bool, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer().with_writer(writer);
    match format {
        LogFormat::Text => layer.with_ansi(ansi).compact().boxed(),
        LogFormat::Json => layer.with_ansi(false).json().boxed(),
        LogFormat::Yaml => layer.with_ansi(ansi).pretty().boxed(),
    }
}

impl Logger {
    /// Install the global subscriber
    ///
    /// Fails if this process already installed one, through this function or
    /// any other.
    pub fn init(config: LoggerConfig) -> Result<&'static Self, LoggerError> {
        if Self::is_initialized() {
            return Err(LoggerError::AlreadyInitialized);
        }

        let indicatif_layer = IndicatifLayer::new();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter(config.level)));

        let fmt_layer = match config.output {
            LogOutput::Stderr => format_layer(
                config.format,
                config.color.enabled(console::Term::stderr().is_term()),
                indicatif_layer.get_stderr_writer(),
            ),
            LogOutput::Stdout => format_layer(
                config.format,
                config.color.enabled(console::Term::stdout().is_term()),
                indicatif_layer.get_stdout_writer(),
            ),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(indicatif_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        let logger = GLOBAL_LOGGER.get_or_init(|| Logger {
            level: config.level,
        });
        tracing::debug!(?config, "Logger initialized");
        Ok(logger)
    }

    pub fn global() -> Option<&'static Self> {
        GLOBAL_LOGGER.get()
    }

    pub fn is_initialized() -> bool {
        GLOBAL_LOGGER.get().is_some()
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn info(&self, message: &str, context: Option<&LogContext>) {
        match context {
            Some(ctx) => tracing::info!(
                operation = %ctx.operation,
                progress = %ctx.progress_label(),
                "{message}"
            ),
            None => tracing::info!("{message}"),
        }
    }

    pub fn warn(&self, message: &str, context: Option<&LogContext>) {
        match context {
            Some(ctx) => tracing::warn!(
                operation = %ctx.operation,
                progress = %ctx.progress_label(),
                "{message}"
            ),
            None => tracing::warn!("{message}"),
        }
    }
}

/// Span that `tracing-indicatif` renders as a progress bar
#[macro_export]
macro_rules! progress_span {
    ($operation:expr) => {
        tracing::info_span!("progress", operation = $operation)
    };
    ($operation:expr, total = $total:expr) => {
        tracing::info_span!("progress", operation = $operation, total = $total)
    };
}

/// Info line through the global logger, or plain `tracing` before it exists
#[macro_export]
macro_rules! log_info {
    ($msg:expr, @context $ctx:expr) => {
        match $crate::logger::Logger::global() {
            Some(logger) => logger.info($msg, $ctx),
            None => tracing::info!("{}", $msg),
        }
    };
    ($msg:expr) => {
        $crate::log_info!($msg, @context None)
    };
    ($msg:expr, $ctx:expr) => {
        $crate::log_info!($msg, @context Some(&$ctx))
    };
}

/// Warning line through the global logger, or plain `tracing` before it exists
#[macro_export]
macro_rules! log_warn {
    ($msg:expr, @context $ctx:expr) => {
        match $crate::logger::Logger::global() {
            Some(logger) => logger.warn($msg, $ctx),
            None => tracing::warn!("{}", $msg),
        }
    };
    ($msg:expr) => {
        $crate::log_warn!($msg, @context None)
    };
    ($msg:expr, $ctx:expr) => {
        $crate::log_warn!($msg, @context Some(&$ctx))
    };
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
