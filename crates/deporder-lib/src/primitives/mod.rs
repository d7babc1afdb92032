//! deporder primitives - shared enums and errors
//!
//! Log settings, colour intent, and the configuration / logger error enums
//! used across the application layer.

use thiserror::Error;

mod shared;
use shared::cli_value_enum;

/// Stream that receives log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    Stderr,
    Stdout,
}

/// Log verbosity, least to most verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

/// Log line encoding
///
/// `Yaml` selects tracing-subscriber's multi-line "pretty" formatter, the
/// closest thing it has to YAML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
    Yaml,
}

/// Whether output may carry ANSI colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorIntent {
    /// Colour only when writing to a terminal
    Auto,
    Always,
    Never,
}

cli_value_enum!(LogLevel, "invalid log level", {
    Error => "error" | "err" | "fatal",
    Warning => "warn" | "warning",
    Info => "info",
    Debug => "debug",
    Trace => "trace" | "verbose",
});

cli_value_enum!(LogFormat, "invalid log format", {
    Text => "text" | "txt" | "plain",
    Json => "json",
    Yaml => "yaml" | "yml",
});

cli_value_enum!(LogOutput, "invalid log output stream", {
    Stderr => "stderr",
    Stdout => "stdout",
});

cli_value_enum!(ColorIntent, "invalid color intent", {
    Auto => "auto" | "automatic" | "detect" | "default",
    Always => "always" | "force" | "on",
    Never => "never" | "off",
});

impl LogLevel {
    /// Map the numeric `--log-level` to a level; anything above 4 is trace
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            4.. => LogLevel::Trace,
        }
    }

    /// Directive name understood by `EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl ColorIntent {
    /// Resolve against whether the target stream is a terminal
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorIntent::Auto => is_terminal,
            ColorIntent::Always => true,
            ColorIntent::Never => false,
        }
    }
}

/// Everything [`Logger::init`](crate::logger::Logger::init) needs
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub color: ColorIntent,
}

/// Operation name and position attached to log lines of long-running work
#[derive(Debug, Clone)]
pub struct LogContext {
    pub operation: String,
    pub total_items: Option<u64>,
    pub current_item: Option<u64>,
}

impl LogContext {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            total_items: None,
            current_item: None,
        }
    }

    pub fn with_progress(operation: &str, total: u64) -> Self {
        Self {
            total_items: Some(total),
            ..Self::new(operation)
        }
    }

    pub fn set_progress(&mut self, current: u64) {
        self.current_item = Some(current);
    }

    /// `current/total`, `current`, or empty when no progress is known
    pub fn progress_label(&self) -> String {
        match (self.current_item, self.total_items) {
            (Some(current), Some(total)) => format!("{current}/{total}"),
            (Some(current), None) => current.to_string(),
            (None, _) => String::new(),
        }
    }
}

/// Configuration loading and validation failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot load {file}: {source}")]
    EnvFileError {
        file: String,
        source: dotenvy::Error,
    },

    #[error("Working directory does not exist: {path}")]
    InvalidWorkDir { path: String },

    #[error("Invalid environment: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },

    #[error("Cannot determine current directory: {source}")]
    CurrentDirError {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration value '{value}': {reason}")]
    ParseError { value: String, reason: String },
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Cannot install tracing subscriber: {reason}")]
    InitializationFailed { reason: String },

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
