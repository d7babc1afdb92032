//! Application configuration
//!
//! Sources, lowest precedence first: built-in defaults, `.env.local` /
//! `.env`, standard colour variables, then CLI flags with their
//! `DEPORDER_*` env fallbacks.

use crate::display::Styling;
use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration structure
///
/// The clap defaults below mirror [`AppConfig::default`], which also backs
/// serde for partially specified configs.
#[derive(Debug, Clone, PartialEq, Eq, Parser, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory that relative manifest paths are resolved against
    #[arg(short, long, env = "DEPORDER_WORKDIR", global = true)]
    pub workdir: Option<PathBuf>,

    /// Verbosity (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "DEPORDER_LOG_LEVEL", default_value = "0", global = true)]
    pub log_level: u8,

    /// Log line format (text, json, yaml)
    #[arg(long, env = "DEPORDER_LOG_FORMAT", default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Log destination (stderr, stdout)
    #[arg(long, env = "DEPORDER_LOG_OUTPUT", default_value = "stderr", global = true)]
    pub log_output: LogOutput,

    /// When to colour output (auto, always, never)
    #[arg(short, long, env = "DEPORDER_COLOR", default_value = "auto", global = true)]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workdir: None,
            log_level: 0,
            log_format: LogFormat::Text,
            log_output: LogOutput::Stderr,
            color: ColorIntent::Auto,
        }
    }
}

impl AppConfig {
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            color: self.color,
        }
    }

    /// Styling for user output on a stream that may or may not be a terminal
    pub fn styling(&self, is_terminal: bool) -> Styling {
        Styling::new(self.color.enabled(is_terminal))
    }

    /// Overlay `other` on `self`; fields left at their default in `other`
    /// do not override
    pub fn merge_with(self, other: Self) -> Self {
        let defaults = Self::default();
        Self {
            workdir: other.workdir.or(self.workdir),
            log_level: pick(self.log_level, other.log_level, defaults.log_level),
            log_format: pick(self.log_format, other.log_format, defaults.log_format),
            log_output: pick(self.log_output, other.log_output, defaults.log_output),
            color: pick(self.color, other.color, defaults.color),
        }
    }

    /// Validate the final configuration, filling in the working directory
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        match &self.workdir {
            None => {
                self.workdir = Some(std::env::current_dir()?);
            }
            Some(dir) if !dir.is_dir() => {
                return Err(ConfigError::InvalidWorkDir {
                    path: dir.display().to_string(),
                });
            }
            Some(_) => {}
        }
        Ok(())
    }

    /// Resolve a user-supplied path against the working directory
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.workdir {
            Some(workdir) if path.is_relative() => workdir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

fn pick<T: PartialEq>(current: T, overlay: T, default: T) -> T {
    if overlay == default { current } else { overlay }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
