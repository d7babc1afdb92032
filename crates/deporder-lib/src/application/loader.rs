//! Configuration loading
//!
//! Coordinates the configuration sources in precedence order.

use crate::primitives::ConfigError;
use tracing::debug;

use super::{config::AppConfig, env::EnvironmentConfig};

/// Env files read before the CLI is parsed, first match per variable wins
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env.local` and `.env` into the process environment
///
/// Missing files are fine; unreadable or malformed ones are not.
pub fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        match dotenvy::from_filename(env_file) {
            Ok(path) => debug!("Loaded environment file: {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }
    Ok(())
}

impl AppConfig {
    /// Build the final config: defaults -> standard env vars -> CLI
    ///
    /// `cli` already carries `DEPORDER_*` variables through clap's `env`
    /// fallbacks, so those sit at CLI precedence.
    pub fn resolve(cli: AppConfig, env: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.color = env.apply_color_config(config.color);
        config = config.merge_with(cli);
        config.validate()?;
        Ok(config)
    }

    /// [`AppConfig::resolve`] against the current process environment
    pub fn load(cli: AppConfig) -> Result<Self, ConfigError> {
        let env = EnvironmentConfig::load()?;
        Self::resolve(cli, &env)
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
