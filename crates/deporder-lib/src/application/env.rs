//! Standard environment variables for colour and CI detection

use crate::primitives::{ColorIntent, ConfigError};
use serde::Deserialize;

/// Environment variables that affect output behaviour
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// NO_COLOR (any non-empty value disables colour)
    pub no_color: Option<String>,
    /// FORCE_COLOR (0/false disables, 1/2/3/true enables)
    pub force_color: Option<String>,
    /// CLICOLOR (0 disables colour)
    pub clicolor: Option<String>,
    /// CI (any value means a CI runner)
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    /// Load from the current process environment
    pub fn load() -> Result<Self, ConfigError> {
        Ok(envy::from_env()?)
    }

    /// Load from explicit `(name, value)` pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(pairs)?)
    }

    /// Apply environment variables to the colour intent
    ///
    /// CI wins outright; otherwise CLICOLOR, then NO_COLOR, then FORCE_COLOR,
    /// each later one overriding the earlier.
    pub fn apply_color_config(&self, mut color: ColorIntent) -> ColorIntent {
        if self.ci.is_some() {
            return ColorIntent::Never;
        }

        if self.clicolor.as_deref() == Some("0") {
            color = ColorIntent::Never;
        }

        if self.no_color.as_deref().is_some_and(|value| !value.is_empty()) {
            color = ColorIntent::Never;
        }

        if let Some(force_color) = &self.force_color {
            match force_color.as_str() {
                "0" | "false" => color = ColorIntent::Never,
                "1" | "2" | "3" | "true" => color = ColorIntent::Always,
                _ => {}
            }
        }

        color
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
