use crate::primitives::ConfigError;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use super::config::AppConfig;
use super::env::EnvironmentConfig;
use super::loader::load_env_files;

/// deporder CLI - dependency ordering for project graphs
#[derive(Debug, Clone, Parser)]
#[command(name = "deporder")]
#[command(about = "Build order and reverse dependencies for project manifests")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Resolved configuration plus the command to run
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load env files, parse the process arguments and resolve the config
    ///
    /// Exits the process on invalid arguments, like any clap binary.
    pub fn load() -> Result<Self, ConfigError> {
        load_env_files()?;
        let cli = Cli::parse();
        Ok(Self {
            app_config: AppConfig::load(cli.config)?,
            command: cli.command,
        })
    }

    /// Parse explicit arguments against a given environment, without
    /// touching env files
    pub fn from_args<I, T>(args: I, env: &EnvironmentConfig) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        Ok(Self {
            app_config: AppConfig::resolve(cli.config, env)?,
            command: cli.command,
        })
    }
}

/// Available deporder commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Print the build order of a manifest's projects
    Order {
        /// Manifest file (.json, .yaml, .yml or .toml)
        manifest: PathBuf,

        /// Emit the order as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print which projects depend on each project
    Reverse {
        /// Manifest file (.json, .yaml, .yml or .toml)
        manifest: PathBuf,

        /// Only show the dependents of this project
        #[arg(short, long)]
        key: Option<String>,

        /// Emit the index as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print what a project depends on
    Deps {
        manifest: PathBuf,

        /// Project name
        name: String,

        /// Follow dependencies of dependencies
        #[arg(short, long)]
        transitive: bool,
    },

    /// Print what depends on a project
    Dependents {
        manifest: PathBuf,

        /// Project name
        name: String,

        /// Follow dependents of dependents
        #[arg(short, long)]
        transitive: bool,
    },

    /// Analyze every manifest under a directory and write JSON reports
    Analyze {
        /// Directory to scan for *.deps.{json,yaml,yml,toml}
        path: PathBuf,

        /// Report directory (default: <path>/ProjectMetadata.Output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
