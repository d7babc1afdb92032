//! # deporder Library
//!
//! Dependency ordering for project graphs.
//!
//! ## Core Modules
//!
//! - [`resolver`] - Validation, cycle detection, ordering and reverse lookups
//! - [`project`] - Project manifests (JSON, YAML, TOML)
//! - [`analysis`] - Batch analysis of every manifest under a directory
//! - [`logger`] - Structured logging with progress tracking
//! - [`display`] - Styled status output
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```
//! use deporder_lib::project::Project;
//! use deporder_lib::resolver::order_projects;
//!
//! let projects = vec![
//!     Project::new("App").with_references(["Core"]),
//!     Project::new("Core"),
//! ];
//! let order = order_projects(&projects).unwrap();
//! assert_eq!(order.valid, vec!["Core", "App"]);
//! ```

pub mod analysis;
pub mod application;
pub mod display;
pub mod logger;
pub mod primitives;
pub mod project;
pub mod resolver;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use logger::Logger;
pub use primitives::{ColorIntent, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError};
pub use project::{Project, ProjectManifest};
pub use resolver::{DependencyOrder, ResolveError, ReverseIndex, order, reverse_lookup};

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;

pub fn main() -> Result<()> {
    // Load .env files, parse arguments and resolve configuration
    let config = CliConfig::load()?;

    let logger = Logger::init(config.app_config.to_logger_config())?;
    tracing::debug!(level = ?logger.level(), command = ?config.command, "Starting deporder");

    execute_command(config)
}
