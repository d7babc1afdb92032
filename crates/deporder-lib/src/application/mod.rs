//! Application layer modules
//!
//! CLI surface, configuration loading and command dispatch.

pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod loader;

pub use cli::{Cli, CliConfig, Commands};
pub use commands::{execute_command, execute_command_with_display, execute_command_with_output};
pub use config::AppConfig;
pub use env::EnvironmentConfig;
