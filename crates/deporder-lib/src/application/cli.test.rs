use super::*;
use crate::primitives::{ColorIntent, LogFormat};
use clap::CommandFactory;

fn parse(args: &[&str]) -> CliConfig {
    CliConfig::from_args(args.iter().copied(), &EnvironmentConfig::default()).unwrap()
}

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_subcommand() {
    let config = parse(&["deporder"]);
    assert!(config.command.is_none());
}

#[test]
fn test_order_command() {
    let config = parse(&["deporder", "order", "app.deps.json", "--json"]);
    assert_eq!(
        config.command,
        Some(Commands::Order {
            manifest: PathBuf::from("app.deps.json"),
            json: true,
        })
    );
}

#[test]
fn test_reverse_with_key() {
    let config = parse(&["deporder", "reverse", "app.deps.yaml", "--key", "Logger"]);
    assert_eq!(
        config.command,
        Some(Commands::Reverse {
            manifest: PathBuf::from("app.deps.yaml"),
            key: Some("Logger".to_string()),
            json: false,
        })
    );
}

#[test]
fn test_deps_transitive_short_flag() {
    let config = parse(&["deporder", "deps", "app.deps.toml", "WebApp", "-t"]);
    assert_eq!(
        config.command,
        Some(Commands::Deps {
            manifest: PathBuf::from("app.deps.toml"),
            name: "WebApp".to_string(),
            transitive: true,
        })
    );
}

#[test]
fn test_global_flags_after_subcommand() {
    let config = parse(&[
        "deporder",
        "analyze",
        "solutions",
        "--log-format",
        "json",
        "--color",
        "never",
    ]);
    assert_eq!(config.app_config.log_format, LogFormat::Json);
    assert_eq!(config.app_config.color, ColorIntent::Never);
    assert_eq!(
        config.command,
        Some(Commands::Analyze {
            path: PathBuf::from("solutions"),
            output: None,
        })
    );
}

#[test]
fn test_invalid_color_rejected() {
    let result = CliConfig::from_args(
        ["deporder", "--color", "rainbow"],
        &EnvironmentConfig::default(),
    );
    assert!(result.is_err());
}
