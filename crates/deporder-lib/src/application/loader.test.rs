use super::*;
use crate::primitives::{ColorIntent, LogFormat};
use tempfile::TempDir;

#[test]
fn test_resolve_defaults_fill_workdir() {
    let config = AppConfig::resolve(AppConfig::default(), &EnvironmentConfig::default()).unwrap();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.color, ColorIntent::Auto);
    assert_eq!(config.workdir, Some(std::env::current_dir().unwrap()));
}

#[test]
fn test_resolve_env_color_applies_before_cli() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };
    let config = AppConfig::resolve(AppConfig::default(), &env).unwrap();
    assert_eq!(config.color, ColorIntent::Never);

    let cli = AppConfig {
        color: ColorIntent::Always,
        ..AppConfig::default()
    };
    let config = AppConfig::resolve(cli, &env).unwrap();
    assert_eq!(config.color, ColorIntent::Always);
}

#[test]
fn test_resolve_keeps_cli_values() {
    let dir = TempDir::new().unwrap();
    let cli = AppConfig {
        workdir: Some(dir.path().to_path_buf()),
        log_level: 3,
        log_format: LogFormat::Json,
        ..AppConfig::default()
    };
    let config = AppConfig::resolve(cli, &EnvironmentConfig::default()).unwrap();
    assert_eq!(config.workdir.as_deref(), Some(dir.path()));
    assert_eq!(config.log_level, 3);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_resolve_rejects_missing_workdir() {
    let dir = TempDir::new().unwrap();
    let cli = AppConfig {
        workdir: Some(dir.path().join("missing")),
        ..AppConfig::default()
    };
    let err = AppConfig::resolve(cli, &EnvironmentConfig::default()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWorkDir { .. }));
}
