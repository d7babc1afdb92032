use super::*;

#[test]
fn test_clap_defaults_match_default_impl() {
    let parsed = AppConfig::try_parse_from(["deporder"]).unwrap();
    let defaults = AppConfig::default();
    assert_eq!(parsed.log_format, defaults.log_format);
    assert_eq!(parsed.log_output, defaults.log_output);
    assert!(defaults.workdir.is_none());
    assert_eq!(defaults.log_level, 0);
}

#[test]
fn test_deserialize_partial_config() {
    let config: AppConfig = serde_json::from_str(r#"{ "log_level": 3, "color": "never" }"#).unwrap();
    assert_eq!(config.log_level, 3);
    assert_eq!(config.color, ColorIntent::Never);
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(config.workdir.is_none());
}

#[test]
fn test_config_merging() {
    let base = AppConfig {
        log_format: LogFormat::Yaml,
        ..AppConfig::default()
    };
    let override_config = AppConfig {
        log_level: 4,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert_eq!(merged.log_level, 4);
    assert_eq!(merged.color, ColorIntent::Never);
    // Defaults in `other` never clobber explicit values
    assert_eq!(merged.log_format, LogFormat::Yaml);
    assert_eq!(merged.log_output, LogOutput::Stderr);
}

#[test]
fn test_to_logger_config() {
    let config = AppConfig {
        log_level: 2,
        log_output: LogOutput::Stdout,
        ..AppConfig::default()
    };
    let logger = config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Info);
    assert_eq!(logger.output, LogOutput::Stdout);
    assert_eq!(logger.format, LogFormat::Text);
    assert_eq!(logger.color, ColorIntent::Auto);
}

#[test]
fn test_resolve_path_against_workdir() {
    let config = AppConfig {
        workdir: Some(PathBuf::from("/work")),
        ..AppConfig::default()
    };
    assert_eq!(
        config.resolve_path(Path::new("app.deps.json")),
        PathBuf::from("/work/app.deps.json")
    );
    assert_eq!(
        config.resolve_path(Path::new("/abs/app.deps.json")),
        PathBuf::from("/abs/app.deps.json")
    );
    assert_eq!(
        AppConfig::default().resolve_path(Path::new("app.deps.json")),
        PathBuf::from("app.deps.json")
    );
}

#[test]
fn test_validate_fills_current_dir() {
    let mut config = AppConfig::default();
    config.validate().unwrap();
    assert_eq!(config.workdir, Some(std::env::current_dir().unwrap()));
}
