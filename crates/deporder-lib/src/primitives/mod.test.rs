use super::*;

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(200), LogLevel::Trace);
}

#[test]
fn test_log_level_filter_names() {
    assert_eq!(LogLevel::Warning.as_filter(), "warn");
    assert_eq!(LogLevel::Trace.as_filter(), "trace");
}

#[test]
fn test_parse_with_aliases() {
    assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    assert_eq!("PLAIN".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("yml".parse::<LogFormat>().unwrap(), LogFormat::Yaml);
    assert_eq!("stdout".parse::<LogOutput>().unwrap(), LogOutput::Stdout);
    assert_eq!("off".parse::<ColorIntent>().unwrap(), ColorIntent::Never);
    assert_eq!("force".parse::<ColorIntent>().unwrap(), ColorIntent::Always);
}

#[test]
fn test_parse_rejects_unknown_values() {
    let err = "rainbow".parse::<ColorIntent>().unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert_eq!(
        err.to_string(),
        "Failed to parse configuration value 'rainbow': invalid color intent"
    );
}

#[test]
fn test_color_intent_resolution() {
    assert!(ColorIntent::Auto.enabled(true));
    assert!(!ColorIntent::Auto.enabled(false));
    assert!(ColorIntent::Always.enabled(false));
    assert!(!ColorIntent::Never.enabled(true));
}

#[test]
fn test_log_context_with_progress() {
    let mut context = LogContext::with_progress("analyze", 3);
    assert_eq!(context.operation, "analyze");
    assert_eq!(context.total_items, Some(3));
    assert_eq!(context.current_item, None);

    context.set_progress(2);
    assert_eq!(context.current_item, Some(2));
    assert_eq!(LogContext::new("order").total_items, None);
}

#[test]
fn test_log_context_progress_label() {
    let mut context = LogContext::with_progress("analyze", 5);
    assert_eq!(context.progress_label(), "");
    context.set_progress(2);
    assert_eq!(context.progress_label(), "2/5");

    let mut open_ended = LogContext::new("scan");
    open_ended.set_progress(7);
    assert_eq!(open_ended.progress_label(), "7");
}

#[test]
fn test_value_enum_lists_canonical_names() {
    use clap::ValueEnum;
    let names: Vec<String> = ColorIntent::value_variants()
        .iter()
        .filter_map(|variant| variant.to_possible_value())
        .map(|value| value.get_name().to_string())
        .collect();
    assert_eq!(names, ["auto", "always", "never"]);
}
