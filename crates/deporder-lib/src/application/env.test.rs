use super::*;

fn env(pairs: &[(&str, &str)]) -> EnvironmentConfig {
    EnvironmentConfig::from_pairs(
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string())),
    )
    .unwrap()
}

#[test]
fn test_no_variables_keep_intent() {
    let config = env(&[]);
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
    assert_eq!(config.apply_color_config(ColorIntent::Always), ColorIntent::Always);
}

#[test]
fn test_no_color_disables() {
    let config = env(&[("NO_COLOR", "1")]);
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let config = env(&[("NO_COLOR", "")]);
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_clicolor_zero_disables() {
    let config = env(&[("CLICOLOR", "0")]);
    assert_eq!(config.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}

#[test]
fn test_force_color_beats_no_color() {
    let config = env(&[("CLICOLOR", "0"), ("NO_COLOR", "1"), ("FORCE_COLOR", "1")]);
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Always);
}

#[test]
fn test_force_color_invalid_value_ignored() {
    let config = env(&[("FORCE_COLOR", "maybe")]);
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_ci_disables_even_when_forced() {
    let config = env(&[("CI", "true"), ("FORCE_COLOR", "1")]);
    assert_eq!(config.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}
