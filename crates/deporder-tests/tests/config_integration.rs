//! Configuration resolution as seen from the command line

use anyhow::Result;
use deporder_lib::application::cli::{CliConfig, Commands};
use deporder_lib::application::env::EnvironmentConfig;
use deporder_lib::primitives::{ColorIntent, LogFormat, LogLevel, LogOutput};
use deporder_tests::{ManifestFormat, Scenario, TestEnvironment};

fn env_of(pairs: &[(&str, &str)]) -> Result<EnvironmentConfig> {
    Ok(EnvironmentConfig::from_pairs(
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())),
    )?)
}

#[test]
fn e2e_workdir_flag_drives_manifest_resolution() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.with_scenario("solutions", "shop", Scenario::Shop, ManifestFormat::Json)?;
    let workdir = env.root().join("solutions");

    let cli = CliConfig::from_args(
        [
            "deporder",
            "--workdir",
            workdir.to_str().unwrap_or_default(),
            "order",
            "shop.deps.json",
        ],
        &EnvironmentConfig::default(),
    )?;
    assert_eq!(cli.app_config.workdir.as_deref(), Some(workdir.as_path()));

    let mut buffer = Vec::new();
    let command = cli.command.clone().unwrap_or(Commands::Version);
    deporder_lib::application::execute_command_with_output(command, &cli.app_config, &mut buffer)?;
    let output = String::from_utf8(buffer)?;
    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        Scenario::Shop.expected_order()
    );
    Ok(())
}

#[test]
fn e2e_no_color_environment_is_overridden_by_flag() -> Result<()> {
    let no_color = env_of(&[("NO_COLOR", "1")])?;

    let from_env = CliConfig::from_args(["deporder"], &no_color)?;
    assert_eq!(from_env.app_config.color, ColorIntent::Never);

    let forced = CliConfig::from_args(["deporder", "--color", "always"], &no_color)?;
    assert_eq!(forced.app_config.color, ColorIntent::Always);
    Ok(())
}

#[test]
fn e2e_logger_config_follows_flags() -> Result<()> {
    let cli = CliConfig::from_args(
        [
            "deporder",
            "--log-level",
            "3",
            "--log-format",
            "yml",
            "--log-output",
            "stdout",
            "version",
        ],
        &EnvironmentConfig::default(),
    )?;
    let logger = cli.app_config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Debug);
    assert_eq!(logger.format, LogFormat::Yaml);
    assert_eq!(logger.output, LogOutput::Stdout);
    assert_eq!(cli.command, Some(Commands::Version));
    Ok(())
}
