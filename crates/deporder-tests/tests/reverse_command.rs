//! E2E tests for the reverse, deps and dependents commands

use anyhow::Result;
use deporder_lib::application::cli::Commands;
use deporder_tests::{ManifestFormat, Scenario, TestEnvironment};
use std::path::PathBuf;

fn setup() -> Result<TestEnvironment> {
    let env = TestEnvironment::new()?;
    env.with_scenario(".", "shop", Scenario::Shop, ManifestFormat::Json)?;
    Ok(env)
}

fn reverse(key: Option<&str>, json: bool) -> Commands {
    Commands::Reverse {
        manifest: PathBuf::from("shop.deps.json"),
        key: key.map(str::to_string),
        json,
    }
}

#[test]
fn e2e_reverse_lookup_keys() -> Result<()> {
    let env = setup()?;

    assert_eq!(env.run_lines(reverse(Some("Logger"), false))?, ["WebApp", "Services"]);
    assert_eq!(env.run_lines(reverse(Some("Services"), false))?, ["WebApp", "PublicApi"]);
    assert_eq!(
        env.run_lines(reverse(Some("VariousAbstractions"), false))?,
        ["DomainModels"]
    );
    Ok(())
}

#[test]
fn e2e_reverse_json_index() -> Result<()> {
    let env = setup()?;

    let output = env.run(reverse(None, true))?;
    let value: serde_json::Value = serde_json::from_str(&output)?;
    assert_eq!(
        value,
        serde_json::json!({
            "Logger": ["WebApp", "Services"],
            "Services": ["WebApp", "PublicApi"],
            "DomainModels": ["WebApp", "Services"],
            "VariousAbstractions": ["DomainModels"],
        })
    );
    Ok(())
}

#[test]
fn e2e_reverse_text_groups_dependents() -> Result<()> {
    let env = setup()?;

    let lines = env.run_lines(reverse(None, false))?;
    assert_eq!(
        lines[..6],
        [
            "Logger",
            "  • WebApp",
            "  • Services",
            "Services",
            "  • WebApp",
            "  • PublicApi",
        ]
    );
    Ok(())
}

#[test]
fn e2e_deps_and_dependents() -> Result<()> {
    let env = setup()?;

    let direct = env.run_lines(Commands::Deps {
        manifest: PathBuf::from("shop.deps.json"),
        name: "WebApp".to_string(),
        transitive: false,
    })?;
    assert_eq!(direct, ["Logger", "Services", "DomainModels"]);

    let dependents = env.run_lines(Commands::Dependents {
        manifest: PathBuf::from("shop.deps.json"),
        name: "Logger".to_string(),
        transitive: false,
    })?;
    assert_eq!(dependents, ["WebApp", "Services"]);

    let everything_above = env.run_lines(Commands::Dependents {
        manifest: PathBuf::from("shop.deps.json"),
        name: "VariousAbstractions".to_string(),
        transitive: true,
    })?;
    assert_eq!(
        everything_above,
        ["DomainModels", "WebApp", "Services", "PublicApi"]
    );
    Ok(())
}
