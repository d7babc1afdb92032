//! E2E tests for the order command

use anyhow::Result;
use deporder_lib::application::cli::Commands;
use deporder_tests::{ManifestFormat, Scenario, TestEnvironment};
use std::path::PathBuf;

fn order(manifest: &str, json: bool) -> Commands {
    Commands::Order {
        manifest: PathBuf::from(manifest),
        json,
    }
}

#[test]
fn e2e_order_linear_and_diamond() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.with_scenario(".", "shop", Scenario::Shop, ManifestFormat::Json)?;

    let lines = env.run_lines(order("shop.deps.json", false))?;
    assert_eq!(lines, Scenario::Shop.expected_order());
    Ok(())
}

#[test]
fn e2e_order_reports_unrecognized_after_valid() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.with_scenario(".", "shop", Scenario::ShopWithUnknown, ManifestFormat::Yaml)?;

    let lines = env.run_lines(order("shop.deps.yaml", false))?;
    let (valid, rest) = lines.split_at(6);
    assert_eq!(valid, Scenario::ShopWithUnknown.expected_order());
    assert_eq!(rest, ["! Unrecognized reference: Squiggly"]);
    Ok(())
}

#[test]
fn e2e_order_json_shape() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.with_scenario("nested", "shop", Scenario::ShopWithUnknown, ManifestFormat::Toml)?;

    let output = env.run(order("nested/shop.deps.toml", true))?;
    let value: serde_json::Value = serde_json::from_str(&output)?;
    assert_eq!(
        value,
        serde_json::json!({
            "valid": Scenario::ShopWithUnknown.expected_order(),
            "invalid": ["Squiggly"],
        })
    );
    Ok(())
}

#[test]
fn e2e_order_empty_manifest() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.with_scenario(".", "empty", Scenario::Empty, ManifestFormat::Json)?;

    assert_eq!(env.run(order("empty.deps.json", false))?, "");
    Ok(())
}

#[test]
fn e2e_order_cycle_fails() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.with_scenario(".", "loop", Scenario::Cyclic, ManifestFormat::Json)?;

    let err = env.run(order("loop.deps.json", false)).unwrap_err();
    assert_eq!(err.to_string(), "Circular reference found: A (A → D → A)");
    Ok(())
}

#[test]
fn e2e_order_duplicate_project_fails() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.with_file(
        "dup.deps.json",
        r#"{ "projects": [ { "name": "Core" }, { "name": "Core" } ] }"#,
    )?;

    let err = env.run(order("dup.deps.json", false)).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate item key: Core");
    Ok(())
}

#[test]
fn e2e_order_unsupported_manifest_fails() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.with_file("shop.sln", "Microsoft Visual Studio Solution File")?;

    let err = env.run(order("shop.sln", false)).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("Unsupported manifest format"));
    Ok(())
}

#[test]
fn e2e_order_yaml_names_needing_quotes() -> Result<()> {
    use deporder_lib::project::{Project, ProjectManifest};

    let env = TestEnvironment::new()?;
    let manifest = ProjectManifest {
        name: Some("Shop: #1".to_string()),
        projects: vec![
            Project::new("- Web: App").with_references(["[Core]", "#missing"]),
            Project::new("[Core]"),
        ],
    };
    env.with_manifest(".", "quoted", &manifest, ManifestFormat::Yaml)?;

    let lines = env.run_lines(order("quoted.deps.yaml", false))?;
    assert_eq!(
        lines,
        ["[Core]", "- Web: App", "! Unrecognized reference: #missing"]
    );
    Ok(())
}
