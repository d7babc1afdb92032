//! E2E tests for batch analysis

use anyhow::Result;
use deporder_lib::analysis::OUTPUT_FOLDER;
use deporder_lib::application::cli::Commands;
use deporder_tests::{ManifestFormat, Scenario, TestEnvironment};
use std::path::PathBuf;

fn analyze(path: &str, output: Option<&str>) -> Commands {
    Commands::Analyze {
        path: PathBuf::from(path),
        output: output.map(PathBuf::from),
    }
}

#[test]
fn e2e_analyze_mixed_formats() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.with_scenario("repo/web", "shop", Scenario::ShopWithUnknown, ManifestFormat::Json)?;
    env.with_scenario("repo/tools", "tools", Scenario::Shop, ManifestFormat::Toml)?;
    env.with_scenario("repo/empty", "blank", Scenario::Empty, ManifestFormat::Yaml)?;

    let output = env.run(analyze("repo", None))?;
    assert!(output.contains("✓ shop: 6 projects, 1 unrecognized"));
    assert!(output.contains("✓ tools: 6 projects, 0 unrecognized"));
    assert!(output.contains("✓ blank: 0 projects, 0 unrecognized"));
    assert!(output.contains("3 analyzed, 0 failed"));

    let reports = env.root().join("repo").join(OUTPUT_FOLDER);
    for solution in ["shop", "tools", "blank"] {
        assert!(reports.join(format!("{solution}.json")).is_file());
    }
    Ok(())
}

#[test]
fn e2e_analyze_report_contents() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.with_scenario(".", "shop", Scenario::ShopWithUnknown, ManifestFormat::Json)?;

    env.run(analyze(".", Some("out")))?;

    let content = std::fs::read_to_string(env.root().join("out").join("shop.json"))?;
    let report: serde_json::Value = serde_json::from_str(&content)?;
    assert_eq!(report["solution"], "shop");
    assert_eq!(report["projects"].as_array().map(Vec::len), Some(6));
    assert_eq!(report["projects"][0]["package_references"], serde_json::json!(["Serilog"]));
    assert_eq!(
        report["order"]["valid"],
        serde_json::json!(Scenario::ShopWithUnknown.expected_order())
    );
    assert_eq!(report["order"]["invalid"], serde_json::json!(["Squiggly"]));
    assert_eq!(report["reverse"]["Squiggly"], serde_json::json!(["WebApp"]));
    Ok(())
}

#[test]
fn e2e_analyze_continues_after_failures() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.with_scenario("a", "loop", Scenario::Cyclic, ManifestFormat::Json)?;
    env.with_file("b/broken.deps.json", "{ not json")?;
    env.with_scenario("c", "shop", Scenario::Shop, ManifestFormat::Yaml)?;

    let lines = env.run_lines(analyze(".", None))?;
    let failures: Vec<&String> = lines.iter().filter(|line| line.starts_with("✗ ")).collect();
    assert_eq!(failures.len(), 2);
    assert!(failures[0].contains("Circular reference found: A"));
    assert!(failures[1].contains("Failed to parse JSON manifest"));
    assert!(lines.iter().any(|line| line.starts_with("✓ shop")));
    assert_eq!(
        lines.last().map(String::as_str).map(|line| line.starts_with("· 1 analyzed, 2 failed")),
        Some(true)
    );

    let reports = env.root().join(OUTPUT_FOLDER);
    assert!(reports.join("shop.json").is_file());
    assert!(!reports.join("loop.json").exists());
    Ok(())
}

#[test]
fn e2e_analyze_rerun_overwrites_and_ignores_reports() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.with_scenario(".", "shop", Scenario::Shop, ManifestFormat::Json)?;
    // Reports living in the output folder are never picked up as input
    env.with_scenario(OUTPUT_FOLDER, "stale", Scenario::Cyclic, ManifestFormat::Json)?;

    let first = env.run(analyze(".", None))?;
    let second = env.run(analyze(".", None))?;
    assert!(first.contains("1 analyzed, 0 failed"));
    assert!(second.contains("1 analyzed, 0 failed"));
    assert!(!second.contains("stale"));
    Ok(())
}

#[test]
fn e2e_analyze_missing_path() -> Result<()> {
    let env = TestEnvironment::new()?;
    let err = env.run(analyze("does-not-exist", None)).unwrap_err();
    assert!(err.to_string().starts_with("Path not found"));
    Ok(())
}
