use super::*;
use std::fs;
use tempfile::TempDir;

const SHOP: &str = r#"{
    "projects": [
        { "name": "WebApp", "project_references": ["Logger", "Services", "Squiggly"] },
        { "name": "Services", "project_references": ["Logger", "DomainModels"] },
        { "name": "DomainModels", "project_references": ["VariousAbstractions"] },
        { "name": "PublicApi", "project_references": ["Services"] },
        { "name": "Logger" },
        { "name": "VariousAbstractions" }
    ]
}"#;

const CYCLIC: &str = r#"{
    "projects": [
        { "name": "A", "project_references": ["B", "C", "D"] },
        { "name": "D", "project_references": ["E", "F", "A"] }
    ]
}"#;

fn workspace(files: &[(&str, &str)]) -> (TempDir, AppConfig) {
    let dir = TempDir::new().unwrap();
    for (relative, content) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    let config = AppConfig {
        workdir: Some(dir.path().to_path_buf()),
        ..AppConfig::default()
    };
    (dir, config)
}

fn run(command: Commands, config: &AppConfig) -> Result<String> {
    let mut buffer = Vec::new();
    execute_command_with_output(command, config, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap())
}

#[test]
fn test_order_prints_valid_then_unrecognized() {
    let (_dir, config) = workspace(&[("shop.deps.json", SHOP)]);
    let output = run(
        Commands::Order {
            manifest: PathBuf::from("shop.deps.json"),
            json: false,
        },
        &config,
    )
    .unwrap();

    assert_eq!(
        output,
        "Logger\nVariousAbstractions\nDomainModels\nServices\nPublicApi\nWebApp\n\
         ! Unrecognized reference: Squiggly\n"
    );
}

#[test]
fn test_order_json() {
    let (_dir, config) = workspace(&[("shop.deps.json", SHOP)]);
    let output = run(
        Commands::Order {
            manifest: PathBuf::from("shop.deps.json"),
            json: true,
        },
        &config,
    )
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["valid"][0], "Logger");
    assert_eq!(value["valid"][5], "WebApp");
    assert_eq!(value["invalid"], serde_json::json!(["Squiggly"]));
}

#[test]
fn test_order_cycle_reports_origin_and_path() {
    let (_dir, config) = workspace(&[("loop.deps.json", CYCLIC)]);
    let err = run(
        Commands::Order {
            manifest: PathBuf::from("loop.deps.json"),
            json: false,
        },
        &config,
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Circular reference found: A (A → D → A)");
}

#[test]
fn test_order_missing_manifest_has_context() {
    let (_dir, config) = workspace(&[]);
    let err = run(
        Commands::Order {
            manifest: PathBuf::from("absent.deps.json"),
            json: false,
        },
        &config,
    )
    .unwrap_err();

    assert!(err.to_string().starts_with("Failed to load manifest"));
    assert!(err.to_string().contains("absent.deps.json"));
}

#[test]
fn test_reverse_full_index() {
    let (_dir, config) = workspace(&[("shop.deps.json", SHOP)]);
    let output = run(
        Commands::Reverse {
            manifest: PathBuf::from("shop.deps.json"),
            key: None,
            json: false,
        },
        &config,
    )
    .unwrap();

    assert!(output.starts_with("Logger\n  • WebApp\n  • Services\nServices\n  • WebApp\n  • PublicApi\n"));
    assert!(output.contains("VariousAbstractions\n  • DomainModels\n"));
}

#[test]
fn test_reverse_single_key() {
    let (_dir, config) = workspace(&[("shop.deps.json", SHOP)]);
    let output = run(
        Commands::Reverse {
            manifest: PathBuf::from("shop.deps.json"),
            key: Some("Services".to_string()),
            json: false,
        },
        &config,
    )
    .unwrap();
    assert_eq!(output, "WebApp\nPublicApi\n");

    let output = run(
        Commands::Reverse {
            manifest: PathBuf::from("shop.deps.json"),
            key: Some("WebApp".to_string()),
            json: true,
        },
        &config,
    )
    .unwrap();
    assert_eq!(output.trim(), "[]");
}

#[test]
fn test_reverse_unknown_key_is_informational() {
    let (_dir, config) = workspace(&[("shop.deps.json", SHOP)]);
    let output = run(
        Commands::Reverse {
            manifest: PathBuf::from("shop.deps.json"),
            key: Some("Nobody".to_string()),
            json: false,
        },
        &config,
    )
    .unwrap();
    assert_eq!(output, "· Nothing depends on Nobody\n");
}

#[test]
fn test_deps_direct_and_transitive() {
    let (_dir, config) = workspace(&[("shop.deps.json", SHOP)]);
    let direct = run(
        Commands::Deps {
            manifest: PathBuf::from("shop.deps.json"),
            name: "Services".to_string(),
            transitive: false,
        },
        &config,
    )
    .unwrap();
    assert_eq!(direct, "Logger\nDomainModels\n");

    let transitive = run(
        Commands::Deps {
            manifest: PathBuf::from("shop.deps.json"),
            name: "Services".to_string(),
            transitive: true,
        },
        &config,
    )
    .unwrap();
    let mut lines: Vec<&str> = transitive.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, vec!["DomainModels", "Logger", "VariousAbstractions"]);
}

#[test]
fn test_dependents_transitive() {
    let (_dir, config) = workspace(&[("shop.deps.json", SHOP)]);
    let output = run(
        Commands::Dependents {
            manifest: PathBuf::from("shop.deps.json"),
            name: "DomainModels".to_string(),
            transitive: true,
        },
        &config,
    )
    .unwrap();
    let mut lines: Vec<&str> = output.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, vec!["PublicApi", "Services", "WebApp"]);
}

#[test]
fn test_deps_unknown_project() {
    let (_dir, config) = workspace(&[("shop.deps.json", SHOP)]);
    let err = run(
        Commands::Deps {
            manifest: PathBuf::from("shop.deps.json"),
            name: "Squiggly".to_string(),
            transitive: false,
        },
        &config,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Unknown project: Squiggly");
}

#[test]
fn test_analyze_writes_reports_and_continues_past_failures() {
    let (dir, config) = workspace(&[
        ("shop/shop.deps.json", SHOP),
        ("loop/loop.deps.json", CYCLIC),
    ]);
    let output = run(
        Commands::Analyze {
            path: PathBuf::from("."),
            output: None,
        },
        &config,
    )
    .unwrap();

    assert!(output.contains("→ Analyzing loop/loop.deps.json"));
    assert!(output.contains("✗ "));
    assert!(output.contains("Circular reference found: A"));
    assert!(output.contains("✓ shop: 6 projects, 1 unrecognized"));
    assert!(output.contains("1 analyzed, 1 failed"));

    let report = dir.path().join(".").join(OUTPUT_FOLDER).join("shop.json");
    assert!(report.exists());
    assert!(!dir.path().join(OUTPUT_FOLDER).join("loop.json").exists());
}

#[test]
fn test_analyze_custom_output_directory() {
    let (dir, config) = workspace(&[("shop.deps.json", SHOP)]);
    run(
        Commands::Analyze {
            path: PathBuf::from("."),
            output: Some(PathBuf::from("reports")),
        },
        &config,
    )
    .unwrap();
    assert!(dir.path().join("reports").join("shop.json").exists());
}

#[test]
fn test_analyze_empty_directory_warns() {
    let (_dir, config) = workspace(&[]);
    let output = run(
        Commands::Analyze {
            path: PathBuf::from("."),
            output: None,
        },
        &config,
    )
    .unwrap();
    assert!(output.starts_with("! No manifests found under"));
}

#[test]
fn test_analyze_same_solution_name_is_a_failure() {
    let (dir, config) = workspace(&[
        ("a/app.deps.json", SHOP),
        ("b/app.deps.json", r#"{ "projects": [{ "name": "Solo" }] }"#),
    ]);
    let output = run(
        Commands::Analyze {
            path: PathBuf::from("."),
            output: None,
        },
        &config,
    )
    .unwrap();

    assert!(output.contains("✓ app: 6 projects, 1 unrecognized"));
    assert!(output.contains("already written for a/app.deps.json"));
    assert!(output.contains("1 analyzed, 1 failed"));

    let report = dir.path().join(".").join(OUTPUT_FOLDER).join("app.json");
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(report).unwrap()).unwrap();
    assert_eq!(json["projects"].as_array().map(Vec::len), Some(6));
}

#[test]
fn test_analyze_rejects_solution_name_outside_output() {
    let (dir, config) = workspace(&[(
        "shop.deps.json",
        r#"{ "name": "../escaped", "projects": [{ "name": "Solo" }] }"#,
    )]);
    let output = run(
        Commands::Analyze {
            path: PathBuf::from("."),
            output: None,
        },
        &config,
    )
    .unwrap();

    assert!(output.contains("✗ ../escaped"));
    assert!(output.contains("0 analyzed, 1 failed"));
    assert!(!dir.path().join("escaped.json").exists());
}

#[test]
fn test_analyze_creates_output_folder_without_manifests() {
    let (dir, config) = workspace(&[]);
    run(
        Commands::Analyze {
            path: PathBuf::from("."),
            output: None,
        },
        &config,
    )
    .unwrap();
    assert!(dir.path().join(".").join(OUTPUT_FOLDER).is_dir());
}

#[test]
fn test_analyze_missing_directory_fails() {
    let (_dir, config) = workspace(&[]);
    let err = run(
        Commands::Analyze {
            path: PathBuf::from("nowhere"),
            output: None,
        },
        &config,
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("Path not found"));
}

#[test]
fn test_version() {
    let config = AppConfig::default();
    let output = run(Commands::Version, &config).unwrap();
    assert!(output.starts_with(&format!("deporder {}\n", env!("CARGO_PKG_VERSION"))));
}
