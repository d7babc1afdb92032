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

fn write(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_is_manifest() {
    assert!(is_manifest(Path::new("a/shop.deps.json")));
    assert!(is_manifest(Path::new("shop.deps.yml")));
    assert!(is_manifest(Path::new("shop.deps.toml")));
    assert!(!is_manifest(Path::new("shop.json")));
    assert!(!is_manifest(Path::new("shop.sln")));
}

#[test]
fn test_discover_is_recursive_sorted_and_skips_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "b/two.deps.yaml", "projects: []\n");
    write(root, "a/nested/one.deps.json", "{}");
    write(root, "notes.json", "{}");
    write(root, &format!("{OUTPUT_FOLDER}/old.deps.json"), "{}");

    let found = discover_manifests(root).unwrap();
    assert_eq!(
        found,
        vec![
            root.join("a/nested/one.deps.json"),
            root.join("b/two.deps.yaml"),
        ]
    );
}

#[test]
fn test_discover_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let err = discover_manifests(&temp_dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, AnalysisError::DirectoryNotFound { .. }));
    assert!(err.to_string().starts_with("Path not found:"));
}

#[test]
fn test_analyze_builds_full_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(temp_dir.path(), "shop.deps.json", SHOP);

    let report = analyze(&path).unwrap();
    assert_eq!(report.solution, "shop");
    assert_eq!(report.projects.len(), 6);
    assert_eq!(
        report.order.valid,
        vec![
            "Logger",
            "VariousAbstractions",
            "DomainModels",
            "Services",
            "PublicApi",
            "WebApp"
        ]
    );
    assert_eq!(report.order.invalid, vec!["Squiggly"]);
    assert_eq!(
        report.reverse.get(&"Logger".to_string()),
        Some(&["WebApp".to_string(), "Services".to_string()][..])
    );
}

#[test]
fn test_analyze_cycle_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(temp_dir.path(), "loop.deps.json", CYCLIC);

    let err = analyze(&path).unwrap_err();
    assert_eq!(err.to_string(), "Circular reference found: A");
}

#[test]
fn test_try_analyze_folds_errors() {
    let temp_dir = TempDir::new().unwrap();
    let good = write(temp_dir.path(), "shop.deps.json", SHOP);
    let bad = write(temp_dir.path(), "loop.deps.json", CYCLIC);

    assert!(try_analyze(&good).is_success());
    match try_analyze(&bad) {
        AnalysisOutcome::Failure { source, message } => {
            assert_eq!(source, bad);
            assert_eq!(message, "Circular reference found: A");
        }
        AnalysisOutcome::Success(_) => panic!("cyclic manifest should fail"),
    }
}

#[test]
fn test_write_report_creates_folder_and_replaces_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(temp_dir.path(), "shop.deps.json", SHOP);
    let output_dir = temp_dir.path().join(OUTPUT_FOLDER);
    let report = analyze(&path).unwrap();

    let written = write_report(&report, &output_dir).unwrap();
    assert_eq!(written, output_dir.join("shop.json"));

    fs::write(&written, "stale").unwrap();
    write_report(&report, &output_dir).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&written).unwrap()).unwrap();
    assert_eq!(json["solution"], "shop");
    assert_eq!(json["order"]["invalid"], serde_json::json!(["Squiggly"]));
    assert_eq!(json["reverse"]["Services"], serde_json::json!(["WebApp", "PublicApi"]));
    assert_eq!(json["projects"].as_array().map(Vec::len), Some(6));
}

#[test]
fn test_report_path_accepts_plain_names() {
    let output_dir = Path::new("out");
    assert_eq!(report_path("shop", output_dir).unwrap(), output_dir.join("shop.json"));
    assert_eq!(
        report_path("Shop.Web", output_dir).unwrap(),
        output_dir.join("Shop.Web.json")
    );
}

#[test]
fn test_report_path_rejects_names_leaving_output_dir() {
    let output_dir = Path::new("out");
    for name in ["../escaped", "/tmp/abs", "a/b", "a\\b", "..", ".", ""] {
        let err = report_path(name, output_dir).unwrap_err();
        assert!(
            matches!(err, AnalysisError::InvalidSolutionName { .. }),
            "{name:?} should be rejected"
        );
    }
}

#[test]
fn test_write_report_keeps_named_solutions_inside_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    let output_dir = root.join(OUTPUT_FOLDER);
    let absolute = temp_dir.path().join("abs");

    for name in ["../escaped", absolute.to_str().unwrap(), "a/b"] {
        let manifest = serde_json::json!({ "name": name, "projects": [] }).to_string();
        let path = write(&root, "named.deps.json", &manifest);
        let report = analyze(&path).unwrap();

        let err = write_report(&report, &output_dir).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSolutionName { .. }));
    }

    assert!(!root.join("escaped.json").exists());
    assert!(!temp_dir.path().join("abs.json").exists());
    assert!(!output_dir.join("a").exists());
}
