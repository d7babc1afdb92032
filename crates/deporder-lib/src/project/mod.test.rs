use super::*;
use std::fs;
use tempfile::TempDir;

fn write(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_format_from_extension() {
    assert_eq!(
        ManifestFormat::from_path(Path::new("a.deps.json")),
        Some(ManifestFormat::Json)
    );
    assert_eq!(
        ManifestFormat::from_path(Path::new("a.yml")),
        Some(ManifestFormat::Yaml)
    );
    assert_eq!(
        ManifestFormat::from_path(Path::new("a.yaml")),
        Some(ManifestFormat::Yaml)
    );
    assert_eq!(
        ManifestFormat::from_path(Path::new("a.toml")),
        Some(ManifestFormat::Toml)
    );
    assert_eq!(ManifestFormat::from_path(Path::new("a.sln")), None);
    assert_eq!(ManifestFormat::from_path(Path::new("Makefile")), None);
}

#[test]
fn test_load_json_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(
        temp_dir.path(),
        "shop.deps.json",
        r#"{
            "projects": [
                { "name": "WebApp", "project_references": ["Logger"], "package_references": ["Serilog"] },
                { "name": "Logger", "path": "src/Logger/Logger.csproj" }
            ]
        }"#,
    );

    let manifest = ProjectManifest::load(&path).unwrap();
    assert_eq!(manifest.projects.len(), 2);
    assert_eq!(manifest.projects[0].project_references, vec!["Logger"]);
    assert_eq!(manifest.projects[0].package_references, vec!["Serilog"]);
    assert!(manifest.projects[1].project_references.is_empty());
    assert_eq!(
        manifest.projects[1].path.as_deref(),
        Some(Path::new("src/Logger/Logger.csproj"))
    );
    assert_eq!(manifest.solution_name(&path), "shop");
}

#[test]
fn test_load_yaml_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(
        temp_dir.path(),
        "shop.deps.yaml",
        "name: Storefront\nprojects:\n  - name: WebApp\n    project_references: [Logger]\n  - name: Logger\n",
    );

    let manifest = ProjectManifest::load(&path).unwrap();
    assert_eq!(manifest.name.as_deref(), Some("Storefront"));
    assert_eq!(manifest.solution_name(&path), "Storefront");
    assert_eq!(manifest.projects[0].name, "WebApp");
    assert_eq!(manifest.projects[0].project_references, vec!["Logger"]);
}

#[test]
fn test_load_toml_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(
        temp_dir.path(),
        "tools.toml",
        r#"
[[projects]]
name = "Cli"
project_references = ["Core"]

[[projects]]
name = "Core"
"#,
    );

    let manifest = ProjectManifest::load(&path).unwrap();
    assert_eq!(manifest.projects.len(), 2);
    assert_eq!(manifest.projects[0].project_references, vec!["Core"]);
    assert_eq!(manifest.solution_name(&path), "tools");
}

#[test]
fn test_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(temp_dir.path(), "shop.sln", "");

    let err = ProjectManifest::load(&path).unwrap_err();
    assert!(matches!(err, ManifestError::UnsupportedFormat { .. }));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = ProjectManifest::load(&temp_dir.path().join("gone.json")).unwrap_err();
    assert!(matches!(err, ManifestError::ReadFailed { .. }));
}

#[test]
fn test_malformed_json_names_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(temp_dir.path(), "bad.json", "{ \"projects\": [ ");

    let err = ProjectManifest::load(&path).unwrap_err();
    assert!(matches!(err, ManifestError::JsonParseFailed { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn test_malformed_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(temp_dir.path(), "bad.toml", "[[projects]\nname = ");

    let err = ProjectManifest::load(&path).unwrap_err();
    assert!(matches!(err, ManifestError::TomlParseFailed { .. }));
}

#[test]
fn test_project_builders_and_selectors() {
    let project = Project::new("Api")
        .with_references(["Core", "Data"])
        .with_packages(["Serilog"])
        .with_path("src/Api/Api.csproj");

    assert_eq!(project.key(), "Api");
    assert_eq!(project.dependencies(), vec!["Core", "Data"]);
    assert_eq!(project.package_references, vec!["Serilog"]);
    assert!(project.path.is_some());
}

#[test]
fn test_solution_name_without_deps_suffix() {
    let manifest = ProjectManifest {
        name: None,
        projects: Vec::new(),
    };
    assert_eq!(manifest.solution_name(Path::new("dir/Hs5.deps.json")), "Hs5");
    assert_eq!(manifest.solution_name(Path::new("dir/Hs5.json")), "Hs5");
}
