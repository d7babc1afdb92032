//! Project fixtures for E2E tests
//!
//! The scenarios here are the reference solutions the resolver is checked
//! against, plus writers that render them as manifests in any supported
//! format.

use anyhow::Result;
use deporder_lib::project::{Project, ProjectManifest};
use std::path::{Path, PathBuf};

pub use deporder_lib::project::ManifestFormat;

/// Named reference solutions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Linear chain plus a diamond through `Services`
    Shop,
    /// [`Scenario::Shop`] with `WebApp` also naming the missing `Squiggly`
    ShopWithUnknown,
    /// `A -> D -> A`
    Cyclic,
    /// No projects at all
    Empty,
}

impl Scenario {
    pub fn projects(self) -> Vec<Project> {
        match self {
            Scenario::Shop => shop(&["Logger", "Services", "DomainModels"]),
            Scenario::ShopWithUnknown => shop(&["Logger", "Services", "Squiggly"]),
            Scenario::Cyclic => vec![
                Project::new("A").with_references(["B", "C", "D"]),
                Project::new("D").with_references(["E", "F", "A"]),
            ],
            Scenario::Empty => Vec::new(),
        }
    }

    pub fn manifest(self) -> ProjectManifest {
        ProjectManifest {
            name: None,
            projects: self.projects(),
        }
    }

    /// Expected build order for the acyclic scenarios
    pub fn expected_order(self) -> Vec<&'static str> {
        match self {
            Scenario::Shop | Scenario::ShopWithUnknown => vec![
                "Logger",
                "VariousAbstractions",
                "DomainModels",
                "Services",
                "PublicApi",
                "WebApp",
            ],
            Scenario::Cyclic | Scenario::Empty => Vec::new(),
        }
    }
}

fn shop(web_app_references: &[&str]) -> Vec<Project> {
    vec![
        Project::new("WebApp")
            .with_references(web_app_references.iter().copied())
            .with_packages(["Serilog"]),
        Project::new("Services").with_references(["Logger", "DomainModels"]),
        Project::new("DomainModels").with_references(["VariousAbstractions"]),
        Project::new("PublicApi").with_references(["Services"]),
        Project::new("Logger"),
        Project::new("VariousAbstractions"),
    ]
}

/// Render a manifest in the given format
pub fn render_manifest(manifest: &ProjectManifest, format: ManifestFormat) -> Result<String> {
    Ok(match format {
        ManifestFormat::Json => serde_json::to_string_pretty(manifest)?,
        ManifestFormat::Toml => toml::to_string(manifest)?,
        ManifestFormat::Yaml => serde_saphyr::to_string(manifest)?,
    })
}

/// File extension used when writing a manifest in `format`
pub fn extension(format: ManifestFormat) -> &'static str {
    match format {
        ManifestFormat::Json => "json",
        ManifestFormat::Yaml => "yaml",
        ManifestFormat::Toml => "toml",
    }
}

/// Write `<dir>/<solution>.deps.<ext>` and return its path
pub fn write_manifest(
    dir: &Path,
    solution: &str,
    manifest: &ProjectManifest,
    format: ManifestFormat,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{solution}.deps.{}", extension(format)));
    std::fs::write(&path, render_manifest(manifest, format)?)?;
    Ok(path)
}
