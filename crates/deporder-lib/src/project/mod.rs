//! Project model and manifest loading
//!
//! A manifest lists the projects of one solution and the projects each of
//! them references. It is the hand-off point between whatever analyzed the
//! build files and the resolver.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while loading a project manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON manifest: {path}: {source}")]
    JsonParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML manifest: {path}: {reason}")]
    YamlParseFailed { path: PathBuf, reason: String },

    #[error("Failed to parse TOML manifest: {path}: {source}")]
    TomlParseFailed {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unsupported manifest format: {path} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat { path: PathBuf },
}

/// A project and the names of the projects it references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,

    /// Build file location, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Names of referenced projects; these drive the ordering
    #[serde(default)]
    pub project_references: Vec<String>,

    /// External packages, carried through to reports but never ordered
    #[serde(default)]
    pub package_references: Vec<String>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            project_references: Vec::new(),
            package_references: Vec::new(),
        }
    }

    pub fn with_references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.project_references
            .extend(references.into_iter().map(Into::into));
        self
    }

    pub fn with_packages<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.package_references
            .extend(packages.into_iter().map(Into::into));
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Key selector for the resolver
    pub fn key(&self) -> String {
        self.name.clone()
    }

    /// Dependency selector for the resolver
    pub fn dependencies(&self) -> Vec<String> {
        self.project_references.clone()
    }
}

/// Manifest encodings, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Yaml,
    Toml,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str())? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Projects of one solution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Solution name; defaults to the manifest file stem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ProjectManifest {
    /// Load a manifest, picking the parser from the file extension
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        trace!("Loading manifest: {}", path.display());

        let format = ManifestFormat::from_path(path).ok_or_else(|| {
            ManifestError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
        })?;

        let content =
            std::fs::read_to_string(path).map_err(|e| ManifestError::ReadFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        let manifest = Self::parse(&content, format, path)?;
        debug!(
            path = %path.display(),
            projects = manifest.projects.len(),
            "Loaded manifest"
        );
        Ok(manifest)
    }

    /// Parse manifest text; `path` is only used in error messages
    pub fn parse(content: &str, format: ManifestFormat, path: &Path) -> Result<Self, ManifestError> {
        match format {
            ManifestFormat::Json => {
                serde_json::from_str(content).map_err(|e| ManifestError::JsonParseFailed {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
            ManifestFormat::Yaml => {
                serde_saphyr::from_str(content).map_err(|e| ManifestError::YamlParseFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
            ManifestFormat::Toml => {
                toml::from_str(content).map_err(|e| ManifestError::TomlParseFailed {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
    }

    /// Solution name, falling back to the manifest file name without its
    /// `.deps.<ext>` or `.<ext>` suffix
    pub fn solution_name(&self, path: &Path) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("solution");
        let stem = file_name
            .rsplit_once('.')
            .map_or(file_name, |(stem, _)| stem);
        stem.strip_suffix(".deps").unwrap_or(stem).to_string()
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
