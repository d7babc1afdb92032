//! Solution analysis
//!
//! Ties manifests to the resolver: discover manifests under a directory,
//! resolve each one into a report, and write the reports out as JSON.

use crate::project::{ManifestError, Project, ProjectManifest};
use crate::resolver::{DependencyOrder, ResolveError, ReverseIndex, order_projects, reverse_lookup_projects};
use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Default folder, under the analyzed root, that receives the reports
pub const OUTPUT_FOLDER: &str = "ProjectMetadata.Output";

/// File name suffixes recognized as project manifests
pub const MANIFEST_SUFFIXES: [&str; 4] = [".deps.json", ".deps.yaml", ".deps.yml", ".deps.toml"];

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("{source}")]
    Resolve {
        #[from]
        source: ResolveError<String>,
    },

    #[error("Path not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to scan directory: {path}: {source}")]
    ScanFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write report: {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Solution name is not a valid report file name: {name:?}")]
    InvalidSolutionName { name: String },

    #[error("Failed to serialize report for {solution}: {source}")]
    SerializeFailed {
        solution: String,
        source: serde_json::Error,
    },
}

/// Everything known about one solution after resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub solution: String,
    pub source: PathBuf,
    pub projects: Vec<Project>,
    pub order: DependencyOrder<String>,
    pub reverse: ReverseIndex<String>,
}

/// Result of [`try_analyze`]: a report, or the message explaining why not
#[derive(Debug)]
pub enum AnalysisOutcome {
    Success(AnalysisReport),
    Failure { source: PathBuf, message: String },
}

impl AnalysisOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Success(_))
    }
}

/// True if `path` names a project manifest
pub fn is_manifest(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| MANIFEST_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}

/// Recursively collect manifests under `root`, sorted by path
///
/// Directories named [`OUTPUT_FOLDER`] are skipped so reports are never
/// mistaken for input.
pub fn discover_manifests(root: &Path) -> Result<Vec<PathBuf>, AnalysisError> {
    if !root.is_dir() {
        return Err(AnalysisError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = std::fs::read_dir(&dir).map_err(|e| AnalysisError::ScanFailed {
            path: dir.clone(),
            source: e,
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| AnalysisError::ScanFailed {
                path: dir.clone(),
                source: e,
            })?;
            let path = entry.path();

            if path.is_dir() {
                if path.file_name().and_then(|name| name.to_str()) != Some(OUTPUT_FOLDER) {
                    pending.push(path);
                }
            } else if is_manifest(&path) {
                trace!("Found manifest: {}", path.display());
                found.push(path);
            }
        }
    }

    found.sort();
    debug!(root = %root.display(), manifests = found.len(), "Discovered manifests");
    Ok(found)
}

/// Load one manifest and resolve its projects
pub fn analyze(path: &Path) -> Result<AnalysisReport, AnalysisError> {
    let manifest = ProjectManifest::load(path)?;
    let solution = manifest.solution_name(path);

    let order = order_projects(&manifest.projects)?;
    let reverse = reverse_lookup_projects(&manifest.projects);

    if !order.invalid.is_empty() {
        debug!(
            solution = %solution,
            unrecognized = order.invalid.len(),
            "Solution references unknown projects"
        );
    }

    Ok(AnalysisReport {
        solution,
        source: path.to_path_buf(),
        projects: manifest.projects,
        order,
        reverse,
    })
}

/// [`analyze`] that never fails; the error is folded into the outcome
pub fn try_analyze(path: &Path) -> AnalysisOutcome {
    match analyze(path) {
        Ok(report) => AnalysisOutcome::Success(report),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Analysis failed");
            AnalysisOutcome::Failure {
                source: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    }
}

/// Path of the report for `solution`: `<output_dir>/<solution>.json`
///
/// The name must be a single plain file name component, so a report can
/// never land outside `output_dir`.
pub fn report_path(solution: &str, output_dir: &Path) -> Result<PathBuf, AnalysisError> {
    let mut components = Path::new(solution).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single || solution.contains(['/', '\\']) {
        return Err(AnalysisError::InvalidSolutionName {
            name: solution.to_string(),
        });
    }
    Ok(output_dir.join(format!("{solution}.json")))
}

/// Write `report` as pretty JSON to [`report_path`]
///
/// Creates `output_dir` when missing and replaces an existing report.
pub fn write_report(report: &AnalysisReport, output_dir: &Path) -> Result<PathBuf, AnalysisError> {
    let output_file = report_path(&report.solution, output_dir)?;

    std::fs::create_dir_all(output_dir).map_err(|e| AnalysisError::WriteFailed {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let json = serde_json::to_string_pretty(report).map_err(|e| AnalysisError::SerializeFailed {
        solution: report.solution.clone(),
        source: e,
    })?;

    std::fs::write(&output_file, json).map_err(|e| AnalysisError::WriteFailed {
        path: output_file.clone(),
        source: e,
    })?;

    debug!(path = %output_file.display(), "Wrote report");
    Ok(output_file)
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
