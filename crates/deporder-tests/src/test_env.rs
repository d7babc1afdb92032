//! Isolated environment for E2E tests
//!
//! Each [`TestEnvironment`] owns a temporary working directory and an
//! [`AppConfig`] pointing at it, and runs commands in-process against a
//! captured buffer.

use crate::fixtures::{Scenario, write_manifest};
use anyhow::Result;
use deporder_lib::application::cli::Commands;
use deporder_lib::application::commands::execute_command_with_output;
use deporder_lib::application::config::AppConfig;
use deporder_lib::project::{ManifestFormat, ProjectManifest};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnvironment {
    temp_dir: TempDir,
    config: AppConfig,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let config = AppConfig {
            workdir: Some(temp_dir.path().to_path_buf()),
            ..AppConfig::default()
        };
        Ok(Self { temp_dir, config })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Write a scenario as `<relative_dir>/<solution>.deps.<ext>`
    pub fn with_scenario(
        &self,
        relative_dir: &str,
        solution: &str,
        scenario: Scenario,
        format: ManifestFormat,
    ) -> Result<PathBuf> {
        self.with_manifest(relative_dir, solution, &scenario.manifest(), format)
    }

    pub fn with_manifest(
        &self,
        relative_dir: &str,
        solution: &str,
        manifest: &ProjectManifest,
        format: ManifestFormat,
    ) -> Result<PathBuf> {
        write_manifest(&self.root().join(relative_dir), solution, manifest, format)
    }

    /// Write arbitrary content relative to the root
    pub fn with_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Run a command and return everything it wrote
    pub fn run(&self, command: Commands) -> Result<String> {
        let mut buffer = Vec::new();
        execute_command_with_output(command, &self.config, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Output split into lines, for order-sensitive assertions
    pub fn run_lines(&self, command: Commands) -> Result<Vec<String>> {
        Ok(self.run(command)?.lines().map(str::to_string).collect())
    }
}
