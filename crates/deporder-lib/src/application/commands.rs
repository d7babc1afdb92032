//! Command dispatch and handlers
//!
//! Handlers write through a [`StatusDisplay`] so the same code drives the
//! binary (stdout) and in-process tests (a buffer).

use crate::analysis::{self, AnalysisOutcome, OUTPUT_FOLDER};
use crate::display::StatusDisplay;
use crate::primitives::LogContext;
use crate::project::{Project, ProjectManifest};
use crate::resolver::{DependencyGraph, ResolveError, order_projects, reverse_lookup_projects};
use crate::{log_info, log_warn, progress_span};
use anyhow::{Context, Result, anyhow};
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use super::cli::{CliConfig, Commands};
use super::config::AppConfig;

/// Execute a parsed command line against stdout
pub fn execute_command(config: CliConfig) -> Result<()> {
    let is_terminal = console::Term::stdout().is_term();
    let colors = config.app_config.color.enabled(is_terminal);
    console::set_colors_enabled(colors);
    console::set_colors_enabled_stderr(colors);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut display = StatusDisplay::new(&mut out, config.app_config.styling(is_terminal));

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            display.message("deporder - dependency ordering for project graphs")?;
            display.subtle("Run 'deporder --help' for usage information")?;
            return Ok(());
        }
    };

    execute_command_with_display(command, &config.app_config, &mut display)
}

/// Execute a command, writing uncoloured output to `out`
pub fn execute_command_with_output(
    command: Commands,
    config: &AppConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let mut display = StatusDisplay::new(out, config.styling(false));
    execute_command_with_display(command, config, &mut display)
}

/// Execute a command with a caller-provided display
pub fn execute_command_with_display(
    command: Commands,
    config: &AppConfig,
    display: &mut StatusDisplay<'_>,
) -> Result<()> {
    match command {
        Commands::Order { manifest, json } => handle_order(display, config, &manifest, json),
        Commands::Reverse {
            manifest,
            key,
            json,
        } => handle_reverse(display, config, &manifest, key.as_deref(), json),
        Commands::Deps {
            manifest,
            name,
            transitive,
        } => handle_deps(display, config, &manifest, &name, transitive),
        Commands::Dependents {
            manifest,
            name,
            transitive,
        } => handle_dependents(display, config, &manifest, &name, transitive),
        Commands::Analyze { path, output } => {
            handle_analyze(display, config, &path, output.as_deref())
        }
        Commands::Version => handle_version(display),
    }
}

fn load_projects(config: &AppConfig, manifest: &Path) -> Result<Vec<Project>> {
    let path = config.resolve_path(manifest);
    let manifest = ProjectManifest::load(&path)
        .with_context(|| format!("Failed to load manifest {}", path.display()))?;
    Ok(manifest.projects)
}

/// Cycle errors carry their path: `Circular reference found: A (A → D → A)`
fn resolve_failure(error: ResolveError<String>) -> anyhow::Error {
    let path = error.cycle_path();
    if path.is_empty() {
        anyhow!(error)
    } else {
        let chain = path.join(" → ");
        anyhow!("{error} ({chain})")
    }
}

fn handle_order(
    display: &mut StatusDisplay<'_>,
    config: &AppConfig,
    manifest: &Path,
    json: bool,
) -> Result<()> {
    let projects = load_projects(config, manifest)?;
    let order = order_projects(&projects).map_err(resolve_failure)?;
    info!(
        valid = order.valid.len(),
        invalid = order.invalid.len(),
        "Ordered projects"
    );

    if json {
        display.message(&serde_json::to_string_pretty(&order)?)?;
        return Ok(());
    }

    for key in &order.valid {
        display.message(key)?;
    }
    for key in &order.invalid {
        display.warning(&format!("Unrecognized reference: {key}"))?;
    }
    Ok(())
}

fn handle_reverse(
    display: &mut StatusDisplay<'_>,
    config: &AppConfig,
    manifest: &Path,
    key: Option<&str>,
    json: bool,
) -> Result<()> {
    let projects = load_projects(config, manifest)?;
    let index = reverse_lookup_projects(&projects);

    match key {
        Some(key) => {
            let dependents = index.get(&key.to_string()).unwrap_or_default();
            if json {
                display.message(&serde_json::to_string_pretty(dependents)?)?;
            } else if dependents.is_empty() {
                display.info(&format!("Nothing depends on {key}"))?;
            } else {
                for dependent in dependents {
                    display.message(dependent)?;
                }
            }
        }
        None => {
            if json {
                display.message(&serde_json::to_string_pretty(&index)?)?;
            } else {
                for (dependency, dependents) in index.iter() {
                    display.emphasis(dependency)?;
                    display.list(dependents)?;
                }
            }
        }
    }
    Ok(())
}

fn load_graph(config: &AppConfig, manifest: &Path) -> Result<DependencyGraph<String>> {
    let projects = load_projects(config, manifest)?;
    DependencyGraph::from_items(&projects, Project::key, Project::dependencies)
        .map_err(resolve_failure)
}

fn handle_deps(
    display: &mut StatusDisplay<'_>,
    config: &AppConfig,
    manifest: &Path,
    name: &str,
    transitive: bool,
) -> Result<()> {
    let graph = load_graph(config, manifest)?;
    let key = name.to_string();
    let dependencies = if transitive {
        graph.transitive_dependencies(&key)
    } else {
        graph.dependencies(&key)
    }
    .ok_or_else(|| anyhow!("Unknown project: {name}"))?;

    for dependency in &dependencies {
        display.message(dependency)?;
    }
    Ok(())
}

fn handle_dependents(
    display: &mut StatusDisplay<'_>,
    config: &AppConfig,
    manifest: &Path,
    name: &str,
    transitive: bool,
) -> Result<()> {
    let graph = load_graph(config, manifest)?;
    let key = name.to_string();
    let dependents = if transitive {
        graph.transitive_dependents(&key)
    } else {
        graph.dependents(&key)
    }
    .ok_or_else(|| anyhow!("Unknown project: {name}"))?;

    for dependent in &dependents {
        display.message(dependent)?;
    }
    Ok(())
}

fn handle_analyze(
    display: &mut StatusDisplay<'_>,
    config: &AppConfig,
    path: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let root = config.resolve_path(path);
    let manifests = analysis::discover_manifests(&root)?;
    let output_dir: PathBuf = match output {
        Some(dir) => config.resolve_path(dir),
        None => root.join(OUTPUT_FOLDER),
    };
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output folder {}", output_dir.display()))?;

    if manifests.is_empty() {
        display.warning(&format!("No manifests found under {}", root.display()))?;
        return Ok(());
    }

    let total = manifests.len() as u64;
    let span = progress_span!("analyze", total = total);
    let style = indicatif::ProgressStyle::with_template(
        "{spinner:.green} {msg} [{wide_bar:.cyan/blue}] {pos}/{len}",
    )
    .context("Invalid progress template")?;
    span.pb_set_style(&style);
    span.pb_set_length(total);
    span.pb_set_message("Analyzing");
    let _guard = span.enter();

    let mut context = LogContext::with_progress("analyze", total);
    let mut failed = 0usize;
    // report path -> manifest that produced it
    let mut written: HashMap<PathBuf, PathBuf> = HashMap::new();

    for (position, manifest) in manifests.iter().enumerate() {
        let shown = manifest.strip_prefix(&root).unwrap_or(manifest.as_path());
        display.working(&format!("Analyzing {}", shown.display()))?;
        context.set_progress(position as u64 + 1);
        log_info!(&format!("Analyzing {}", manifest.display()), context);

        let report = match analysis::try_analyze(manifest) {
            AnalysisOutcome::Success(report) => report,
            AnalysisOutcome::Failure { source, message } => {
                failed += 1;
                display.error(&source.display().to_string(), &message)?;
                span.pb_inc(1);
                continue;
            }
        };

        let outcome = analysis::report_path(&report.solution, &output_dir)
            .map_err(anyhow::Error::from)
            .and_then(|target| match written.get(&target) {
                Some(first) => {
                    let first = first.strip_prefix(&root).unwrap_or(first.as_path());
                    Err(anyhow!(
                        "Report {} already written for {}",
                        target.display(),
                        first.display()
                    ))
                }
                None => Ok(analysis::write_report(&report, &output_dir)?),
            });

        match outcome {
            Ok(target) => {
                let details = format!(
                    "{} projects, {} unrecognized -> {}",
                    report.order.valid.len(),
                    report.order.invalid.len(),
                    target.display()
                );
                display.success(&report.solution, &details)?;
                written.insert(target, manifest.clone());
            }
            Err(e) => {
                failed += 1;
                log_warn!(&e.to_string(), context);
                display.error(&report.solution, &e.to_string())?;
            }
        }

        span.pb_inc(1);
    }

    let succeeded = manifests.len() - failed;
    display.info(&format!(
        "{succeeded} analyzed, {failed} failed, reports in {}",
        output_dir.display()
    ))?;
    Ok(())
}

fn handle_version(display: &mut StatusDisplay<'_>) -> Result<()> {
    display.emphasis(&format!("deporder {}", env!("CARGO_PKG_VERSION")))?;
    display.message("Build order and reverse dependencies for project manifests")?;
    display.subtle(&format!("Target: {}", std::env::consts::ARCH))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
