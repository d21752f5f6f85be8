//! Discovery, orchestration and write-if-absent output.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::GeneratorConfig;
use crate::descriptor::{MethodDescriptor, ServiceDescriptor};
use crate::error::GeneratorError;
use crate::idl::parse_idl_file;
use crate::naming::{method_file_name, CONTROLLER_FILE, MODULE_FILE};
use crate::templates::{render_controller, render_method, render_module};

/// Module-identity file expected in the project root.
pub const MODULE_FILE_NAME: &str = "go.mod";
/// Extension of discovered IDL files.
pub const IDL_EXTENSION: &str = "proto";

static MODULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^module\s+(\S+)").expect("invalid module regex"));

/// What happened to a single output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    /// Something already existed at the path and was left untouched.
    Skipped,
}

/// Summary of a generation run.
#[derive(Debug, Default, Clone)]
pub struct GenerationReport {
    /// Module path read from `go.mod`.
    pub module_path: String,
    /// IDL files that were parsed, in processing order.
    pub idl_files: Vec<PathBuf>,
    /// Number of services found across all files.
    pub services: usize,
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl GenerationReport {
    fn record(&mut self, path: PathBuf, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Created => self.created.push(path),
            WriteOutcome::Skipped => self.skipped.push(path),
        }
    }
}

/// Drives one generation pass over a project.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the whole pipeline: resolve the module, discover IDL files, then
    /// parse and emit every service in turn.
    ///
    /// The run stops at the first error. Files written before the failure
    /// stay on disk; a re-run skips them.
    pub fn run(&self) -> Result<GenerationReport, GeneratorError> {
        let module_path = resolve_module_path(&self.config.root)?;
        let api_dir = self.config.api_path();
        let output_dir = self.config.output_path();

        let mut report = GenerationReport {
            module_path,
            ..Default::default()
        };

        let files = discover_idl_files(&api_dir)?;
        if files.is_empty() {
            tracing::info!(dir = %api_dir.display(), "no .proto files found");
            return Ok(report);
        }

        for file in files {
            let services = parse_idl_file(&file)?;
            tracing::debug!(file = %file.display(), services = services.len(), "parsed IDL file");
            for svc in &services {
                self.generate_service(svc, &output_dir, &mut report)?;
            }
            report.services += services.len();
            report.idl_files.push(file);
        }

        tracing::info!(
            module = %report.module_path,
            created = report.created.len(),
            skipped = report.skipped.len(),
            "generation finished"
        );
        Ok(report)
    }

    fn generate_service(
        &self,
        svc: &ServiceDescriptor,
        output_dir: &Path,
        report: &mut GenerationReport,
    ) -> Result<(), GeneratorError> {
        let dir = output_dir.join(&svc.dir_name);
        fs::create_dir_all(&dir).map_err(|e| GeneratorError::io(&dir, e))?;

        let path = dir.join(CONTROLLER_FILE);
        let outcome = write_if_absent(&path, &render_controller(svc))?;
        report.record(path, outcome);

        let path = dir.join(MODULE_FILE);
        let outcome = write_if_absent(&path, &render_module(svc, self.config.server_package()))?;
        report.record(path, outcome);

        for (method, file_name) in plan_method_files(svc) {
            let path = dir.join(file_name);
            let outcome = write_if_absent(&path, &render_method(svc, method))?;
            report.record(path, outcome);
        }
        Ok(())
    }
}

/// Convenience wrapper around [`Generator::run`].
pub fn generate(config: GeneratorConfig) -> Result<GenerationReport, GeneratorError> {
    Generator::new(config).run()
}

/// Read the module path from `<root>/go.mod`.
pub fn resolve_module_path(root: &Path) -> Result<String, GeneratorError> {
    let path = root.join(MODULE_FILE_NAME);
    fs::read_to_string(&path)
        .ok()
        .and_then(|content| parse_module_path(&content))
        .ok_or(GeneratorError::ModuleRootMissing { path })
}

/// Extract `<path>` from the first `module <path>` line.
pub fn parse_module_path(content: &str) -> Option<String> {
    MODULE_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// List `<api_dir>/*/*.proto`, sorted. A missing directory yields nothing.
pub fn discover_idl_files(api_dir: &Path) -> Result<Vec<PathBuf>, GeneratorError> {
    let base = glob::Pattern::escape(&api_dir.to_string_lossy());
    let pattern = format!("{base}/*/*.{IDL_EXTENSION}");

    let mut files = Vec::new();
    for entry in glob::glob(&pattern).map_err(|e| GeneratorError::Glob(e.to_string()))? {
        match entry {
            Ok(path) => files.push(path),
            Err(e) => {
                let path = e.path().to_path_buf();
                return Err(GeneratorError::io(path, e.into_error()));
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Stub file for every method, in declaration order.
///
/// The first method claiming a file keeps it. A later method mapping to the
/// same file, or to one of the service files, is left out with a warning.
fn plan_method_files(svc: &ServiceDescriptor) -> Vec<(&MethodDescriptor, String)> {
    let mut owners: HashMap<String, &str> = HashMap::from([
        (CONTROLLER_FILE.to_string(), CONTROLLER_FILE),
        (MODULE_FILE.to_string(), MODULE_FILE),
    ]);
    let mut planned = Vec::with_capacity(svc.methods.len());

    for method in &svc.methods {
        let file = method_file_name(method);
        if let Some(owner) = owners.get(&file) {
            tracing::warn!(
                service = %svc.name,
                method = %method.name,
                owner = %owner,
                file = %file,
                "stub file already claimed by another method, skipping"
            );
            continue;
        }
        owners.insert(file.clone(), &method.name);
        planned.push((method, file));
    }
    planned
}

/// Create `path` with `content` unless something already exists there.
///
/// Existing files are never opened for writing, whatever their content.
pub fn write_if_absent(path: &Path, content: &str) -> Result<WriteOutcome, GeneratorError> {
    if fs::symlink_metadata(path).is_ok() {
        tracing::debug!(path = %path.display(), "exists, skipping");
        return Ok(WriteOutcome::Skipped);
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| GeneratorError::io(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| GeneratorError::io(path, e))?;

    tracing::info!(path = %path.display(), "created");
    Ok(WriteOutcome::Created)
}
