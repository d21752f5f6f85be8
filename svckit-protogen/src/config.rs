use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::GeneratorError;

/// Directory scanned for `<service>/<file>.proto`, relative to the root.
pub const DEFAULT_API_DIR: &str = "api";
/// Directory receiving one sub-directory per service, relative to the root.
pub const DEFAULT_OUTPUT_DIR: &str = "internal/controller";
/// Import path of the composition root referenced by every `0_module.go`.
pub const DEFAULT_SERVER_PACKAGE: &str = "github.com/vovanwin/platform/server";
/// Optional per-project overrides, looked up in the root.
pub const CONFIG_FILE: &str = "protogen.yaml";

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Project root, the directory holding `go.mod`.
    pub root: PathBuf,
    /// IDL directory; relative paths are resolved against `root`.
    pub api_dir: PathBuf,
    /// Output directory; relative paths are resolved against `root`.
    pub output_dir: PathBuf,
    /// Composition-root import path. `None` or empty means the default.
    pub server_package: Option<String>,
}

/// Shape of `protogen.yaml`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct FileConfig {
    api: Option<PathBuf>,
    output: Option<PathBuf>,
    server_pkg: Option<String>,
}

impl GeneratorConfig {
    /// Create a config rooted at `root` with default directories.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            api_dir: PathBuf::from(DEFAULT_API_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            server_package: None,
        }
    }

    /// Defaults overlaid with `<root>/protogen.yaml` when that file exists.
    ///
    /// ```yaml
    /// api: proto
    /// output: internal/handlers
    /// server-pkg: github.com/acme/platform/server
    /// ```
    pub fn load(root: impl Into<PathBuf>) -> Result<Self, GeneratorError> {
        let mut config = Self::new(root);
        let path = config.root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(config);
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| GeneratorError::io(&path, e))?;
        let file = parse_file_config(&content)
            .map_err(|e| GeneratorError::Config(format!("{}: {e}", path.display())))?;

        if let Some(api) = file.api {
            config.api_dir = api;
        }
        if let Some(output) = file.output {
            config.output_dir = output;
        }
        if file.server_pkg.is_some() {
            config.server_package = file.server_pkg;
        }
        tracing::debug!(path = %path.display(), "loaded generator config");
        Ok(config)
    }

    pub fn with_api_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.api_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_server_package(mut self, package: impl Into<String>) -> Self {
        self.server_package = Some(package.into());
        self
    }

    /// Absolute IDL directory.
    pub fn api_path(&self) -> PathBuf {
        resolve(&self.root, &self.api_dir)
    }

    /// Absolute output directory.
    pub fn output_path(&self) -> PathBuf {
        resolve(&self.root, &self.output_dir)
    }

    /// Composition-root import path, falling back to [`DEFAULT_SERVER_PACKAGE`].
    pub fn server_package(&self) -> &str {
        match self.server_package.as_deref() {
            Some(pkg) if !pkg.is_empty() => pkg,
            _ => DEFAULT_SERVER_PACKAGE,
        }
    }
}

fn parse_file_config(content: &str) -> Result<FileConfig, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yaml::from_str(content)
}

fn resolve(root: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}
