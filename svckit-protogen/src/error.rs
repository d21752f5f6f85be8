use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation run.
///
/// There is no partial-success mode: the first error stops the run and the
/// tool is expected to be re-run once the underlying fault is fixed.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// No `go.mod` under the root, or it has no `module` line.
    #[error("could not parse module path from go.mod at '{}'", .path.display())]
    ModuleRootMissing { path: PathBuf },

    /// An IDL file declares services but no `option go_package`.
    #[error("go_package option not found in '{}'", .path.display())]
    MissingPackageIdentity { path: PathBuf },

    /// Reading, creating a directory or writing a file failed.
    #[error("I/O error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The discovery pattern could not be compiled.
    #[error("invalid IDL glob pattern: {0}")]
    Glob(String),

    /// `protogen.yaml` exists but cannot be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GeneratorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }
}
