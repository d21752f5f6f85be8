//! Command implementations for the `svckit` CLI.
//!
//! Each submodule corresponds to a top-level CLI command.

use std::path::PathBuf;

use svckit_protogen::{GeneratorConfig, GeneratorError};

/// Stub generation: `svckit generate`.
///
/// Walks `<api>/*/*.proto` and creates the files implied by every service
/// that do not exist yet. Existing files are never modified.
pub mod generate;

/// Route listing: `svckit routes`.
///
/// Parses the same `.proto` files as `generate` and prints every HTTP
/// binding together with the stub file it maps to.
pub mod routes;

/// Build the generator config for a command.
///
/// Layering: defaults, then `<root>/protogen.yaml`, then the CLI flags.
/// `root` defaults to the current directory.
pub(crate) fn load_config(
    root: Option<PathBuf>,
    api: Option<PathBuf>,
    output: Option<PathBuf>,
    server_pkg: Option<String>,
) -> Result<GeneratorConfig, GeneratorError> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir().map_err(|e| GeneratorError::Io {
            path: PathBuf::from("."),
            source: e,
        })?,
    };

    let mut config = GeneratorConfig::load(root)?;
    if let Some(api) = api {
        config = config.with_api_dir(api);
    }
    if let Some(output) = output {
        config = config.with_output_dir(output);
    }
    if let Some(pkg) = server_pkg {
        config = config.with_server_package(pkg);
    }
    tracing::debug!(
        root = %config.root.display(),
        api = %config.api_path().display(),
        output = %config.output_path().display(),
        server_pkg = config.server_package(),
        "resolved generator config"
    );
    Ok(config)
}
