use colored::Colorize;
use std::path::{Path, PathBuf};

use svckit_protogen::{GenerationReport, Generator};

/// Raw CLI flags for `svckit generate`.
#[derive(Debug, Default, Clone)]
pub struct GenerateOpts {
    pub root: Option<PathBuf>,
    pub api: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub server_pkg: Option<String>,
}

/// Generate missing controller files.
///
/// Prints one line per created file and a summary. Files that already exist
/// are counted as skipped and left untouched.
pub fn run(opts: GenerateOpts) -> Result<GenerationReport, Box<dyn std::error::Error>> {
    let config = super::load_config(opts.root, opts.api, opts.output, opts.server_pkg)?;
    let generator = Generator::new(config);
    let report = generator.run()?;

    if report.idl_files.is_empty() {
        println!(
            "{} no .proto files found in {}",
            "!".yellow(),
            generator.config().api_path().display()
        );
        return Ok(report);
    }

    let root = &generator.config().root;
    for path in &report.created {
        println!("{} created {}", "✓".green(), display_relative(root, path).cyan());
    }

    println!(
        "{} {} created, {} already present ({} services in {} files)",
        "done:".bold(),
        report.created.len(),
        report.skipped.len(),
        report.services,
        report.idl_files.len()
    );

    Ok(report)
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
