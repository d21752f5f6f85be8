use colored::Colorize;
use std::path::{Path, PathBuf};

use svckit_protogen::generator::discover_idl_files;
use svckit_protogen::naming::method_file_name;
use svckit_protogen::{parse_idl_file, GeneratorError, HttpVerb};

/// One RPC as seen from the HTTP side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// `None` for methods without a `google.api.http` binding.
    pub verb: Option<HttpVerb>,
    pub path: Option<String>,
    pub service: String,
    pub method: String,
    /// Stub file the method is generated into, relative to the service dir.
    pub stub: String,
    /// Proto file declaring the method.
    pub file: String,
}

/// Raw CLI flags for `svckit routes`.
#[derive(Debug, Default, Clone)]
pub struct RoutesOpts {
    pub root: Option<PathBuf>,
    pub api: Option<PathBuf>,
}

/// List declared routes.
///
/// Bound routes are printed sorted by path then verb, followed by the
/// methods reachable over gRPC only.
pub fn run(opts: RoutesOpts) -> Result<Vec<Route>, Box<dyn std::error::Error>> {
    let config = super::load_config(opts.root, opts.api, None, None)?;
    let routes = collect_routes(&config.api_path())?;

    if routes.is_empty() {
        println!("{}", "No routes found.".dimmed());
        return Ok(routes);
    }

    let (bound, unbound): (Vec<&Route>, Vec<&Route>) =
        routes.iter().partition(|r| r.verb.is_some());

    if !bound.is_empty() {
        println!("{}", "Declared routes:".bold());
        println!();
        println!(
            "  {:<8} {:<40} {:<35} {}",
            "METHOD".dimmed(),
            "PATH".dimmed(),
            "HANDLER".dimmed(),
            "STUB".dimmed()
        );
        println!("  {}", "-".repeat(100).dimmed());

        for route in &bound {
            let verb = route.verb.map(|v| v.as_str().to_uppercase()).unwrap_or_default();
            let verb_colored = match route.verb {
                Some(HttpVerb::Get) => verb.green(),
                Some(HttpVerb::Post) => verb.blue(),
                Some(HttpVerb::Put) => verb.yellow(),
                Some(HttpVerb::Delete) => verb.red(),
                Some(HttpVerb::Patch) => verb.magenta(),
                None => verb.normal(),
            };
            println!(
                "  {:<8} {:<40} {:<35} {}",
                verb_colored,
                route.path.as_deref().unwrap_or(""),
                format!("{}.{}", route.service, route.method),
                route.stub,
            );
        }
        println!();
    }

    if !unbound.is_empty() {
        println!("{}", "gRPC only:".bold());
        for route in &unbound {
            println!(
                "  {:<48} {:<35} {}",
                route.file.as_str().dimmed(),
                format!("{}.{}", route.service, route.method),
                route.stub,
            );
        }
        println!();
    }

    println!(
        "  {} routes, {} gRPC-only methods",
        bound.len(),
        unbound.len()
    );

    Ok(routes)
}

/// Parse every IDL file under `api_dir` and flatten its methods into routes.
pub fn collect_routes(api_dir: &Path) -> Result<Vec<Route>, GeneratorError> {
    let mut routes = Vec::new();

    for file in discover_idl_files(api_dir)? {
        let file_name = file
            .strip_prefix(api_dir)
            .unwrap_or(&file)
            .display()
            .to_string();

        for svc in parse_idl_file(&file)? {
            for method in &svc.methods {
                routes.push(Route {
                    verb: method.http.as_ref().map(|b| b.verb),
                    path: method.http.as_ref().map(|b| b.path.clone()),
                    service: svc.name.clone(),
                    method: method.name.clone(),
                    stub: format!("{}/{}", svc.dir_name, method_file_name(method)),
                    file: file_name.clone(),
                });
            }
        }
    }

    // Bound routes first (None sorts before Some, so compare on presence).
    routes.sort_by(|a, b| {
        b.verb
            .is_some()
            .cmp(&a.verb.is_some())
            .then_with(|| a.path.cmp(&b.path))
            .then_with(|| a.verb.cmp(&b.verb))
            .then_with(|| a.service.cmp(&b.service))
            .then_with(|| a.method.cmp(&b.method))
    });
    Ok(routes)
}
