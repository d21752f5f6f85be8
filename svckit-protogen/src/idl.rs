//! Pattern-based extraction of services, methods and routes from `.proto`
//! files.
//!
//! This is not a protobuf grammar. The supported subset is the
//! conventionally formatted one:
//!
//! - a single `option go_package = "<path>[;<alias>]";` line
//! - top-level `service <Name> { ... }` blocks, never nested
//! - `rpc <Name>(<Req>) returns (<Resp>)` declarations, optionally followed
//!   by an option block holding `option (google.api.http) = { <verb>: "<path>" }`
//!
//! Comments are not stripped, so a commented-out `rpc` line is still seen.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::descriptor::{GoPackage, HttpBinding, HttpVerb, MethodDescriptor, ServiceDescriptor};
use crate::error::GeneratorError;

static GO_PACKAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"option\s+go_package\s*=\s*"([^"]+)""#).expect("invalid go_package regex")
});

static SERVICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bservice\s+(\w+)\s*\{").expect("invalid service regex")
});

static RPC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\brpc\s+(\w+)\s*\(\s*([\w.]+)\s*\)\s*returns\s*\(\s*([\w.]+)\s*\)")
        .expect("invalid rpc regex")
});

/// One `<verb>: "<path>"` pattern per verb, in lookup order.
static VERB_RES: LazyLock<Vec<(HttpVerb, Regex)>> = LazyLock::new(|| {
    HttpVerb::ALL
        .iter()
        .map(|verb| {
            let re = Regex::new(&format!(r#"\b{}\s*:\s*"([^"]+)""#, verb.as_str()))
                .expect("invalid http verb regex");
            (*verb, re)
        })
        .collect()
});

const HTTP_OPTION_MARKER: &str = "google.api.http";

/// Extract the `go_package` option.
///
/// The alias is whatever follows the last `;`; without one it is the last
/// `/`-delimited segment of the path.
pub fn parse_go_package(content: &str) -> Option<GoPackage> {
    let raw = GO_PACKAGE_RE.captures(content)?.get(1)?.as_str();
    let (path, alias) = match raw.rsplit_once(';') {
        Some((path, alias)) => (path, alias),
        None => (raw, raw.rsplit('/').next().unwrap_or(raw)),
    };
    Some(GoPackage {
        path: path.to_string(),
        alias: alias.to_string(),
    })
}

/// Read and parse one IDL file.
pub fn parse_idl_file(path: &Path) -> Result<Vec<ServiceDescriptor>, GeneratorError> {
    let content = std::fs::read_to_string(path).map_err(|e| GeneratorError::io(path, e))?;
    parse_idl(&content, path)
}

/// Parse the text of one IDL file. `origin` is only used in errors and logs.
///
/// A file without services needs no `go_package`; once a service is found
/// the package identity is mandatory.
pub fn parse_idl(content: &str, origin: &Path) -> Result<Vec<ServiceDescriptor>, GeneratorError> {
    let openings: Vec<_> = SERVICE_RE.captures_iter(content).collect();
    if openings.is_empty() {
        tracing::debug!(file = %origin.display(), "no services declared");
        return Ok(Vec::new());
    }

    let package =
        parse_go_package(content).ok_or_else(|| GeneratorError::MissingPackageIdentity {
            path: origin.to_path_buf(),
        })?;

    let mut services = Vec::with_capacity(openings.len());
    for (i, caps) in openings.iter().enumerate() {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        // The body runs until the next service opening, or the end of file.
        let end = openings
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(content.len(), |m| m.start());
        let body = &content[whole.end()..end];

        let methods = parse_methods(body, name.as_str(), origin);
        tracing::debug!(
            file = %origin.display(),
            service = name.as_str(),
            methods = methods.len(),
            "parsed service"
        );
        services.push(ServiceDescriptor::new(name.as_str(), &package, methods));
    }
    Ok(services)
}

fn parse_methods(body: &str, service: &str, origin: &Path) -> Vec<MethodDescriptor> {
    let rpcs: Vec<_> = RPC_RE.captures_iter(body).collect();
    let mut methods = Vec::with_capacity(rpcs.len());

    for (i, caps) in rpcs.iter().enumerate() {
        let (Some(whole), Some(name), Some(request), Some(response)) =
            (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };
        let end = rpcs
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(body.len(), |m| m.start());

        let http = option_block(&body[whole.end()..end]).and_then(|block| {
            let binding = parse_http_binding(block);
            if binding.is_none() && block.contains(HTTP_OPTION_MARKER) {
                tracing::warn!(
                    file = %origin.display(),
                    service,
                    method = name.as_str(),
                    "google.api.http annotation has no recognised verb; generating a verb-less stub"
                );
            }
            binding
        });

        methods.push(MethodDescriptor {
            name: name.as_str().to_string(),
            request: request.as_str().to_string(),
            response: response.as_str().to_string(),
            http,
        });
    }
    methods
}

/// Find the first `<verb>: "<path>"` pair, trying verbs in [`HttpVerb::ALL`] order.
pub fn parse_http_binding(block: &str) -> Option<HttpBinding> {
    VERB_RES.iter().find_map(|(verb, re)| {
        re.captures(block)
            .and_then(|caps| caps.get(1))
            .map(|path| HttpBinding {
                verb: *verb,
                path: path.as_str().to_string(),
            })
    })
}

/// The `{ ... }` block directly following an rpc signature, if any.
///
/// Braces inside string literals are ignored. An unbalanced block extends to
/// the end of `tail`.
fn option_block(tail: &str) -> Option<&str> {
    let trimmed = tail.trim_start();
    if !trimmed.starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    let mut in_string = false;
    for (i, c) in trimmed.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&trimmed[..=i]);
                }
            }
            _ => {}
        }
    }
    Some(trimmed)
}
