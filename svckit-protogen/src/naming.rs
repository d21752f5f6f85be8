//! Deterministic identifiers derived from service, method and route names.
//!
//! Everything here is a pure string transform.

use crate::descriptor::MethodDescriptor;

/// Service shell file. The `0_` prefix sorts it before method files.
pub const CONTROLLER_FILE: &str = "0_controller.go";
/// Wiring module file, sorted right after [`CONTROLLER_FILE`].
pub const MODULE_FILE: &str = "0_module.go";

/// Conventional suffix stripped from service names.
const SERVICE_SUFFIX: &str = "Service";
/// Suffix of the generated server struct.
const STRUCT_SUFFIX: &str = "GRPCServer";

/// Convert CamelCase to snake_case.
///
/// Every uppercase letter except the first character gets a preceding
/// underscore, so acronyms are split letter by letter:
/// `OAuthURL` becomes `o_auth_u_r_l`.
pub fn camel_to_snake(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Turn a route path into a file name stem.
///
/// Empty segments and `{param}` segments are dropped, the literal ones are
/// joined with `_`. A path made only of parameters gives an empty stem.
pub fn http_path_to_file_stem(path: &str) -> String {
    path.split('/')
        .filter(|seg| !seg.is_empty())
        .filter(|seg| !(seg.starts_with('{') && seg.ends_with('}')))
        .collect::<Vec<_>>()
        .join("_")
}

/// File name of a method stub.
///
/// With an HTTP binding the verb is appended to the route stem so that two
/// verbs on one path never collide; without one the snake-cased method name
/// is used. A route stem starting with a character that sorts before `0`
/// (`/.well-known/...`, `/-/healthz`) gets that character replaced by `_`,
/// keeping the service files first in a directory listing.
pub fn method_file_name(method: &MethodDescriptor) -> String {
    match &method.http {
        Some(binding) => format!(
            "{}_{}.go",
            sortable_stem(http_path_to_file_stem(&binding.path)),
            binding.verb
        ),
        None => format!("{}.go", camel_to_snake(&method.name)),
    }
}

fn sortable_stem(mut stem: String) -> String {
    if let Some(first) = stem.chars().next() {
        if first < '0' {
            stem.replace_range(..first.len_utf8(), "_");
        }
    }
    stem
}

fn strip_service_suffix(name: &str) -> &str {
    match name.strip_suffix(SERVICE_SUFFIX) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => name,
    }
}

/// Output directory (and Go package) name: `UserService` -> `user`.
pub fn service_dir_name(service_name: &str) -> String {
    strip_service_suffix(service_name).to_lowercase()
}

/// Generated struct name: `UserService` -> `UserGRPCServer`.
pub fn service_struct_name(service_name: &str) -> String {
    format!("{}{STRUCT_SUFFIX}", strip_service_suffix(service_name))
}
