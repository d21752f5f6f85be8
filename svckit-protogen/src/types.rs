//! Mapping of IDL type references to Go type expressions and imports.

use std::collections::BTreeSet;

use crate::descriptor::{MethodDescriptor, ServiceDescriptor};

/// Import root of the well-known protobuf types (`emptypb`, `timestamppb`, ...).
pub const WELL_KNOWN_IMPORT_ROOT: &str = "google.golang.org/protobuf/types/known";

/// A type reference resolved for generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Go expression without the pointer, e.g. `userspb.GetUserRequest`.
    pub expr: String,
    /// Extra import needed by `expr`; `None` for the service's own package.
    pub import: Option<String>,
}

impl ResolvedType {
    /// Whether the type lives in the service's own message package.
    pub fn is_local(&self) -> bool {
        self.import.is_none()
    }
}

/// Resolve `type_name` as referenced from a service whose messages are
/// imported under `{package_alias}pb`.
///
/// Dotted names are well-known types: only their last segment is kept and
/// the import alias is derived from it, never from `package_alias`, so
/// `google.protobuf.Empty` becomes `emptypb.Empty`.
pub fn format_type(package_alias: &str, type_name: &str) -> ResolvedType {
    match type_name.rsplit_once('.') {
        None => ResolvedType {
            expr: format!("{package_alias}pb.{type_name}"),
            import: None,
        },
        Some((_, bare)) => {
            let alias = format!("{}pb", bare.to_lowercase());
            ResolvedType {
                expr: format!("{alias}.{bare}"),
                import: Some(format!("{WELL_KNOWN_IMPORT_ROOT}/{alias}")),
            }
        }
    }
}

/// Resolved signature types of one method plus its deduplicated imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodTypes {
    pub request: ResolvedType,
    pub response: ResolvedType,
    /// Import lines (without the leading tab), sorted by path.
    pub imports: Vec<String>,
}

impl MethodTypes {
    pub fn resolve(svc: &ServiceDescriptor, method: &MethodDescriptor) -> Self {
        let request = format_type(&svc.package_alias, &method.request);
        let response = format_type(&svc.package_alias, &method.response);

        // Keyed by path so the order is stable and duplicates collapse.
        let mut by_path = BTreeSet::new();
        if request.is_local() || response.is_local() {
            by_path.insert((
                svc.package_path.clone(),
                format!("{} \"{}\"", svc.pb_alias(), svc.package_path),
            ));
        }
        for import in [&request.import, &response.import].into_iter().flatten() {
            by_path.insert((import.clone(), format!("\"{import}\"")));
        }

        Self {
            request,
            response,
            imports: by_path.into_iter().map(|(_, line)| line).collect(),
        }
    }
}
