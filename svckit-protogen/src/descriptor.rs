use std::fmt;

use crate::naming;

/// HTTP verbs recognised in `google.api.http` annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpVerb {
    /// Lookup order used when scanning an annotation block.
    pub const ALL: [HttpVerb; 5] = [
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Put,
        HttpVerb::Patch,
        HttpVerb::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Patch => "patch",
            HttpVerb::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP route bound to an RPC through `google.api.http`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBinding {
    pub verb: HttpVerb,
    pub path: String,
}

/// One `rpc` declaration.
///
/// `request` and `response` are kept exactly as written: either a bare
/// message name from the service's own package or a dotted well-known name
/// such as `google.protobuf.Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    pub request: String,
    pub response: String,
    /// `None` when the method has no usable HTTP annotation.
    pub http: Option<HttpBinding>,
}

/// The `go_package` option of an IDL file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoPackage {
    /// Import path of the generated messages.
    pub path: String,
    /// Package name used in generated code.
    pub alias: String,
}

/// One `service` block together with the names derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub name: String,
    pub methods: Vec<MethodDescriptor>,
    pub package_path: String,
    pub package_alias: String,
    pub struct_name: String,
    pub dir_name: String,
}

impl ServiceDescriptor {
    pub fn new(name: &str, package: &GoPackage, methods: Vec<MethodDescriptor>) -> Self {
        Self {
            name: name.to_string(),
            methods,
            package_path: package.path.clone(),
            package_alias: package.alias.clone(),
            struct_name: naming::service_struct_name(name),
            dir_name: naming::service_dir_name(name),
        }
    }

    /// Import alias of the service's own messages, e.g. `userspb`.
    pub fn pb_alias(&self) -> String {
        format!("{}pb", self.package_alias)
    }
}
