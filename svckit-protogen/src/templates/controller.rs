use super::render;
use crate::descriptor::ServiceDescriptor;

const TEMPLATE: &str = r#"package {{package}}

import (
	"log/slog"

	{{pb_alias}} "{{pb_path}}"
	"go.uber.org/fx"
)

// Deps holds the dependencies of {{struct}}.
type Deps struct {
	fx.In

	Log *slog.Logger
}

// {{struct}} implements the {{service}} gRPC service.
type {{struct}} struct {
	{{pb_alias}}.Unimplemented{{service}}Server
	log *slog.Logger
}

// New{{struct}} creates a {{struct}}.
func New{{struct}}(deps Deps) *{{struct}} {
	return &{{struct}}{log: deps.Log}
}
"#;

/// Render `0_controller.go`: the dependency bundle, the server struct
/// embedding `Unimplemented<Service>Server`, and its constructor.
pub fn render_controller(svc: &ServiceDescriptor) -> String {
    let pb_alias = svc.pb_alias();
    render(
        TEMPLATE,
        &[
            ("package", svc.dir_name.as_str()),
            ("pb_alias", pb_alias.as_str()),
            ("pb_path", svc.package_path.as_str()),
            ("struct", svc.struct_name.as_str()),
            ("service", svc.name.as_str()),
        ],
    )
}
