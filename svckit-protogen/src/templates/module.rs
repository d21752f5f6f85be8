use super::render;
use crate::descriptor::ServiceDescriptor;

const TEMPLATE: &str = r#"package {{package}}

import (
	"context"

	"{{server_pkg}}"
	{{pb_alias}} "{{pb_path}}"

	"github.com/grpc-ecosystem/grpc-gateway/v2/runtime"
	"go.uber.org/fx"
	"google.golang.org/grpc"
)

// Module wires {{service}} into the gRPC server and the HTTP gateway.
func Module() fx.Option {
	return fx.Options(
		fx.Provide(New{{struct}}),
		fx.Provide(
			fx.Annotate(
				func(srv *{{struct}}) server.GRPCRegistrator {
					return func(s *grpc.Server) {
						{{pb_alias}}.Register{{service}}Server(s, srv)
					}
				},
				fx.ResultTags(`group:"grpc_registrators"`),
			),
		),
		fx.Provide(
			fx.Annotate(
				func(srv *{{struct}}) server.GatewayRegistrator {
					return func(ctx context.Context, mux *runtime.ServeMux, _ *grpc.Server) error {
						return {{pb_alias}}.Register{{service}}HandlerServer(ctx, mux, srv)
					}
				},
				fx.ResultTags(`group:"gateway_registrators"`),
			),
		),
	)
}
"#;

/// Render `0_module.go`: an `fx` module that provides the constructor and
/// contributes gRPC and gateway registrators to the tagged groups collected
/// by the composition root at `server_pkg`.
pub fn render_module(svc: &ServiceDescriptor, server_pkg: &str) -> String {
    let pb_alias = svc.pb_alias();
    render(
        TEMPLATE,
        &[
            ("package", svc.dir_name.as_str()),
            ("server_pkg", server_pkg),
            ("pb_alias", pb_alias.as_str()),
            ("pb_path", svc.package_path.as_str()),
            ("struct", svc.struct_name.as_str()),
            ("service", svc.name.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::GoPackage;

    fn service(name: &str, path: &str, alias: &str) -> ServiceDescriptor {
        ServiceDescriptor::new(
            name,
            &GoPackage {
                path: path.into(),
                alias: alias.into(),
            },
            Vec::new(),
        )
    }

    #[test]
    fn user_service_module() {
        let svc = service("UserService", "github.com/example/pkg/users", "users");
        let got = render_module(&svc, "github.com/vovanwin/platform/server");

        let must_contain = [
            "package user",
            r#""context""#,
            r#""github.com/vovanwin/platform/server""#,
            r#"userspb "github.com/example/pkg/users""#,
            "func Module() fx.Option {",
            "fx.Provide(NewUserGRPCServer)",
            "func(srv *UserGRPCServer) server.GRPCRegistrator {",
            "userspb.RegisterUserServiceServer(s, srv)",
            "userspb.RegisterUserServiceHandlerServer(ctx, mux, srv)",
            "fx.ResultTags(`group:\"grpc_registrators\"`)",
            "fx.ResultTags(`group:\"gateway_registrators\"`)",
        ];
        for s in must_contain {
            assert!(got.contains(s), "missing {s:?}\n\ngot:\n{got}");
        }
    }

    #[test]
    fn custom_server_package() {
        let svc = service("GateService", "github.com/example/pkg/gate", "gate");
        let got = render_module(&svc, "github.com/custom/server");
        assert!(got.contains(r#""github.com/custom/server""#), "got:\n{got}");
        assert!(!got.contains("vovanwin/platform"));
    }
}
