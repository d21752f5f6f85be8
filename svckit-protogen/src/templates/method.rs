use super::render;
use crate::descriptor::{MethodDescriptor, ServiceDescriptor};
use crate::types::MethodTypes;

const TEMPLATE: &str = r#"package {{package}}

import (
	"context"

{{imports}})

func (s *{{struct}}) {{method}}(_ context.Context, req *{{request}}) (*{{response}}, error) {
	// TODO: implement
	panic("not implemented")
}
"#;

/// Render one handler stub.
///
/// The body panics with "not implemented" until a developer fills it in.
/// The service's own message package is imported only when the request or
/// response actually lives there.
pub fn render_method(svc: &ServiceDescriptor, method: &MethodDescriptor) -> String {
    let types = MethodTypes::resolve(svc, method);
    let imports: String = types
        .imports
        .iter()
        .map(|line| format!("\t{line}\n"))
        .collect();

    render(
        TEMPLATE,
        &[
            ("package", svc.dir_name.as_str()),
            ("imports", imports.as_str()),
            ("struct", svc.struct_name.as_str()),
            ("method", method.name.as_str()),
            ("request", types.request.expr.as_str()),
            ("response", types.response.expr.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{GoPackage, HttpBinding, HttpVerb};

    fn gate_service() -> ServiceDescriptor {
        ServiceDescriptor::new(
            "GateService",
            &GoPackage {
                path: "github.com/vovanwin/gate/pkg/gate".into(),
                alias: "gate".into(),
            },
            Vec::new(),
        )
    }

    fn method(
        name: &str,
        request: &str,
        response: &str,
        verb: HttpVerb,
        path: &str,
    ) -> MethodDescriptor {
        MethodDescriptor {
            name: name.into(),
            request: request.into(),
            response: response.into(),
            http: Some(HttpBinding {
                verb,
                path: path.into(),
            }),
        }
    }

    #[test]
    fn simple_types_exact_output() {
        let svc = ServiceDescriptor::new(
            "UserService",
            &GoPackage {
                path: "github.com/example/pkg/users".into(),
                alias: "users".into(),
            },
            Vec::new(),
        );
        let m = method(
            "GetUser",
            "GetUserRequest",
            "GetUserResponse",
            HttpVerb::Get,
            "/api/v1/users/{id}",
        );

        let want = r#"package user

import (
	"context"

	userspb "github.com/example/pkg/users"
)

func (s *UserGRPCServer) GetUser(_ context.Context, req *userspb.GetUserRequest) (*userspb.GetUserResponse, error) {
	// TODO: implement
	panic("not implemented")
}
"#;
        assert_eq!(render_method(&svc, &m), want);
    }

    #[test]
    fn request_well_known() {
        let m = method(
            "GetLinkedAccounts",
            "google.protobuf.Empty",
            "LinkedAccountsResponse",
            HttpVerb::Get,
            "/api/v1/account/links",
        );
        let got = render_method(&gate_service(), &m);

        for s in [
            "req *emptypb.Empty",
            r#""google.golang.org/protobuf/types/known/emptypb""#,
            "*gatepb.LinkedAccountsResponse",
        ] {
            assert!(got.contains(s), "missing {s:?}\n\ngot:\n{got}");
        }
        assert!(!got.contains("gatepb.google.protobuf.Empty"), "got:\n{got}");
    }

    #[test]
    fn both_well_known() {
        let m = method(
            "Logout",
            "google.protobuf.Empty",
            "google.protobuf.Empty",
            HttpVerb::Post,
            "/api/v1/auth/logout",
        );
        let got = render_method(&gate_service(), &m);

        assert!(got.contains("(*emptypb.Empty, error)"), "got:\n{got}");
        assert!(!got.contains("gatepb"), "got:\n{got}");
        assert_eq!(got.matches("types/known/emptypb").count(), 1, "got:\n{got}");
    }

    #[test]
    fn response_well_known() {
        let m = method(
            "RevokeSession",
            "RevokeSessionRequest",
            "google.protobuf.Empty",
            HttpVerb::Delete,
            "/api/v1/sessions/{session_id}",
        );
        let got = render_method(&gate_service(), &m);

        for s in [
            "*gatepb.RevokeSessionRequest",
            "*emptypb.Empty",
            r#""google.golang.org/protobuf/types/known/emptypb""#,
            r#"gatepb "github.com/vovanwin/gate/pkg/gate""#,
        ] {
            assert!(got.contains(s), "missing {s:?}\n\ngot:\n{got}");
        }
    }

    #[test]
    fn body_never_succeeds() {
        let m = method("Ping", "Req", "Resp", HttpVerb::Get, "/ping");
        let got = render_method(&gate_service(), &m);
        assert!(got.contains(r#"panic("not implemented")"#));
        assert!(!got.contains("return &"));
    }
}
