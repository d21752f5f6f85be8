use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use svckit_cli::commands::generate::{self, GenerateOpts};
use tempfile::TempDir;

// ── CWD Guard ───────────────────────────────────────────────────────

struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    fn new(path: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(path).unwrap();
        CwdGuard { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

const PROTO: &str = r#"syntax = "proto3";

option go_package = "github.com/example/test/pkg/order;order";

service OrderService {
  rpc CreateOrder(CreateOrderRequest) returns (CreateOrderResponse) {
    option (google.api.http) = {
      post: "/api/v1/orders"
      body: "*"
    };
  }
  rpc Recalculate(RecalculateRequest) returns (RecalculateResponse);
}
"#;

fn setup_project(root: &Path, api_dir: &str) {
    fs::write(root.join("go.mod"), "module github.com/example/test\n\ngo 1.23\n").unwrap();
    let dir = root.join(api_dir).join("order");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("order.proto"), PROTO).unwrap();
}

// ── Defaults ────────────────────────────────────────────────────────

#[test]
#[serial]
fn generate_uses_current_directory_by_default() {
    let tmp = TempDir::new().unwrap();
    setup_project(tmp.path(), "api");
    let _cwd = CwdGuard::new(tmp.path());

    let report = generate::run(GenerateOpts::default()).unwrap();
    assert_eq!(report.created.len(), 4);

    let dir = tmp.path().join("internal/controller/order");
    assert!(dir.join("0_controller.go").exists());
    assert!(dir.join("0_module.go").exists());
    assert!(dir.join("api_v1_orders_post.go").exists());
    assert!(dir.join("recalculate.go").exists());
}

#[test]
#[serial]
fn generate_without_go_mod_fails() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());

    let err = generate::run(GenerateOpts::default()).unwrap_err();
    assert!(err.to_string().contains("go.mod"));
}

// ── Layering ────────────────────────────────────────────────────────

#[test]
fn generate_reads_protogen_yaml() {
    let tmp = TempDir::new().unwrap();
    setup_project(tmp.path(), "proto");
    fs::write(
        tmp.path().join("protogen.yaml"),
        "api: proto\noutput: internal/handlers\nserver-pkg: github.com/acme/platform/server\n",
    )
    .unwrap();

    generate::run(GenerateOpts {
        root: Some(tmp.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();

    let module =
        fs::read_to_string(tmp.path().join("internal/handlers/order/0_module.go")).unwrap();
    assert!(module.contains(r#""github.com/acme/platform/server""#));
}

#[test]
fn flags_override_protogen_yaml() {
    let tmp = TempDir::new().unwrap();
    setup_project(tmp.path(), "api");
    fs::write(
        tmp.path().join("protogen.yaml"),
        "output: internal/handlers\nserver-pkg: github.com/acme/platform/server\n",
    )
    .unwrap();

    generate::run(GenerateOpts {
        root: Some(tmp.path().to_path_buf()),
        output: Some(PathBuf::from("gen")),
        server_pkg: Some("github.com/flag/server".into()),
        ..Default::default()
    })
    .unwrap();

    assert!(!tmp.path().join("internal/handlers").exists());
    let module = fs::read_to_string(tmp.path().join("gen/order/0_module.go")).unwrap();
    assert!(module.contains(r#""github.com/flag/server""#));
    assert!(!module.contains("acme"));
}

#[test]
fn second_run_creates_nothing() {
    let tmp = TempDir::new().unwrap();
    setup_project(tmp.path(), "api");
    let opts = GenerateOpts {
        root: Some(tmp.path().to_path_buf()),
        ..Default::default()
    };

    generate::run(opts.clone()).unwrap();
    let report = generate::run(opts).unwrap();
    assert!(report.created.is_empty());
    assert_eq!(report.skipped.len(), 4);
}

#[test]
fn empty_api_dir_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("go.mod"), "module github.com/example/test\n").unwrap();

    let report = generate::run(GenerateOpts {
        root: Some(tmp.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();
    assert!(report.idl_files.is_empty());
}
