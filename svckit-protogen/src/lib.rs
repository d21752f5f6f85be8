//! # svckit-protogen
//!
//! Generates Go gRPC controller skeletons from `.proto` service definitions.
//!
//! For every `service` found under `<api>/*/*.proto` the generator creates a
//! directory `<output>/<dir>` with:
//!
//! | File | Content |
//! |------|---------|
//! | `0_controller.go` | dependency bundle, server struct, constructor |
//! | `0_module.go` | `fx` module registering the gRPC and gateway handlers |
//! | `<route>_<verb>.go` / `<method>.go` | one not-implemented handler per RPC |
//!
//! Files are only ever created, never overwritten: once a stub exists it
//! belongs to the developer, and re-running the generator after adding new
//! RPCs only adds the missing files.
//!
//! ```ignore
//! use svckit_protogen::{generate, GeneratorConfig};
//!
//! let report = generate(GeneratorConfig::new(".").with_output_dir("internal/handlers"))?;
//! println!("{} files created", report.created.len());
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod idl;
pub mod naming;
pub mod templates;
pub mod types;

pub use config::GeneratorConfig;
pub use descriptor::{GoPackage, HttpBinding, HttpVerb, MethodDescriptor, ServiceDescriptor};
pub use error::GeneratorError;
pub use generator::{generate, GenerationReport, Generator, WriteOutcome};
pub use idl::{parse_idl, parse_idl_file};
