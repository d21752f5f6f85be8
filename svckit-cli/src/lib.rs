//! # svckit-cli
//!
//! Command-line front-end for [`svckit_protogen`].
//!
//! | Command | Description |
//! |---------|-------------|
//! | `svckit generate` | Create missing controller, module and handler files from `.proto` services |
//! | `svckit routes` | List the HTTP routes declared in `.proto` annotations |
//!
//! ## Architecture
//!
//! - [`commands::generate`]: stub generation (`svckit generate`)
//! - [`commands::routes`]: route listing (`svckit routes`)
//! - [`logging`]: `tracing` subscriber setup shared by all commands

pub mod commands;
pub mod logging;
