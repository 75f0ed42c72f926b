//! AIBOM CLI
//!
//! Library half of the `aibom` binary: configuration, logging setup,
//! report rendering and the subcommands themselves.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod commands;
pub mod config;
pub mod logging;
pub mod render;

pub use commands::{CommandOutput, EXIT_INVALID, EXIT_POLICY_FAILED};
pub use config::{CliConfig, ConfigError, LogConfig, OutputFormat};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
