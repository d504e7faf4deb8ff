//! The Manticore runtime constants generator.
//!
//! This crate implements the `gen-runtime-constants` tool, which is run while
//! building the code generator to capture the layout of the runtime's
//! structures as SML declarations.

#![deny(missing_docs)]

pub mod commands;

use anyhow::{Result, anyhow};

/// The environment variable holding the log filter.
pub const LOG_ENV: &str = "GEN_RUNTIME_CONSTANTS_LOG";

/// Sends log output to stderr, filtered by [`LOG_ENV`].
///
/// Nothing is logged unless the variable is set, and nothing is ever logged
/// to stdout, which carries the generated declarations.
pub fn init_logging() -> Result<()> {
    use std::io::IsTerminal;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_env(LOG_ENV))
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow!(e))
}
