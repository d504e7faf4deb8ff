//! The `gen-runtime-constants` command line tool.
//!
//! Prints the layout constants the code generator shares with the runtime.
//! See `gen-runtime-constants --help` for usage.

use anyhow::Result;
use clap::Parser;
use gen_runtime_constants::commands::GenerateCommand;

/// Manticore runtime constants generator
#[derive(Parser)]
#[command(
    name = "gen-runtime-constants",
    version,
    after_help = "The declarations describe the layout of the runtime as compiled\n\
                  for the host running this tool. Build it for the same target\n\
                  as the runtime.\n\
                  \n\
                  Set GEN_RUNTIME_CONSTANTS_LOG (for example to `debug`) to log\n\
                  the computed values to stderr."
)]
struct GenRuntimeConstants {
    #[command(flatten)]
    generate: GenerateCommand,
}

fn main() -> Result<()> {
    GenRuntimeConstants::parse().generate.execute()
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    GenRuntimeConstants::command().debug_assert()
}
