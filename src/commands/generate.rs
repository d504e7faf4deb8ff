//! The module that implements the `gen-runtime-constants` command.

use anyhow::{Context as _, Result};
use clap::Parser;
use manticore_layout::{BuildConstants, DeclarationBlock, LayoutExtractor};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use target_lexicon::Triple;

/// Prints the layout constants shared by the runtime and the code generator.
#[derive(Parser, Debug, Default)]
pub struct GenerateCommand {
    /// Write the declarations to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Executes the command.
    pub fn execute(self) -> Result<()> {
        crate::init_logging()?;

        let block = self.declarations();
        match &self.output {
            Some(path) => {
                let mut contents = Vec::new();
                block.emit(&mut contents)?;
                fs::write(path, contents)
                    .with_context(|| format!("failed to write `{}`", path.display()))?;
                log::info!("wrote runtime constants to {}", path.display());
            }
            None => {
                let mut stdout = io::stdout().lock();
                block
                    .emit(&mut stdout)
                    .context("failed to write runtime constants to stdout")?;
                stdout.flush()?;
            }
        }
        Ok(())
    }

    /// Measures the runtime built into this binary.
    pub fn declarations(&self) -> DeclarationBlock {
        let _span = tracing::info_span!("extract").entered();
        let build = BuildConstants::default();
        tracing::info!(host = %Triple::host(), ?build, "extracting runtime layout");
        LayoutExtractor::vproc(build).declaration_block()
    }
}
