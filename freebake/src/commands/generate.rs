use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use freebake_model::Model;

use super::{MODEL_FILE, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the model file
    #[arg(short, long, default_value = MODEL_FILE)]
    pub model: PathBuf,

    /// Output directory for generated sources
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Indent width in spaces, 0 for tabs (overrides [options] indent)
    #[arg(long)]
    pub indent: Option<u8>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let model = Model::from_file(&self.model).unwrap_or_exit();
        let report = ops::generate(
            &model,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                indent: self.indent,
            },
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
