use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use freebake_model::Model;

use super::{MODEL_FILE, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the model file
    #[arg(short, long, default_value = MODEL_FILE)]
    pub model: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let model = Model::from_file(&self.model).unwrap_or_exit();
        ops::check(&model, &self.model).render(&mut TerminalOutput::new());
        Ok(())
    }
}
