use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use freebake_model::Model;

use super::{MODEL_FILE, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to the model file
    #[arg(short, long, default_value = MODEL_FILE)]
    pub model: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let model = Model::from_file(&self.model).unwrap_or_exit();
        let report = ops::explain(&model);
        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
