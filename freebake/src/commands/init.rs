use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::ops::{self, InitOutcome};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create freebake.toml in
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        match ops::init(&self.dir)? {
            InitOutcome::Created(path) => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  freebake check -m {}", path.display());
                println!("  freebake generate -m {} -o src/main/java", path.display());
            }
            InitOutcome::AlreadyExists(path) => {
                println!("{} already exists, leaving it unchanged", path.display());
            }
        }
        Ok(())
    }
}
