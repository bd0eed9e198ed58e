//! Init Command
//!
//! Initialize teamforge in the current directory: project config file plus
//! an empty profile database.

use crate::config::{Config, ConfigLoader};
use crate::storage::ProfileStore;
use crate::types::Result;

use crate::cli::ui::Output;

pub fn run(force: bool) -> Result<()> {
    let out = Output::new();

    let path = ConfigLoader::init_project(force)?;
    let config = Config::default();
    ProfileStore::open(&config.storage.path)?;

    out.success(&format!("Initialized teamforge ({})", path.display()));
    println!();
    println!("Next steps:");
    println!("  1. Run 'teamforge ingest --file <dump.json>' to register profiles");
    println!("  2. Run 'teamforge team --handle <handle> --skills <skills>' to form a team");

    Ok(())
}
