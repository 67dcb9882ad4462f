//! `lplink init-config` – dump the built-in project as TOML.

use anyhow::Result;
use lplink_core::config;
use lplink_core::project::Project;
use std::path::Path;

pub fn run_init_config(path: &Path) -> Result<()> {
    config::write_new(path, &Project::builtin()?)?;
    println!("Wrote {}", path.display());
    Ok(())
}
