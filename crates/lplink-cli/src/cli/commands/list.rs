//! `lplink list` – show the derivative mapping.

use anyhow::Result;
use lplink_core::config;
use std::path::Path;

pub fn run_list(config_path: Option<&Path>) -> Result<()> {
    let project = config::load_or_builtin(config_path)?;
    println!("project:     {}", project.name);
    println!("master link: {}", project.master_link);
    if project.mapping.is_empty() {
        println!("No derivatives configured.");
        return Ok(());
    }
    println!("{:<24} {}", "FOLDER", "URL");
    for link in &project.mapping {
        println!("{:<24} {}", link.folder, link.url);
    }
    Ok(())
}
