//! Check listing command

use super::load_config;
use anyhow::Result;
use std::sync::Arc;
use tessera_check::{CheckRegistry, TracingSink};

pub fn run(config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path, &[], &[])?;
    let registry = CheckRegistry::from_config(&config, Arc::new(TracingSink))?;

    if registry.is_empty() {
        println!("No scene checks selected.");
        return Ok(());
    }

    println!("Scene checks ({}):", registry.len());
    for info in registry.checks() {
        println!("  {} - {}", info.name, info.description);
    }

    Ok(())
}
