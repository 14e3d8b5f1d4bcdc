//! CLI command implementations

pub mod check;
pub mod checks;
pub mod types;

use anyhow::{Context, Result};
use std::path::Path;
use tessera_check::CheckConfig;
use tessera_factory::ObjectFactory;

/// Load a type catalog from a single TOML file or a directory of them
pub fn load_factory(types_path: &str) -> Result<ObjectFactory> {
    let path = Path::new(types_path);
    if !path.exists() {
        anyhow::bail!("Type catalog not found: {}", types_path);
    }

    let factory = if path.is_dir() {
        ObjectFactory::load_from_directory(path)
    } else {
        let mut factory = ObjectFactory::new();
        factory.load_types_file(path).map(|_| factory)
    };

    factory.with_context(|| format!("Failed to load component types from {}", types_path))
}

/// Build the check selection from an optional file plus command-line flags
pub fn load_config(config_path: Option<&str>, only: &[String], disable: &[String]) -> Result<CheckConfig> {
    let mut config = match config_path {
        Some(path) => CheckConfig::load_file(path)
            .with_context(|| format!("Failed to load check configuration from {}", path))?,
        None => CheckConfig::new(),
    };

    for name in only {
        config.enable(name.clone());
    }
    for name in disable {
        config.disable(name.clone());
    }
    config.validate()?;

    Ok(config)
}
