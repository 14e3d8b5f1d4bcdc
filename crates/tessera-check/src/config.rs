//! Check selection configuration

use crate::builtin::{is_builtin, BUILTIN_CHECKS};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tessera_core::{Result, TesseraError};

/// Which checks run during a scene load.
///
/// ```toml
/// [checks]
/// enabled = ["SceneCheckUsingAlias"]
/// disabled = ["SceneCheckDuplicatedName"]
/// ```
///
/// Without an `enabled` list every built-in check runs. `disabled` always
/// wins over `enabled`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckConfig {
    #[serde(default)]
    pub checks: CheckSelection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckSelection {
    #[serde(default)]
    pub enabled: Option<Vec<String>>,
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl CheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::load_string(&content)
    }

    /// Load a configuration from a TOML string
    pub fn load_string(content: &str) -> Result<Self> {
        let config: CheckConfig = toml::from_str(content).map_err(|e| {
            TesseraError::ConfigError(format!("Failed to parse check configuration: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Fail on any check name that is not a built-in check
    pub fn validate(&self) -> Result<()> {
        let enabled = self.checks.enabled.iter().flatten();
        for name in enabled.chain(&self.checks.disabled) {
            if !is_builtin(name) {
                return Err(TesseraError::UnknownCheck(name.clone()));
            }
        }
        Ok(())
    }

    /// Restrict the run to `name` (in addition to any already enabled check)
    pub fn enable(&mut self, name: impl Into<String>) {
        self.checks.enabled.get_or_insert_with(Vec::new).push(name.into());
    }

    pub fn disable(&mut self, name: impl Into<String>) {
        self.checks.disabled.push(name.into());
    }

    pub fn is_selected(&self, name: &str) -> bool {
        if self.checks.disabled.iter().any(|d| d == name) {
            return false;
        }
        match &self.checks.enabled {
            Some(enabled) => enabled.iter().any(|e| e == name),
            None => true,
        }
    }

    /// Built-in check names selected by this configuration, in catalog order
    pub fn selected_checks(&self) -> Vec<&'static str> {
        BUILTIN_CHECKS
            .iter()
            .copied()
            .filter(|name| self.is_selected(name))
            .collect()
    }
}
