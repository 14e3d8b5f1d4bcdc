//! Component type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A component type the factory knows how to instantiate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentType {
    /// Canonical type name
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Short names that also resolve to this type
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl ComponentType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            aliases: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }
}

/// TOML file format for component type catalogs
#[derive(Debug, Deserialize)]
pub struct ComponentTypeFile {
    #[serde(rename = "type", default)]
    pub types: BTreeMap<String, ComponentTypeDefinition>,
}

#[derive(Debug, Deserialize)]
pub struct ComponentTypeDefinition {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl ComponentTypeDefinition {
    pub fn to_component_type(self, name: String) -> ComponentType {
        ComponentType {
            name,
            description: self.description,
            aliases: self.aliases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type_file() {
        let toml_str = r#"
[type.MechanicalObject]
description = "State vectors of a mechanical node"
aliases = ["MechObj", "MState"]

[type.Sphere]
"#;
        let file: ComponentTypeFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.types.len(), 2);

        let mech = &file.types["MechanicalObject"];
        assert_eq!(mech.aliases, vec!["MechObj", "MState"]);
        assert!(file.types["Sphere"].aliases.is_empty());
    }

    #[test]
    fn test_builder() {
        let ty = ComponentType::new("Mesh")
            .with_description("Triangle mesh")
            .with_alias("Msh");
        assert!(ty.has_alias("Msh"));
        assert!(!ty.has_alias("Mesh"));
        assert_eq!(ty.description.as_deref(), Some("Triangle mesh"));
    }
}
