//! Object descriptions as written in a scene

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The declarative record an object is instantiated from.
///
/// Attributes keep the order in which the scene author wrote them. The
/// `type` attribute holds the type name as written, which may be an alias.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectDescription {
    attributes: IndexMap<String, toml::Value>,
}

impl ObjectDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a description with only a `type` attribute
    pub fn of_type(type_name: impl Into<String>) -> Self {
        Self::new().with_attribute("type", type_name.into())
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<toml::Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Get an attribute rendered as a string, or `default` when it is absent.
    ///
    /// String values are returned verbatim; any other value is rendered in
    /// its TOML form (`3`, `true`, `[1, 2]`).
    pub fn get_attribute(&self, name: &str, default: &str) -> String {
        match self.attributes.get(name) {
            Some(toml::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => default.to_string(),
        }
    }

    /// Get the raw attribute value
    pub fn attribute(&self, name: &str) -> Option<&toml::Value> {
        self.attributes.get(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// The declared `type`, if present and a string
    pub fn declared_type(&self) -> Option<&str> {
        self.attributes.get("type").and_then(|v| v.as_str())
    }

    pub fn attributes(&self) -> &IndexMap<String, toml::Value> {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
