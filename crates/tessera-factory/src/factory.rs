//! Object factory: type registry, alias table and creation notification

use crate::component::{ComponentType, ComponentTypeFile};
use crate::description::ObjectDescription;
use crate::object::SceneObject;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tessera_core::{Result, TesseraError};

/// Receives a notification for every object the factory instantiates.
///
/// Called synchronously, once per successful creation, before the object
/// is handed back to the caller. Failed creations are never observed.
pub trait CreationObserver {
    fn object_created(&mut self, object: &SceneObject, description: &ObjectDescription);
}

impl<F> CreationObserver for F
where
    F: FnMut(&SceneObject, &ObjectDescription),
{
    fn object_created(&mut self, object: &SceneObject, description: &ObjectDescription) {
        self(object, description)
    }
}

/// Observer that ignores every creation
#[derive(Debug, Default, Clone, Copy)]
pub struct NoObserver;

impl CreationObserver for NoObserver {
    fn object_created(&mut self, _object: &SceneObject, _description: &ObjectDescription) {}
}

/// Registry of component types and the aliases that resolve to them
#[derive(Debug, Default)]
pub struct ObjectFactory {
    types: IndexMap<String, ComponentType>,
    /// alias -> canonical name
    aliases: HashMap<String, String>,
}

impl ObjectFactory {
    /// Create a new empty factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.toml` type catalog from a directory.
    ///
    /// Files are read in name order so alias conflicts resolve the same way
    /// on every platform.
    pub fn load_from_directory<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut factory = Self::new();

        let mut files = Vec::new();
        for entry in fs::read_dir(path.as_ref())? {
            let file_path = entry?.path();
            if file_path.extension().map(|e| e == "toml").unwrap_or(false) {
                files.push(file_path);
            }
        }
        files.sort();

        for file_path in files {
            factory.load_types_file(&file_path)?;
        }

        Ok(factory)
    }

    /// Load a type catalog from a TOML file
    pub fn load_types_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let content = fs::read_to_string(path)?;
        self.load_types_string(&content)
    }

    /// Load a type catalog from a TOML string
    pub fn load_types_string(&mut self, content: &str) -> Result<()> {
        let file: ComponentTypeFile = toml::from_str(content)?;

        for (name, def) in file.types {
            self.register_type(def.to_component_type(name))?;
        }

        Ok(())
    }

    /// Register a component type together with its aliases.
    ///
    /// Nothing is registered if the name or any alias is already taken.
    pub fn register_type(&mut self, component: ComponentType) -> Result<()> {
        self.ensure_name_free(&component.name)?;
        for alias in &component.aliases {
            if alias == &component.name {
                return Err(TesseraError::DuplicateAlias {
                    alias: alias.clone(),
                    existing: component.name.clone(),
                });
            }
            self.ensure_name_free(alias)?;
        }

        for alias in &component.aliases {
            self.aliases.insert(alias.clone(), component.name.clone());
        }
        tracing::debug!(
            component = %component.name,
            aliases = component.aliases.len(),
            "registered component type"
        );
        self.types.insert(component.name.clone(), component);

        Ok(())
    }

    /// Add an alias for an already registered type.
    ///
    /// Re-adding the same alias for the same type is a no-op.
    pub fn add_alias(&mut self, alias: impl Into<String>, canonical: &str) -> Result<()> {
        let alias = alias.into();

        if !self.types.contains_key(canonical) {
            return Err(TesseraError::UnknownType(canonical.to_string()));
        }
        if self.aliases.get(&alias).map(String::as_str) == Some(canonical) {
            return Ok(());
        }
        self.ensure_name_free(&alias)?;

        if let Some(component) = self.types.get_mut(canonical) {
            component.aliases.push(alias.clone());
        }
        self.aliases.insert(alias, canonical.to_string());

        Ok(())
    }

    fn ensure_name_free(&self, name: &str) -> Result<()> {
        if self.types.contains_key(name) {
            return Err(TesseraError::DuplicateType(name.to_string()));
        }
        if let Some(existing) = self.aliases.get(name) {
            return Err(TesseraError::DuplicateAlias {
                alias: name.to_string(),
                existing: existing.clone(),
            });
        }
        Ok(())
    }

    /// Resolve a type name as written in a scene: canonical names first,
    /// then aliases
    pub fn resolve(&self, name: &str) -> Option<&ComponentType> {
        self.types.get(name).or_else(|| {
            self.aliases
                .get(name)
                .and_then(|canonical| self.types.get(canonical))
        })
    }

    /// Get a component type by canonical name
    pub fn get_type(&self, name: &str) -> Option<&ComponentType> {
        self.types.get(name)
    }

    /// Whether `name` is a registered alias (not a canonical name)
    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// List canonical type names in registration order
    pub fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(|s| s.as_str()).collect()
    }

    /// Aliases registered for a canonical type
    pub fn aliases_of(&self, canonical: &str) -> &[String] {
        self.types
            .get(canonical)
            .map(|t| t.aliases.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over all types in registration order
    pub fn types(&self) -> impl Iterator<Item = &ComponentType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Instantiate an object from its description and notify `observer`.
    ///
    /// The object is built with the canonical name of the resolved type,
    /// whatever name the description used.
    pub fn create_object(
        &self,
        description: &ObjectDescription,
        observer: &mut dyn CreationObserver,
    ) -> Result<SceneObject> {
        let declared = description.declared_type().ok_or_else(|| {
            TesseraError::MissingType(description.get_attribute("name", "<unnamed>"))
        })?;

        let component = self
            .resolve(declared)
            .ok_or_else(|| TesseraError::UnknownType(declared.to_string()))?;

        let object = SceneObject::new(component.name.clone(), description);
        tracing::debug!(
            id = %object.id(),
            declared,
            component = %component.name,
            "created object"
        );

        observer.object_created(&object, description);

        Ok(object)
    }
}
