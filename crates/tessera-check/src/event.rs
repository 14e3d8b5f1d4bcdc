//! Creation events delivered to scene checks

use tessera_factory::{ObjectDescription, SceneObject};

/// One object instantiated from one description.
///
/// Events only live for the duration of the dispatch; checks copy whatever
/// they need to keep.
#[derive(Debug, Clone)]
pub struct CreationEvent<'a> {
    object: &'a SceneObject,
    description: &'a ObjectDescription,
    declared_type_name: String,
}

impl<'a> CreationEvent<'a> {
    /// Build the event for `object`, created from `description`.
    ///
    /// A description without a `type` attribute yields an empty declared
    /// type name.
    pub fn new(object: &'a SceneObject, description: &'a ObjectDescription) -> Self {
        Self {
            object,
            description,
            declared_type_name: description.get_attribute("type", ""),
        }
    }

    pub fn object(&self) -> &'a SceneObject {
        self.object
    }

    pub fn description(&self) -> &'a ObjectDescription {
        self.description
    }

    /// Type name as written by the scene author
    pub fn declared_type_name(&self) -> &str {
        &self.declared_type_name
    }

    /// Type name reported by the created object itself
    pub fn canonical_type_name(&self) -> &'a str {
        self.object.type_name()
    }

    /// True when the declared name differs from the canonical one
    pub fn uses_alias(&self) -> bool {
        self.declared_type_name != self.canonical_type_name()
    }
}
