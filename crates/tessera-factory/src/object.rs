//! Objects instantiated from descriptions

use crate::description::ObjectDescription;
use tessera_core::ObjectId;

/// Node path used when a description does not name one
pub const ROOT_NODE: &str = "/";

/// A live object produced by the factory.
///
/// The object carries its own canonical type name. Consumers that need to
/// know what an object *is* ask the object, never the description it was
/// built from.
#[derive(Debug, Clone)]
pub struct SceneObject {
    id: ObjectId,
    name: String,
    node: String,
    type_name: String,
    description: ObjectDescription,
}

impl SceneObject {
    pub(crate) fn new(type_name: impl Into<String>, description: &ObjectDescription) -> Self {
        Self {
            id: ObjectId::next(),
            name: description.get_attribute("name", ""),
            node: description.get_attribute("node", ROOT_NODE),
            type_name: type_name.into(),
            description: description.clone(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Object name, empty when the description gave none
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the node holding this object
    pub fn node(&self) -> &str {
        &self.node
    }

    /// Canonical type name of this object
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The description this object was created from
    pub fn description(&self) -> &ObjectDescription {
        &self.description
    }
}
