//! Scene file format definitions

use serde::{Deserialize, Serialize};
use tessera_factory::ObjectDescription;

/// Root structure of a scene TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub scene: SceneMetadata,
    /// Object descriptions, instantiated in file order
    #[serde(default, rename = "object")]
    pub objects: Vec<ObjectDescription>,
}

/// Scene metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl SceneFile {
    /// Create a new scene file
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scene: SceneMetadata {
                name: name.into(),
                version: default_version(),
                description: None,
            },
            objects: Vec::new(),
        }
    }

    /// Append an object description
    pub fn add_object(&mut self, object: ObjectDescription) {
        self.objects.push(object);
    }
}
