//! Scene loading from TOML files

use crate::format::{SceneFile, SceneMetadata};
use std::fs;
use std::path::Path;
use tessera_check::CheckRegistry;
use tessera_core::Result;
use tessera_factory::{ObjectFactory, SceneObject};

/// Objects instantiated by one scene load
#[derive(Debug)]
pub struct LoadedScene {
    pub metadata: SceneMetadata,
    /// Created objects, in creation order
    pub objects: Vec<SceneObject>,
}

impl LoadedScene {
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// First object with the given name
    pub fn find(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name() == name)
    }

    /// All objects whose canonical type is `type_name`
    pub fn objects_of_type<'a>(&'a self, type_name: &'a str) -> impl Iterator<Item = &'a SceneObject> {
        self.objects.iter().filter(move |o| o.type_name() == type_name)
    }
}

/// Load a scene from a TOML file
pub fn load_scene<P: AsRef<Path>>(
    path: P,
    factory: &ObjectFactory,
    checks: &mut CheckRegistry,
) -> Result<LoadedScene> {
    let content = fs::read_to_string(path)?;
    load_scene_string(&content, factory, checks)
}

/// Load a scene from a TOML string
pub fn load_scene_string(
    content: &str,
    factory: &ObjectFactory,
    checks: &mut CheckRegistry,
) -> Result<LoadedScene> {
    let scene_file: SceneFile = toml::from_str(content)?;
    instantiate(&scene_file, factory, checks)
}

/// Create every object of `scene_file`, in order, with `checks` observing.
///
/// Once the last object exists the checks print their summaries. If any
/// creation fails the checks are reset instead, so nothing observed during
/// the aborted load shows up in the next one.
pub fn instantiate(
    scene_file: &SceneFile,
    factory: &ObjectFactory,
    checks: &mut CheckRegistry,
) -> Result<LoadedScene> {
    let mut objects = Vec::with_capacity(scene_file.objects.len());

    for description in &scene_file.objects {
        match factory.create_object(description, checks) {
            Ok(object) => objects.push(object),
            Err(e) => {
                tracing::debug!(
                    scene = %scene_file.scene.name,
                    created = objects.len(),
                    error = %e,
                    "scene load aborted"
                );
                checks.reset();
                return Err(e);
            }
        }
    }

    checks.print_summary_and_reset();
    tracing::info!(
        scene = %scene_file.scene.name,
        objects = objects.len(),
        "scene loaded"
    );

    Ok(LoadedScene {
        metadata: scene_file.scene.clone(),
        objects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tessera_check::MemorySink;
    use tessera_core::TesseraError;

    fn factory() -> ObjectFactory {
        let mut factory = ObjectFactory::new();
        factory
            .load_types_string(
                r#"
[type.MechanicalObject]
aliases = ["MechObj"]

[type.Sphere]
aliases = ["Sph"]
"#,
            )
            .unwrap();
        factory
    }

    #[test]
    fn test_load_scene_string() {
        let toml_str = r#"
[scene]
name = "Test Scene"

[[object]]
type = "MechanicalObject"
name = "dofs"

[[object]]
type = "Sph"
name = "ball"
node = "/ball"
"#;

        let sink = Arc::new(MemorySink::new());
        let mut checks = CheckRegistry::with_builtin_checks(sink.clone());
        let scene = load_scene_string(toml_str, &factory(), &mut checks).unwrap();

        assert_eq!(scene.metadata.name, "Test Scene");
        assert_eq!(scene.object_count(), 2);
        assert_eq!(scene.objects[0].name(), "dofs");
        assert_eq!(scene.find("ball").unwrap().type_name(), "Sphere");
        assert_eq!(scene.find("ball").unwrap().node(), "/ball");
        assert_eq!(scene.objects_of_type("Sphere").count(), 1);

        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0]
            .message
            .contains("  - Sphere: 1 created with alias \"Sph\""));
    }

    #[test]
    fn test_failed_load_resets_checks() {
        let toml_str = r#"
[scene]
name = "Broken"

[[object]]
type = "MechObj"

[[object]]
type = "Cylinder"
"#;

        let sink = Arc::new(MemorySink::new());
        let mut checks = CheckRegistry::with_builtin_checks(sink.clone());
        let factory = factory();

        let err = load_scene_string(toml_str, &factory, &mut checks).unwrap_err();
        assert!(matches!(err, TesseraError::UnknownType(name) if name == "Cylinder"));
        assert!(sink.is_empty());

        // The MechObj from the aborted load must not leak into this one
        let ok = "[scene]\nname = \"Ok\"\n\n[[object]]\ntype = \"Sph\"\n";
        load_scene_string(ok, &factory, &mut checks).unwrap();
        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 1);
        assert!(!diagnostics[0].message.contains("MechanicalObject"));
    }

    #[test]
    fn test_invalid_toml() {
        let mut checks = CheckRegistry::with_builtin_checks(Arc::new(MemorySink::new()));
        let err = load_scene_string("[scene", &factory(), &mut checks).unwrap_err();
        assert!(matches!(err, TesseraError::TomlParseError(_)));
    }

    #[test]
    fn test_load_scene_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.toml");
        std::fs::write(
            &path,
            "[scene]\nname = \"File\"\n\n[[object]]\ntype = \"Sphere\"\n",
        )
        .unwrap();

        let sink = Arc::new(MemorySink::new());
        let mut checks = CheckRegistry::with_builtin_checks(sink.clone());
        let scene = load_scene(&path, &factory(), &mut checks).unwrap();
        assert_eq!(scene.object_count(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let mut checks = CheckRegistry::with_builtin_checks(Arc::new(MemorySink::new()));
        let err = load_scene("/nonexistent/scene.toml", &factory(), &mut checks).unwrap_err();
        assert!(matches!(err, TesseraError::IoError(_)));
    }
}
