//! Shared fixtures for unit tests

use crate::check::SceneCheck;
use crate::event::CreationEvent;
use tessera_factory::{NoObserver, ObjectDescription, ObjectFactory, SceneObject};

pub(crate) fn sample_factory() -> ObjectFactory {
    let mut factory = ObjectFactory::new();
    factory
        .load_types_string(
            r#"
[type.Sphere]
aliases = ["Sph"]

[type.Box]

[type.Mesh]
aliases = ["Msh", "M"]
"#,
        )
        .unwrap();
    factory
}

pub(crate) fn create(factory: &ObjectFactory, declared: &str) -> (SceneObject, ObjectDescription) {
    let desc = ObjectDescription::of_type(declared);
    let obj = factory.create_object(&desc, &mut NoObserver).unwrap();
    (obj, desc)
}

pub(crate) fn create_named(
    factory: &ObjectFactory,
    declared: &str,
    name: &str,
    node: &str,
) -> (SceneObject, ObjectDescription) {
    let desc = ObjectDescription::of_type(declared)
        .with_attribute("name", name)
        .with_attribute("node", node);
    let obj = factory.create_object(&desc, &mut NoObserver).unwrap();
    (obj, desc)
}

/// Create one object per declared type name and hand each event to `check`
pub(crate) fn feed(check: &mut dyn SceneCheck, factory: &ObjectFactory, declared: &[&str]) {
    for name in declared {
        let (obj, desc) = create(factory, name);
        check.on_object_created(&CreationEvent::new(&obj, &desc));
    }
}
