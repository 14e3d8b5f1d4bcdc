//! End-to-end scene loads with the built-in checks

use std::path::PathBuf;
use std::sync::Arc;
use tessera_check::{CheckConfig, CheckRegistry, Level, MemorySink};
use tessera_factory::ObjectFactory;
use tessera_scene::load_scene;

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

fn factory() -> ObjectFactory {
    let mut factory = ObjectFactory::new();
    factory.load_types_file(testdata("types.toml")).unwrap();
    factory
}

#[test]
fn test_falling_spheres_reports() {
    let sink = Arc::new(MemorySink::new());
    let mut checks = CheckRegistry::with_builtin_checks(sink.clone());

    let scene = load_scene(testdata("falling_spheres.toml"), &factory(), &mut checks).unwrap();
    assert_eq!(scene.object_count(), 10);

    let diagnostics = sink.take();
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|d| d.level == Level::Warning));

    assert_eq!(diagnostics[0].source, "SceneCheckUsingAlias");
    assert_eq!(
        diagnostics[0].message,
        [
            "This scene is using hard coded aliases. Aliases can be very confusing, use with caution.",
            "  - MechanicalObject: 2 created with alias \"MechObj\"",
            "  - SphereCollisionModel: 1 created with alias \"Sphere\"",
            "  - SphereCollisionModel: 1 created with alias \"TSphereModel\"",
            "  - UniformMass: 1 created with alias \"Mass\"",
        ]
        .join("\n")
    );

    assert_eq!(diagnostics[1].source, "SceneCheckDuplicatedName");
    assert!(diagnostics[1]
        .message
        .ends_with("  - /sphere2: \"anchor\" used 2 times"));
}

#[test]
fn test_clean_scene_is_silent() {
    let sink = Arc::new(MemorySink::new());
    let mut checks = CheckRegistry::with_builtin_checks(sink.clone());

    load_scene(testdata("clean.toml"), &factory(), &mut checks).unwrap();
    assert!(sink.is_empty());
}

#[test]
fn test_consecutive_loads_do_not_leak() {
    let sink = Arc::new(MemorySink::new());
    let mut checks = CheckRegistry::with_builtin_checks(sink.clone());
    let factory = factory();

    load_scene(testdata("falling_spheres.toml"), &factory, &mut checks).unwrap();
    let first = sink.take();

    load_scene(testdata("clean.toml"), &factory, &mut checks).unwrap();
    assert!(sink.is_empty());

    load_scene(testdata("falling_spheres.toml"), &factory, &mut checks).unwrap();
    assert_eq!(sink.take(), first);
}

#[test]
fn test_config_selects_checks() {
    let config = CheckConfig::load_string("[checks]\nenabled = [\"SceneCheckDuplicatedName\"]\n").unwrap();
    let sink = Arc::new(MemorySink::new());
    let mut checks = CheckRegistry::from_config(&config, sink.clone()).unwrap();

    load_scene(testdata("falling_spheres.toml"), &factory(), &mut checks).unwrap();

    let diagnostics = sink.take();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].source, "SceneCheckDuplicatedName");
}
