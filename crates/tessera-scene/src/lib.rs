//! Tessera Scene - TOML scene loading
//!
//! This crate parses scene files and instantiates their objects through an
//! [`ObjectFactory`](tessera_factory::ObjectFactory), with a
//! [`CheckRegistry`](tessera_check::CheckRegistry) observing every creation.
//! The checks report once per load, after the last object is created.

mod format;
mod loader;

pub use format::{SceneFile, SceneMetadata};
pub use loader::{instantiate, load_scene, load_scene_string, LoadedScene};
