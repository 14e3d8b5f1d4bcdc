//! Tessera Factory - Component types, aliases and object creation
//!
//! The factory turns object descriptions into scene objects. It resolves the
//! declared type (a canonical name or a registered alias) and reports each
//! successful creation to a [`CreationObserver`], which is how scene checks
//! get to see every object of a load.

mod component;
mod description;
mod factory;
mod object;

pub use component::{ComponentType, ComponentTypeDefinition, ComponentTypeFile};
pub use description::ObjectDescription;
pub use factory::{CreationObserver, NoObserver, ObjectFactory};
pub use object::{SceneObject, ROOT_NODE};
