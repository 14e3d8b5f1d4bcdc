//! Tessera Core - Foundational types for the Tessera scene checker
//!
//! This crate provides the types that all other Tessera crates depend on:
//! - `ObjectId` - Identifiers for objects instantiated from a scene
//! - Error types and Result alias

mod error;
mod id;

pub use error::{Result, TesseraError};
pub use id::ObjectId;
