//! Tessera Check - Scene validation checks
//!
//! Checks observe every object the factory creates while a scene is loaded,
//! accumulate what they find, and report a single consolidated diagnostic
//! per check once the load is complete.
//!
//! - [`SceneCheck`] is the contract every check implements
//! - [`CheckRegistry`] owns the active checks, dispatches creation events to
//!   them and triggers their summaries
//! - [`AliasUsageCheck`] and [`DuplicatedNameCheck`] are the built-in checks

mod alias;
mod builtin;
mod check;
mod config;
mod duplicated_name;
mod event;
mod registry;
mod sink;

#[cfg(test)]
mod test_support;

pub use alias::{AliasUsage, AliasUsageCheck};
pub use builtin::{builtin_check, builtin_checks, is_builtin, BUILTIN_CHECKS};
pub use check::{CheckInfo, SceneCheck};
pub use config::{CheckConfig, CheckSelection};
pub use duplicated_name::{DuplicatedName, DuplicatedNameCheck};
pub use event::CreationEvent;
pub use registry::CheckRegistry;
pub use sink::{Diagnostic, Level, LogSink, MemorySink, TracingSink};
