//! The scene check contract

use crate::event::CreationEvent;
use crate::sink::LogSink;

/// A pluggable validator that watches objects being created during a scene
/// load and reports what it saw once the load is over.
///
/// A check's accumulated state means "observed since the last report". It
/// must be empty right after construction and right after
/// [`print_summary_and_reset`](SceneCheck::print_summary_and_reset) or
/// [`reset`](SceneCheck::reset).
pub trait SceneCheck: Send {
    /// Stable, unique identifier used to attribute diagnostics and to select
    /// checks in configuration
    fn name(&self) -> &str;

    /// One-line human-readable purpose
    fn description(&self) -> &str;

    /// Observe one creation event. Called in creation order, never fails.
    fn on_object_created(&mut self, event: &CreationEvent<'_>);

    /// The message this check would emit now, or `None` if there is nothing
    /// to report
    fn summary(&self) -> Option<String>;

    /// Drop everything observed so far without reporting it
    fn reset(&mut self);

    /// Emit the summary as a single warning tagged with [`name`](SceneCheck::name),
    /// then reset. The reset happens even when nothing was emitted.
    fn print_summary_and_reset(&mut self, sink: &dyn LogSink) {
        if let Some(message) = self.summary() {
            sink.warn(self.name(), &message);
        }
        self.reset();
    }

    fn info(&self) -> CheckInfo {
        CheckInfo {
            name: self.name().to_string(),
            description: self.description().to_string(),
        }
    }
}

/// Name and description of a check, for listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInfo {
    pub name: String,
    pub description: String,
}
