//! Check registry: owns the active checks and drives them through a load

use crate::builtin::{builtin_check, builtin_checks};
use crate::check::{CheckInfo, SceneCheck};
use crate::config::CheckConfig;
use crate::event::CreationEvent;
use crate::sink::LogSink;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tessera_core::{Result, TesseraError};
use tessera_factory::{CreationObserver, ObjectDescription, SceneObject};

/// Where in the lifecycle a check faulted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    ObjectCreated,
    Summary,
    Reset,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::ObjectCreated => write!(f, "object creation"),
            Phase::Summary => write!(f, "summary"),
            Phase::Reset => write!(f, "reset"),
        }
    }
}

/// Ordered set of active checks plus the sink they report to.
///
/// The registry is the [`CreationObserver`] handed to the factory during a
/// load: every creation is dispatched to every check in registration order.
/// A check that panics is reported on the sink, has its state reset, and
/// does not stop the other checks.
pub struct CheckRegistry {
    checks: Vec<Box<dyn SceneCheck>>,
    sink: Arc<dyn LogSink>,
    faults: usize,
}

impl CheckRegistry {
    /// Create a registry with no checks
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            checks: Vec::new(),
            sink,
            faults: 0,
        }
    }

    /// Create a registry running every built-in check
    pub fn with_builtin_checks(sink: Arc<dyn LogSink>) -> Self {
        let mut registry = Self::new(sink);
        registry.checks = builtin_checks();
        registry
    }

    /// Create a registry running the built-in checks selected by `config`
    pub fn from_config(config: &CheckConfig, sink: Arc<dyn LogSink>) -> Result<Self> {
        config.validate()?;

        let mut registry = Self::new(sink);
        for name in config.selected_checks() {
            if let Some(check) = builtin_check(name) {
                registry.register(check)?;
            }
        }
        Ok(registry)
    }

    /// Add a check. Names must be unique.
    pub fn register(&mut self, check: Box<dyn SceneCheck>) -> Result<()> {
        if self.get(check.name()).is_some() {
            return Err(TesseraError::DuplicateCheck(check.name().to_string()));
        }
        tracing::debug!(check = check.name(), "registered scene check");
        self.checks.push(check);
        Ok(())
    }

    /// Get a check by name
    pub fn get(&self, name: &str) -> Option<&dyn SceneCheck> {
        self.checks
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Check names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Name and description of every check, in registration order
    pub fn checks(&self) -> Vec<CheckInfo> {
        self.checks.iter().map(|c| c.info()).collect()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// Number of check panics caught since the registry was created
    pub fn faults(&self) -> usize {
        self.faults
    }

    /// Hand one creation event to every check
    pub fn dispatch(&mut self, event: &CreationEvent<'_>) {
        let sink = self.sink.as_ref();
        for check in &mut self.checks {
            if !run_isolated(check.as_mut(), sink, Phase::ObjectCreated, |c| {
                c.on_object_created(event)
            }) {
                self.faults += 1;
            }
        }
    }

    /// Ask every check to report what it saw and start over.
    ///
    /// Call once per scene load, after the last object has been created.
    pub fn print_summary_and_reset(&mut self) {
        let sink = self.sink.as_ref();
        for check in &mut self.checks {
            if !run_isolated(check.as_mut(), sink, Phase::Summary, |c| {
                c.print_summary_and_reset(sink)
            }) {
                self.faults += 1;
            }
        }
    }

    /// Drop every check's observations without reporting, e.g. after a load
    /// was aborted
    pub fn reset(&mut self) {
        let sink = self.sink.as_ref();
        for check in &mut self.checks {
            if !run_isolated(check.as_mut(), sink, Phase::Reset, |c| c.reset()) {
                self.faults += 1;
            }
        }
    }
}

impl CreationObserver for CheckRegistry {
    fn object_created(&mut self, object: &SceneObject, description: &ObjectDescription) {
        let event = CreationEvent::new(object, description);
        self.dispatch(&event);
    }
}

impl fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("checks", &self.names())
            .field("faults", &self.faults)
            .finish()
    }
}

/// Run `f` on `check`, catching panics. Returns false if the check faulted.
///
/// A faulted check is reported on `sink` and reset so that half-updated
/// state never reaches a later summary.
fn run_isolated(
    check: &mut dyn SceneCheck,
    sink: &dyn LogSink,
    phase: Phase,
    f: impl FnOnce(&mut dyn SceneCheck),
) -> bool {
    let name = check.name().to_string();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| f(&mut *check)));
    let payload = match outcome {
        Ok(()) => return true,
        Err(payload) => payload,
    };

    sink.error(
        &name,
        &format!(
            "check panicked during {}: {}",
            phase,
            panic_payload_to_string(payload.as_ref())
        ),
    );

    if phase != Phase::Reset {
        let _ = panic::catch_unwind(AssertUnwindSafe(|| check.reset()));
    }

    false
}

fn panic_payload_to_string(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
