//! Log sinks that receive check diagnostics

use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warning,
}

/// A single message emitted by a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: Level,
    /// Name of the check that emitted the message
    pub source: String,
    /// Message text, possibly several lines
    pub message: String,
}

/// Destination for check output.
///
/// Emission is fire-and-forget: a sink never reports delivery failures back
/// to the check.
pub trait LogSink: Send + Sync {
    fn warn(&self, source: &str, message: &str);
    fn error(&self, source: &str, message: &str);
}

/// Sink that forwards diagnostics to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn warn(&self, source: &str, message: &str) {
        tracing::warn!(check = source, "{}", message);
    }

    fn error(&self, source: &str, message: &str) {
        tracing::error!(check = source, "{}", message);
    }
}

/// Sink that keeps every diagnostic in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        // A check panicking elsewhere never holds this lock, so the data is intact
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, level: Level, source: &str, message: &str) {
        self.lock().push(Diagnostic {
            level,
            source: source.to_string(),
            message: message.to_string(),
        });
    }

    /// Snapshot of everything recorded so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }
}

impl LogSink for MemorySink {
    fn warn(&self, source: &str, message: &str) {
        self.push(Level::Warning, source, message);
    }

    fn error(&self, source: &str, message: &str) {
        self.push(Level::Error, source, message);
    }
}
