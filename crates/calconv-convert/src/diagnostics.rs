//! Diagnostic side channel for degraded conversions.
//!
//! Conversions never surface errors to their callers. When a value has to be
//! degraded (an unknown timezone, a malformed `mailto:` string) the converter
//! reports it through a [`DiagnosticSink`] and carries on.

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A single reported diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

/// Receiver for conversion diagnostics.
///
/// Never influences control flow or return values.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "calconv::diagnostics", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "calconv::diagnostics", "{message}");
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Returns a snapshot of everything recorded so far, oldest first.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns how many diagnostics of `level` were recorded.
    #[must_use]
    pub fn count(&self, level: Level) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    fn push(&self, level: Level, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Diagnostic {
                level,
                message: message.to_string(),
            });
    }
}

impl DiagnosticSink for RecordingSink {
    fn warn(&self, message: &str) {
        self.push(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}
