//! Diagnostics
//!
//! Shared sink for messages raised while resolving and running plugins. Registration is
//! reported as a note, a provider that cannot be constructed as a warning, and members a
//! plugin cannot generate as an error. The default sink forwards to `tracing`.

use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;
use tracing::{error, info, warn};

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Note,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => f.write_str("note"),
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Destination for diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);

    fn note(&self, message: String) {
        self.report(Diagnostic::new(Severity::Note, message));
    }

    fn warning(&self, message: String) {
        self.report(Diagnostic::new(Severity::Warning, message));
    }

    fn error(&self, message: String) {
        self.report(Diagnostic::new(Severity::Error, message));
    }
}

/// Sink that logs every diagnostic through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Note => info!(target: "modelgen::diagnostics", "{}", diagnostic.message),
            Severity::Warning => warn!(target: "modelgen::diagnostics", "{}", diagnostic.message),
            Severity::Error => error!(target: "modelgen::diagnostics", "{}", diagnostic.message),
        }
    }
}

/// Sink that records diagnostics in memory and also logs them.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    pub fn with_severity(&self, severity: Severity) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .iter()
            .filter(|d| d.severity == severity)
            .cloned()
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .lock()
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn clear(&self) {
        self.diagnostics.lock().clear();
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        TracingSink.report(diagnostic.clone());
        self.diagnostics.lock().push(diagnostic);
    }
}
