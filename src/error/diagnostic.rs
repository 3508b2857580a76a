use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A construct was dropped or degraded; the run continues.
    Warning,
    /// Informational detail attached to a tolerated path.
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic describing a malformed-but-tolerated piece of input.
///
/// The tokenizer and parser never fail on bad syntax; they degrade the
/// offending construct and record one of these. A successful run may carry
/// any number of diagnostics — they are reporting, not control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// How serious the degradation was.
    pub severity: Severity,
    /// Human-readable description, including the offending token text where
    /// available.
    pub message:  String,
}

impl Diagnostic {
    /// Creates a warning diagnostic.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning,
               message:  message.into(), }
    }

    /// Creates a note diagnostic.
    #[must_use]
    pub fn note(message: impl Into<String>) -> Self {
        Self { severity: Severity::Note,
               message:  message.into(), }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}
