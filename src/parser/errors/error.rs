//! Manifest diagnostic type

use std::fmt;

use crate::base::TextRange;

use super::codes::DiagnosticCode;

/// A skipped or degenerate manifest line
///
/// Provides:
/// - Categorized code
/// - Human-readable message
/// - 0-based line number and byte range of the line in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDiagnostic {
    pub code: DiagnosticCode,
    pub message: String,
    /// 0-based line number
    pub line: usize,
    /// Byte range of the line, excluding its terminator
    pub range: TextRange,
}

impl ManifestDiagnostic {
    pub fn new(code: DiagnosticCode, message: impl Into<String>, line: usize, range: TextRange) -> Self {
        Self {
            code,
            message: message.into(),
            line,
            range,
        }
    }

    /// Format the diagnostic for display, with a 1-based line number
    pub fn format(&self) -> String {
        format!("line {}: {}: {}", self.line + 1, self.code, self.message)
    }
}

impl fmt::Display for ManifestDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
