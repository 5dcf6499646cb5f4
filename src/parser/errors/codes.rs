//! Diagnostic code definitions
//!
//! Codes follow a naming convention: W{category}{number}
//! - W01xx: Bank marker errors
//! - W02xx: Section structure warnings

use std::fmt;

/// Codes for skipped or degenerate manifest input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    // =========================================================================
    // W01xx: Bank marker errors
    // =========================================================================
    /// `-- Bank` marker without a separate number token
    W0101,
    /// Bank token is not an unsigned integer
    W0102,
    /// Bank number is zero
    W0103,

    // =========================================================================
    // W02xx: Section structure warnings
    // =========================================================================
    /// Section header with no bank lines before the next header or EOF
    W0201,
    /// Bank line before the first section header
    W0202,
}

impl DiagnosticCode {
    /// Get the string representation of the code (e.g., "W0101")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::W0101 => "W0101",
            Self::W0102 => "W0102",
            Self::W0103 => "W0103",
            Self::W0201 => "W0201",
            Self::W0202 => "W0202",
        }
    }

    /// Get a short description of the code's category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::W0101 | Self::W0102 | Self::W0103 => "bank marker",
            Self::W0201 | Self::W0202 => "section structure",
        }
    }

    /// True for codes raised by a bank line that was ignored entirely
    pub fn is_skipped_line(&self) -> bool {
        matches!(self, Self::W0101 | Self::W0102 | Self::W0103)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
