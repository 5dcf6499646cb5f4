//! Manifest diagnostics
//!
//! Parsing never fails on malformed content. Lines that cannot contribute to
//! a section range are skipped and reported here instead:
//! - Categorized codes for filtering
//! - Line number and byte range of the offending line

mod codes;
mod error;

pub use codes::DiagnosticCode;
pub use error::ManifestDiagnostic;
