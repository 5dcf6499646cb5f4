//! Manifest parser
//!
//! - [`classify_line`] - what a single line means
//! - [`parse_manifest`] / [`parse_reader`] - section ranges for a whole manifest
//! - [`ManifestDiagnostic`] - lines that were skipped on the way

pub mod errors;
mod line;
mod manifest;
mod options;

pub use errors::{DiagnosticCode, ManifestDiagnostic};
pub use line::{BankError, ManifestLine, classify_line};
pub use manifest::{ParsedManifest, parse_manifest, parse_reader};
pub use options::ParseOptions;
