//! # presetbank
//!
//! Preset manifest parsing and bank-range navigation.
//!
//! A preset manifest is a flat text file listing presets grouped into
//! numbered banks, with `#` headers naming sections of the library.
//! This crate derives one contiguous bank range per section so a UI can jump
//! between them.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! navigation → SectionRanges holder with its cursor
//!   ↓
//! project    → FileSystem seam, LoadError
//!   ↓
//! parser     → line classification, range derivation, diagnostics
//!   ↓
//! syntax     → SectionRange
//!   ↓
//! base       → Bank, TextRange, manifest constants
//! ```

/// Foundation types: Bank, TextRange, manifest constants
pub mod base;

/// Syntax: parsed section ranges
pub mod syntax;

/// Parser: line classifier and section range derivation
pub mod parser;

/// Project: filesystem access and load errors
pub mod project;

/// Navigation: the section list and cursor consumed by UI code
pub mod navigation;

pub use base::{Bank, TextRange, TextSize};
pub use navigation::SectionRanges;
pub use parser::{DiagnosticCode, ManifestDiagnostic, ParseOptions, ParsedManifest, parse_manifest};
pub use project::{FileSystem, LoadError, MemoryFileSystem, StdFileSystem};
pub use syntax::SectionRange;
