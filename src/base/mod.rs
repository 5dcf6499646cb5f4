//! Foundation types for manifest parsing.
//!
//! - [`Bank`] - 1-based bank numbers
//! - [`TextRange`], [`TextSize`] - byte offsets of manifest lines
//! - Manifest constants (default path, line prefixes)
//!
//! This module has NO dependencies on other presetbank modules.

pub mod constants;

pub use text_size::{TextRange, TextSize};

/// A bank slot in the device's preset storage. Valid banks start at 1.
pub type Bank = u32;
