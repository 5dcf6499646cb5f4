//! Manifest format constants.

/// Manifest location on the device filesystem.
pub const DEFAULT_MANIFEST_PATH: &str = "/PresetList.txt";

/// Label of the section synthesized when a manifest has no headers.
pub const CATCH_ALL_LABEL: &str = "All Banks";

/// Lines starting with this open a new section.
pub const HEADER_PREFIX: &str = "#";

/// Lines starting with this carry a bank number as their last token.
pub const BANK_MARKER_PREFIX: &str = "-- Bank";
