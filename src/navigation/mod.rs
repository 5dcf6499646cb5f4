//! Section list and cursor for preset navigation.
//!
//! [`SectionRanges`] owns the sections parsed from the most recent manifest
//! load and a cursor selecting one of them. It holds no lock; callers that
//! share it between tasks must serialize access themselves.

use std::path::Path;

use tracing::{debug, warn};

use crate::base::Bank;
use crate::base::constants::DEFAULT_MANIFEST_PATH;
use crate::parser::{ManifestDiagnostic, ParseOptions, ParsedManifest, parse_manifest, parse_reader};
use crate::project::{FileSystem, LoadError, StdFileSystem};
use crate::syntax::SectionRange;

/// Named bank ranges loaded from a preset manifest, plus a cursor.
#[derive(Debug, Clone)]
pub struct SectionRanges<F: FileSystem = StdFileSystem> {
    fs: F,
    options: ParseOptions,
    sections: Vec<SectionRange>,
    diagnostics: Vec<ManifestDiagnostic>,
    last_seen_bank: Option<Bank>,
    current_index: usize,
}

impl SectionRanges<StdFileSystem> {
    /// Create an empty holder reading from the host filesystem.
    pub fn new() -> Self {
        Self::with_file_system(StdFileSystem)
    }
}

impl<F: FileSystem + Default> Default for SectionRanges<F> {
    fn default() -> Self {
        Self::with_file_system(F::default())
    }
}

impl<F: FileSystem> SectionRanges<F> {
    /// Create an empty holder reading manifests through `fs`.
    pub fn with_file_system(fs: F) -> Self {
        Self {
            fs,
            options: ParseOptions::default(),
            sections: Vec::new(),
            diagnostics: Vec::new(),
            last_seen_bank: None,
            current_index: 0,
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    pub fn file_system_mut(&mut self) -> &mut F {
        &mut self.fs
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Load the manifest at `path`, replacing all sections.
    ///
    /// Returns `false` only when the file cannot be opened, in which case no
    /// sections remain.
    pub fn load(&mut self, path: impl AsRef<Path>) -> bool {
        self.try_load(path).is_ok()
    }

    /// Load the manifest at [`DEFAULT_MANIFEST_PATH`].
    pub fn load_default(&mut self) -> bool {
        self.load(DEFAULT_MANIFEST_PATH)
    }

    /// Load the manifest at `path`, returning the number of sections.
    pub fn try_load(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        self.clear();

        let reader = self.fs.open(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "cannot open manifest");
            LoadError::open(path, source)
        })?;
        let parsed = parse_reader(reader, &self.options);

        debug!(
            path = %path.display(),
            sections = parsed.sections.len(),
            diagnostics = parsed.diagnostics.len(),
            "loaded manifest"
        );
        Ok(self.apply(parsed))
    }

    /// Load manifest text that is already in memory, returning the number of
    /// sections.
    pub fn load_str(&mut self, source: &str) -> usize {
        self.clear();
        self.apply(parse_manifest(source, &self.options))
    }

    fn clear(&mut self) {
        self.sections.clear();
        self.diagnostics.clear();
        self.last_seen_bank = None;
    }

    fn apply(&mut self, parsed: ParsedManifest) -> usize {
        self.sections = parsed.sections;
        self.diagnostics = parsed.diagnostics;
        self.last_seen_bank = parsed.last_seen_bank;
        self.current_index = 0;
        self.sections.len()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// All sections in manifest order.
    pub fn all(&self) -> &[SectionRange] {
        &self.sections
    }

    pub fn count(&self) -> usize {
        self.sections.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Move the cursor to `index`. Out-of-range indices leave it unchanged.
    pub fn set_current_index(&mut self, index: usize) {
        if index < self.count() {
            self.current_index = index;
        }
    }

    /// The section under the cursor, or `None` when there are no sections.
    pub fn current(&self) -> Option<&SectionRange> {
        self.sections.get(self.current_index)
    }

    /// Skipped lines and empty sections from the last load.
    pub fn diagnostics(&self) -> &[ManifestDiagnostic] {
        &self.diagnostics
    }

    /// Last valid bank number in the last loaded manifest.
    pub fn last_seen_bank(&self) -> Option<Bank> {
        self.last_seen_bank
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Advance the cursor, wrapping from the last section to the first.
    pub fn select_next(&mut self) -> Option<&SectionRange> {
        let count = self.count();
        if count == 0 {
            return None;
        }
        self.current_index = (self.current_index + 1) % count;
        self.current()
    }

    /// Move the cursor back, wrapping from the first section to the last.
    pub fn select_previous(&mut self) -> Option<&SectionRange> {
        let count = self.count();
        if count == 0 {
            return None;
        }
        self.current_index = (self.current_index + count - 1) % count;
        self.current()
    }

    /// First section with the given label, with its index.
    pub fn find(&self, label: &str) -> Option<(usize, &SectionRange)> {
        self.sections
            .iter()
            .enumerate()
            .find(|(_, section)| section.label() == label)
    }

    /// First section whose bank range contains `bank`, with its index.
    pub fn section_for_bank(&self, bank: Bank) -> Option<(usize, &SectionRange)> {
        self.sections
            .iter()
            .enumerate()
            .find(|(_, section)| section.contains(bank))
    }

    /// Serialize [`all`](Self::all) as a JSON array.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.sections)
    }
}
