//! Manifest fixtures and section assertions shared by integration tests.

use std::fs;
use std::path::PathBuf;

use presetbank::SectionRange;
use tempfile::TempDir;

/// The two-section manifest used throughout the docs.
pub const NIRVANA_MANIFEST: &str = "\
# Nirvana
-- Bank 3
preset_a.bin
-- Bank 7
# Clean Tones
-- Bank 8
";

/// A realistic manifest with comments, CRLF endings and a stray bad marker.
pub const LIBRARY_MANIFEST: &str = "# Nirvana\r\n\
-- Bank 1\r\n\
smells_like.bin\r\n\
lithium.bin\r\n\
-- Bank 2\r\n\
come_as_you_are.bin\r\n\
\r\n\
# Clean Tones\r\n\
-- Bank 3\r\n\
jazz_chorus.bin\r\n\
-- Bank ?\r\n\
-- Bank 5\r\n\
# Leads\r\n\
-- Bank 6\r\n\
-- Bank 9\r\n";

/// Write `contents` as `PresetList.txt` in a fresh temp directory.
///
/// The directory is deleted when the returned guard drops.
pub fn write_manifest(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("PresetList.txt");
    fs::write(&path, contents).expect("write manifest");
    (dir, path)
}

/// Compact `(label, start, end)` view of sections for assertions.
pub fn summarize(sections: &[SectionRange]) -> Vec<(String, Option<u32>, Option<u32>)> {
    sections
        .iter()
        .map(|s| (s.label().to_string(), s.start_bank(), s.end_bank()))
        .collect()
}

/// Assert that sections match `(label, start, end)` triples exactly.
pub fn assert_sections(sections: &[SectionRange], expected: &[(&str, u32, u32)]) {
    let expected: Vec<_> = expected
        .iter()
        .map(|&(label, start, end)| (label.to_string(), Some(start), Some(end)))
        .collect();
    assert_eq!(summarize(sections), expected);
}
