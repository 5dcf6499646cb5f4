//! SectionRanges Tests - loading from disk and cursor behaviour

use presetbank::{MemoryFileSystem, SectionRange, SectionRanges};
use rstest::rstest;

use crate::helpers::manifest_fixtures::{
    LIBRARY_MANIFEST, NIRVANA_MANIFEST, assert_sections, write_manifest,
};

#[test]
fn test_load_from_disk() {
    let (_dir, path) = write_manifest(NIRVANA_MANIFEST);
    let mut ranges = SectionRanges::new();

    assert!(ranges.load(&path));
    assert_eq!(ranges.count(), 2);
    assert_sections(ranges.all(), &[("Nirvana", 3, 7), ("Clean Tones", 8, 8)]);
    assert_eq!(ranges.current().map(SectionRange::label), Some("Nirvana"));
}

#[test]
fn test_load_is_idempotent() {
    let (_dir, path) = write_manifest(LIBRARY_MANIFEST);
    let mut ranges = SectionRanges::new();

    assert!(ranges.load(&path));
    let first = ranges.all().to_vec();
    ranges.set_current_index(2);

    assert!(ranges.load(&path));
    assert_eq!(ranges.all(), first.as_slice());
    assert_eq!(ranges.current_index(), 0);
}

#[test]
fn test_load_nonexistent_path() {
    let dir = tempfile::TempDir::new().expect("create temp dir");
    let mut ranges = SectionRanges::new();

    assert!(!ranges.load(dir.path().join("missing.txt")));
    assert_eq!(ranges.count(), 0);
    assert!(ranges.current().is_none());
}

#[test]
fn test_failed_load_drops_previous_sections() {
    let (dir, path) = write_manifest(NIRVANA_MANIFEST);
    let mut ranges = SectionRanges::new();
    assert!(ranges.load(&path));

    assert!(!ranges.load(dir.path().join("gone.txt")));
    assert_eq!(ranges.count(), 0);
    assert!(ranges.all().is_empty());
}

#[test]
fn test_empty_file_yields_catch_all() {
    let (_dir, path) = write_manifest("");
    let mut ranges = SectionRanges::new();

    assert!(ranges.load(&path));
    assert_sections(ranges.all(), &[("All Banks", 1, 1)]);
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(2, 2)]
#[case(3, 0)]
#[case(usize::MAX, 0)]
fn test_set_current_index_bounds(#[case] requested: usize, #[case] expected: usize) {
    let mut ranges = SectionRanges::with_file_system(MemoryFileSystem::new());
    ranges.load_str(LIBRARY_MANIFEST);
    assert_eq!(ranges.count(), 3);

    ranges.set_current_index(requested);
    assert_eq!(ranges.current_index(), expected);
}

#[test]
fn test_set_current_index_at_count_keeps_prior_value() {
    let mut ranges = SectionRanges::with_file_system(MemoryFileSystem::new());
    ranges.load_str(LIBRARY_MANIFEST);
    ranges.set_current_index(1);

    ranges.set_current_index(ranges.count());
    assert_eq!(ranges.current_index(), 1);
}

#[test]
fn test_navigate_by_bank() {
    let mut ranges = SectionRanges::with_file_system(MemoryFileSystem::new());
    ranges.load_str(LIBRARY_MANIFEST);

    let (index, section) = ranges.section_for_bank(7).expect("bank 7 is in Leads");
    assert_eq!(section.label(), "Leads");
    ranges.set_current_index(index);
    assert_eq!(ranges.current().map(SectionRange::banks), Some(Some(6..=9)));
}

#[test]
fn test_default_path_through_memory_file_system() {
    let mut fs = MemoryFileSystem::new();
    fs.insert(presetbank::base::constants::DEFAULT_MANIFEST_PATH, NIRVANA_MANIFEST);
    let mut ranges = SectionRanges::with_file_system(fs);

    assert!(ranges.load_default());
    assert_sections(ranges.all(), &[("Nirvana", 3, 7), ("Clean Tones", 8, 8)]);
}
