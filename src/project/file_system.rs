//! Filesystem seam for manifest reads.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;

/// Read access to the filesystem holding the manifest.
///
/// A reader is opened for one load and dropped when the load returns.
pub trait FileSystem {
    type Reader: BufRead;

    fn open(&self, path: &Path) -> io::Result<Self::Reader>;
}

/// The host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    type Reader = BufReader<File>;

    fn open(&self, path: &Path) -> io::Result<Self::Reader> {
        File::open(path).map(BufReader::new)
    }
}

/// An in-memory filesystem of path -> file contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: FxHashMap<PathBuf, Arc<[u8]>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace a file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl AsRef<[u8]>) {
        self.files.insert(path.into(), Arc::from(contents.as_ref()));
    }

    pub fn remove(&mut self, path: &Path) -> bool {
        self.files.remove(path).is_some()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileSystem for MemoryFileSystem {
    type Reader = Cursor<Arc<[u8]>>;

    fn open(&self, path: &Path) -> io::Result<Self::Reader> {
        self.files
            .get(path)
            .map(|contents| Cursor::new(Arc::clone(contents)))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display())))
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    type Reader = F::Reader;

    fn open(&self, path: &Path) -> io::Result<Self::Reader> {
        (**self).open(path)
    }
}
