//! Manifest file access.

mod error;
mod file_system;

pub use error::LoadError;
pub use file_system::{FileSystem, MemoryFileSystem, StdFileSystem};
