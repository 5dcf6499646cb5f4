//! Error types for manifest loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a manifest.
///
/// Malformed content is never an error; it is reported through
/// [`ManifestDiagnostic`](crate::parser::ManifestDiagnostic)s instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The manifest could not be opened for reading.
    #[error("cannot open manifest {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Path of the manifest that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. } => path,
        }
    }
}
