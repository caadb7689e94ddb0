use std::fmt;
use std::path::{Path, PathBuf};

use crate::codec::CodecError;
use crate::file::FileError;

/// Error returned by collection construction and persistence.
///
/// Query and mutation operations never fail; they report "no match" through
/// their return values instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing file could not be opened or created.
    Open { path: PathBuf, source: FileError },
    /// The backing file could not be overwritten.
    Write { path: PathBuf, source: FileError },
    /// The records could not be encoded for writing.
    Encode { path: PathBuf, source: CodecError },
}

impl StoreError {
    /// The backing file the failed operation was bound to.
    pub fn path(&self) -> &Path {
        match self {
            StoreError::Open { path, .. }
            | StoreError::Write { path, .. }
            | StoreError::Encode { path, .. } => path,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Open { path, source } => {
                write!(f, "couldn't read or create file {}: {}", path.display(), source)
            }
            StoreError::Write { path, source } => {
                write!(f, "can't open file for write {}: {}", path.display(), source)
            }
            StoreError::Encode { path, source } => {
                write!(f, "encoding records for {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Open { source, .. } | StoreError::Write { source, .. } => Some(source),
            StoreError::Encode { source, .. } => Some(source),
        }
    }
}
