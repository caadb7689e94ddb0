//! File access - the seam between a collection and wherever its bytes live.

mod fs;
mod in_memory;

use std::fmt;
use std::io;
use std::path::Path;

pub use fs::FsFileAccess;
pub use in_memory::InMemoryFileAccess;

/// Reads and overwrites the single backing file of a collection.
///
/// Implementations must release any handle they open before returning,
/// on success and on failure.
pub trait FileAccess {
    /// Read the whole file, creating it empty if it does not exist yet.
    ///
    /// A freshly created file yields an empty buffer.
    fn read_or_create(&self, path: &Path) -> Result<Vec<u8>, FileError>;

    /// Replace the file contents with `bytes`, creating it if absent.
    fn overwrite(&self, path: &Path, bytes: &[u8]) -> Result<(), FileError>;
}

/// Error type for file access operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    /// An I/O operation failed.
    Io { kind: io::ErrorKind, message: String },
    /// The lock guarding shared in-memory files was poisoned.
    LockPoisoned(&'static str),
}

impl FileError {
    /// The I/O error kind, if this is an I/O failure.
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            FileError::Io { kind, .. } => Some(*kind),
            FileError::LockPoisoned(_) => None,
        }
    }
}

impl From<io::Error> for FileError {
    fn from(err: io::Error) -> Self {
        FileError::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::Io { message, .. } => write!(f, "{}", message),
            FileError::LockPoisoned(operation) => {
                write!(f, "file lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for FileError {}
