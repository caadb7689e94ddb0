use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use super::{FileAccess, FileError};

/// In-memory file access backed by a shared map of path to contents.
///
/// Clone-friendly (cloning shares the same underlying files), so a test can
/// keep a handle while a collection owns another. Paths passed to `deny`
/// fail every read and write with `PermissionDenied`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileAccess {
    files: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
    denied: Arc<RwLock<HashSet<PathBuf>>>,
}

impl InMemoryFileAccess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file with the given contents, replacing any existing ones.
    pub fn insert(
        &self,
        path: impl Into<PathBuf>,
        bytes: impl Into<Vec<u8>>,
    ) -> Result<(), FileError> {
        let mut files = self
            .files
            .write()
            .map_err(|_| FileError::LockPoisoned("files write"))?;
        files.insert(path.into(), bytes.into());
        Ok(())
    }

    /// Current contents of a file, or None if it was never created.
    pub fn contents(&self, path: impl AsRef<Path>) -> Result<Option<Vec<u8>>, FileError> {
        let files = self
            .files
            .read()
            .map_err(|_| FileError::LockPoisoned("files read"))?;
        Ok(files.get(path.as_ref()).cloned())
    }

    /// Make every access to `path` fail until `allow` is called.
    pub fn deny(&self, path: impl Into<PathBuf>) -> Result<(), FileError> {
        let mut denied = self
            .denied
            .write()
            .map_err(|_| FileError::LockPoisoned("denied write"))?;
        denied.insert(path.into());
        Ok(())
    }

    pub fn allow(&self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let mut denied = self
            .denied
            .write()
            .map_err(|_| FileError::LockPoisoned("denied write"))?;
        denied.remove(path.as_ref());
        Ok(())
    }

    fn check_allowed(&self, path: &Path) -> Result<(), FileError> {
        let denied = self
            .denied
            .read()
            .map_err(|_| FileError::LockPoisoned("denied read"))?;
        if denied.contains(path) {
            return Err(FileError::Io {
                kind: io::ErrorKind::PermissionDenied,
                message: format!("permission denied: {}", path.display()),
            });
        }
        Ok(())
    }
}

impl FileAccess for InMemoryFileAccess {
    fn read_or_create(&self, path: &Path) -> Result<Vec<u8>, FileError> {
        self.check_allowed(path)?;
        let mut files = self
            .files
            .write()
            .map_err(|_| FileError::LockPoisoned("files write"))?;
        Ok(files.entry(path.to_path_buf()).or_default().clone())
    }

    fn overwrite(&self, path: &Path, bytes: &[u8]) -> Result<(), FileError> {
        self.check_allowed(path)?;
        let mut files = self
            .files
            .write()
            .map_err(|_| FileError::LockPoisoned("files write"))?;
        files.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}
