use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{FileAccess, FileError};

/// File access on the local filesystem.
///
/// Parent directories are never created. In atomic mode an overwrite goes
/// through a sibling `.tmp` file that is renamed over the target, so readers
/// never observe a half-written file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FsFileAccess {
    atomic: bool,
}

impl FsFileAccess {
    /// Truncate and write the target in place.
    pub fn new() -> Self {
        Self { atomic: false }
    }

    /// Write to a temp file and rename it over the target.
    pub fn atomic() -> Self {
        Self { atomic: true }
    }

    pub fn is_atomic(&self) -> bool {
        self.atomic
    }

    fn write_in_place(path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        file.write_all(bytes)?;
        file.flush()
    }

    fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
        let tmp = temp_path(path);
        let result = Self::write_temp(&tmp, bytes).and_then(|()| fs::rename(&tmp, path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result
    }

    fn write_temp(tmp: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = File::create(tmp)?;
        file.write_all(bytes)?;
        file.sync_all()
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl FileAccess for FsFileAccess {
    fn read_or_create(&self, path: &Path) -> Result<Vec<u8>, FileError> {
        match File::open(path) {
            Ok(mut file) => {
                let mut bytes = Vec::new();
                file.read_to_end(&mut bytes)?;
                debug!("read {} bytes from {}", bytes.len(), path.display());
                Ok(bytes)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("creating missing file {}", path.display());
                OpenOptions::new().create(true).append(true).open(path)?;
                Ok(Vec::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn overwrite(&self, path: &Path, bytes: &[u8]) -> Result<(), FileError> {
        if self.atomic {
            Self::write_atomic(path, bytes)?;
        } else {
            Self::write_in_place(path, bytes)?;
        }
        debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}
