//! Collection - an ordered, in-memory record sequence bound to one backing file.
//!
//! The sequence in memory is the single source of truth. Mutations never touch
//! the file; only [`Collection::store`] writes it, through the collection's
//! codec and file access.
//!
//! ## Example
//!
//! ```ignore
//! use jsondb::Collection;
//!
//! #[derive(Clone, Serialize, Deserialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut users = Collection::<User>::open("users.json")?;
//! let jason = User { id: 21, name: "Jason".into(), age: 46 };
//! let updated = users.add_or_update(|u| u.id == 21, jason);
//! users.store()?;
//! ```

mod keyed;

use std::path::{Path, PathBuf};
use std::slice;

use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};

use crate::codec::{Codec, JsonCodec};
use crate::error::StoreError;
use crate::file::{FileAccess, FsFileAccess};

pub use keyed::Keyed;

/// A generic record collection persisted as a single encoded sequence.
///
/// Single-target operations scan in insertion order and act on the first
/// record the predicate accepts.
#[derive(Debug)]
pub struct Collection<T, C = JsonCodec, F = FsFileAccess> {
    path: PathBuf,
    records: Vec<T>,
    codec: C,
    files: F,
}

impl<T: DeserializeOwned> Collection<T> {
    /// Open a JSON collection on the local filesystem, creating the file if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_with(path, JsonCodec::default(), FsFileAccess::default())
    }
}

impl<T, C, F> Collection<T, C, F>
where
    T: DeserializeOwned,
    C: Codec,
    F: FileAccess,
{
    /// Open a collection with an explicit codec and file access.
    ///
    /// Fails only if the file cannot be read or created. Contents that do not
    /// decode are logged and treated as an empty collection.
    pub fn open_with(path: impl AsRef<Path>, codec: C, files: F) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let bytes = files.read_or_create(&path).map_err(|source| StoreError::Open {
            path: path.clone(),
            source,
        })?;

        let records = if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!("{} is empty, starting with no records", path.display());
            Vec::new()
        } else {
            match codec.decode(&bytes) {
                Ok(records) => records,
                Err(err) => {
                    warn!(
                        "problem decoding {}, returning empty collection: {}",
                        path.display(),
                        err
                    );
                    Vec::new()
                }
            }
        };

        debug!("loaded {} records from {}", records.len(), path.display());
        Ok(Self {
            path,
            records,
            codec,
            files,
        })
    }
}

impl<T, C, F> Collection<T, C, F>
where
    T: Serialize,
    C: Codec,
    F: FileAccess,
{
    /// Overwrite the backing file with the current sequence.
    ///
    /// The records are encoded before the file is touched, so an encode
    /// failure leaves the previous file intact. The in-memory sequence is
    /// never affected by a failed store.
    pub fn store(&self) -> Result<(), StoreError> {
        let bytes = self
            .codec
            .encode(&self.records)
            .map_err(|source| StoreError::Encode {
                path: self.path.clone(),
                source,
            })?;
        self.files
            .overwrite(&self.path, &bytes)
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        debug!("stored {} records to {}", self.records.len(), self.path.display());
        Ok(())
    }
}

impl<T, C, F> Collection<T, C, F> {
    /// The backing file this collection persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Consume the collection, returning its records without storing them.
    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    fn position(&self, predicate: impl Fn(&T) -> bool) -> Option<usize> {
        self.records.iter().position(predicate)
    }

    /// The first record matching the predicate.
    pub fn find_first(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.records.iter().find(|record| predicate(record))
    }

    /// Whether any record matches. Stops at the first match.
    pub fn exists(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.records.iter().any(predicate)
    }

    /// The full live sequence in insertion order.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// Append a record. Always returns true.
    pub fn add(&mut self, record: T) -> bool {
        self.records.push(record);
        true
    }

    /// Append unless a record already matches.
    ///
    /// Returns true if the record was appended, false if a match existed.
    pub fn add_if_unique(&mut self, predicate: impl Fn(&T) -> bool, record: T) -> bool {
        if self.exists(predicate) {
            return false;
        }
        self.add(record)
    }

    /// Upsert: replace the first match in place, or append if none matches.
    ///
    /// Returns true when an existing record was updated and false when the
    /// record was inserted. Neither outcome is a failure.
    pub fn add_or_update(&mut self, predicate: impl Fn(&T) -> bool, record: T) -> bool {
        match self.position(predicate) {
            Some(idx) => {
                self.records[idx] = record;
                true
            }
            None => {
                self.records.push(record);
                false
            }
        }
    }

    /// Replace the first match in place. Returns false if nothing matched.
    pub fn update(&mut self, predicate: impl Fn(&T) -> bool, record: T) -> bool {
        match self.position(predicate) {
            Some(idx) => {
                self.records[idx] = record;
                true
            }
            None => false,
        }
    }

    /// Remove the first match, shifting later records left.
    pub fn remove(&mut self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.position(predicate).map(|idx| self.records.remove(idx))
    }

    /// Remove every match and return how many were removed.
    ///
    /// Scans from the back so removing an index never shifts a record that
    /// has not been visited yet.
    pub fn remove_filter(&mut self, predicate: impl Fn(&T) -> bool) -> usize {
        let mut removed = 0;
        for idx in (0..self.records.len()).rev() {
            if predicate(&self.records[idx]) {
                self.records.remove(idx);
                removed += 1;
            }
        }
        removed
    }

    /// Drop every record. Always returns true.
    pub fn clear(&mut self) -> bool {
        self.records.clear();
        true
    }
}

impl<T: Clone, C, F> Collection<T, C, F> {
    /// Clones of every matching record, in insertion order.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Replace the first match with `transform(match)`, keeping its position.
    ///
    /// Returns false, without calling `transform`, if nothing matched.
    pub fn update_with(
        &mut self,
        predicate: impl Fn(&T) -> bool,
        transform: impl FnOnce(T) -> T,
    ) -> bool {
        match self.position(predicate) {
            Some(idx) => {
                self.records[idx] = transform(self.records[idx].clone());
                true
            }
            None => false,
        }
    }
}

impl<'a, T, C, F> IntoIterator for &'a Collection<T, C, F> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
