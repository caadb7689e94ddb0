//! Key-based access for records that carry their own identity.

use super::Collection;

/// A record with a natural key.
///
/// Usually derived with `#[derive(Keyed)]`, which picks the field marked
/// `#[keyed(key)]` or else the field named `id`.
pub trait Keyed {
    type Key: PartialEq;

    fn key(&self) -> &Self::Key;
}

impl<T: Keyed, C, F> Collection<T, C, F> {
    /// The record with the given key.
    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.find_first(|record| record.key() == key)
    }

    pub fn contains_key(&self, key: &T::Key) -> bool {
        self.exists(|record| record.key() == key)
    }

    /// Insert or replace by the record's own key.
    ///
    /// Same contract as `add_or_update`: true if an existing record was replaced.
    pub fn upsert(&mut self, record: T) -> bool {
        match self.position(|existing| existing.key() == record.key()) {
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

    /// Append unless a record with the same key exists. True if appended.
    pub fn insert_unique(&mut self, record: T) -> bool {
        if self.contains_key(record.key()) {
            return false;
        }
        self.add(record)
    }

    /// Remove the record with the given key.
    pub fn delete(&mut self, key: &T::Key) -> Option<T> {
        self.remove(|record| record.key() == key)
    }
}
