//! A generic in-process record collection persisted as a single JSON array file.
//!
//! Records live in memory as an ordered sequence; predicates select them for
//! lookup, filtering and mutation. Nothing is written until the caller asks
//! the collection to `store` itself.

// Lets `#[derive(Keyed)]` expand to `jsondb::Keyed` inside this crate too.
extern crate self as jsondb;

mod codec;
mod collection;
mod error;
mod file;

pub use codec::{BitcodeCodec, Codec, CodecError, JsonCodec};
pub use collection::{Collection, Keyed};
pub use error::StoreError;
pub use file::{FileAccess, FileError, FsFileAccess, InMemoryFileAccess};

// Re-export the Keyed derive macro
pub use jsondb_macros::Keyed;
