//! Codecs - turn a record sequence into the bytes of the backing file and back.
//!
//! A collection is generic over its codec so the on-disk format can be swapped
//! without touching the query and mutation code. `JsonCodec` is the default.

mod bitcode;
mod json;

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

pub use self::bitcode::BitcodeCodec;
pub use self::json::JsonCodec;

/// Serialization of a whole record sequence.
pub trait Codec {
    /// Encode the full sequence, preserving order.
    fn encode<T: Serialize>(&self, records: &[T]) -> Result<Vec<u8>, CodecError>;

    /// Decode a full sequence previously produced by `encode`.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<Vec<T>, CodecError>;
}

/// Error type for codec operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The records could not be serialized.
    Encode(String),
    /// The bytes are not a valid encoded sequence.
    Decode(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Encode(msg) => write!(f, "encode error: {}", msg),
            CodecError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

impl std::error::Error for CodecError {}
