use serde::{de::DeserializeOwned, Serialize};

use super::{Codec, CodecError};

/// Compact binary codec backed by `bitcode`.
///
/// Not human-readable; the format is only stable across the same bitcode
/// version and record layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitcodeCodec;

impl BitcodeCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for BitcodeCodec {
    fn encode<T: Serialize>(&self, records: &[T]) -> Result<Vec<u8>, CodecError> {
        ::bitcode::serialize(records).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<Vec<T>, CodecError> {
        ::bitcode::deserialize(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}
