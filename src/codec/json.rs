use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use super::{Codec, CodecError};

/// JSON array codec.
///
/// Writes an indented array followed by a newline by default, so the backing
/// file stays readable and diff-friendly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonCodec {
    indent: Option<Vec<u8>>,
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::with_indent(2)
    }
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent nested values by `width` spaces.
    pub fn with_indent(width: usize) -> Self {
        Self {
            indent: Some(vec![b' '; width]),
        }
    }

    /// Write the whole array on a single line.
    pub fn compact() -> Self {
        Self { indent: None }
    }
}

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, records: &[T]) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::new();
        match &self.indent {
            Some(indent) => {
                let formatter = PrettyFormatter::with_indent(indent);
                let mut ser = Serializer::with_formatter(&mut buf, formatter);
                records
                    .serialize(&mut ser)
                    .map_err(|e| CodecError::Encode(e.to_string()))?;
            }
            None => {
                serde_json::to_writer(&mut buf, records)
                    .map_err(|e| CodecError::Encode(e.to_string()))?;
            }
        }
        buf.push(b'\n');
        Ok(buf)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<Vec<T>, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}
