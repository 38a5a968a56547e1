//! Binary wire encoding for blob objects
//!
//! A blob is a fixed 17-byte header, a length-prefixed base64 code id, a
//! `0x00` delimiter and the raw payload. See [`objkit_core::format`] for the
//! exact byte layout.

mod decode;
mod encode;
mod options;

pub use decode::{decode_blob, decode_blob_with};
pub use encode::{encode_blob, encode_blob_into, encode_blob_with, encoded_len, encoded_len_with};
pub use options::{CodecOptions, DelimiterPolicy};

use objkit_core::{ObjectHeader, Result};
use serde::{Deserialize, Serialize};

/// A header together with an owned payload
///
/// Owned counterpart of the `(ObjectHeader, &[u8])` pair returned by
/// [`decode_blob`], for callers that outlive the input buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobObject {
    /// Metadata header
    pub header: ObjectHeader,
    /// Opaque payload
    pub payload: Vec<u8>,
}

impl BlobObject {
    /// Create a blob object
    pub fn new(header: ObjectHeader, payload: impl Into<Vec<u8>>) -> Self {
        BlobObject {
            header,
            payload: payload.into(),
        }
    }

    /// Encode with default options
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        encode_blob(&self.header, &self.payload)
    }

    /// Decode with default options, copying the payload
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with(&CodecOptions::default(), data)
    }

    /// Decode with explicit options, copying the payload
    pub fn from_bytes_with(options: &CodecOptions, data: &[u8]) -> Result<Self> {
        let (header, payload) = decode_blob_with(options, data)?;
        Ok(BlobObject::new(header, payload))
    }

    /// Size of the encoded form with default options
    pub fn encoded_len(&self) -> Result<usize> {
        encoded_len(&self.header, self.payload.len())
    }
}
