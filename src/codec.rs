//! BlobCodec - configured entry point for serializing blob objects.

use crate::error::{Error, Result};
use objkit_core::{BlobError, ObjectHeader};
use objkit_wire::{decode_blob_with, encode_blob_with, BlobObject, CodecOptions};
use tracing::{debug, trace};

/// Serializes and deserializes blob objects.
///
/// Holds only its [`CodecOptions`]; every call is independent, so a single
/// codec can be shared across threads.
///
/// # Example
///
/// ```
/// use objkit::prelude::*;
///
/// let codec = BlobCodec::new();
/// let header = ObjectHeader::new(true, 1, 2, 3, 4, "abc");
///
/// let bytes = codec.serialize_blob(Some(&header), &[0xAA, 0xBB])?;
/// let (decoded, payload) = codec.deserialize_blob(&bytes)?;
/// assert_eq!(decoded, header);
/// assert_eq!(payload, &[0xAA, 0xBB]);
/// # Ok::<(), objkit::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlobCodec {
    options: CodecOptions,
}

impl BlobCodec {
    /// Codec with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec with explicit options.
    pub fn with_options(options: CodecOptions) -> Self {
        BlobCodec { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Serialize a header and payload.
    ///
    /// Fails with [`BlobError::NilHeader`] when `header` is `None`.
    pub fn serialize_blob(&self, header: Option<&ObjectHeader>, data: &[u8]) -> Result<Vec<u8>> {
        let header = header.ok_or_else(|| {
            debug!("Refusing to serialize blob without a header");
            Error::from(BlobError::NilHeader)
        })?;

        match encode_blob_with(&self.options, header, data) {
            Ok(bytes) => {
                trace!(
                    code_id_len = header.code_id.len(),
                    payload_len = data.len(),
                    encoded_len = bytes.len(),
                    "Serialized blob"
                );
                Ok(bytes)
            }
            Err(e) => {
                debug!(error = %e, code = e.error_code(), "Failed to serialize blob");
                Err(e.into())
            }
        }
    }

    /// Deserialize a blob.
    ///
    /// The returned payload borrows from `data`.
    pub fn deserialize_blob<'a>(&self, data: &'a [u8]) -> Result<(ObjectHeader, &'a [u8])> {
        match decode_blob_with(&self.options, data) {
            Ok((header, payload)) => {
                trace!(
                    input_len = data.len(),
                    payload_len = payload.len(),
                    "Deserialized blob"
                );
                Ok((header, payload))
            }
            Err(e) => {
                debug!(
                    error = %e,
                    code = e.error_code(),
                    input_len = data.len(),
                    policy = ?self.options.delimiter_policy,
                    "Failed to deserialize blob"
                );
                Err(e.into())
            }
        }
    }

    /// Serialize an owned blob object.
    pub fn serialize_object(&self, blob: &BlobObject) -> Result<Vec<u8>> {
        self.serialize_blob(Some(&blob.header), &blob.payload)
    }

    /// Deserialize into an owned blob object, copying the payload.
    pub fn deserialize_object(&self, data: &[u8]) -> Result<BlobObject> {
        let (header, payload) = self.deserialize_blob(data)?;
        Ok(BlobObject::new(header, payload))
    }
}
