//! # objkit
//!
//! Binary codec for blob objects: a fixed metadata header followed by an
//! opaque payload.
//!
//! ## Quick Start
//!
//! ```
//! use objkit::prelude::*;
//!
//! let codec = BlobCodec::new();
//! let header = ObjectHeader::new(true, 1, 2, 3, 4, "policy-42");
//!
//! let bytes = codec.serialize_blob(Some(&header), b"payload")?;
//! let (decoded, payload) = codec.deserialize_blob(&bytes)?;
//!
//! assert_eq!(decoded, header);
//! assert_eq!(payload, b"payload");
//! # Ok::<(), objkit::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`objkit_core`] - header types, byte layout and [`BlobError`]
//! - [`objkit_wire`] - pure encode/decode functions
//! - [`BlobCodec`] - configured entry point with logging and grouped errors

#![warn(missing_docs)]

mod codec;
mod error;

pub mod prelude;

// Re-export main entry points
pub use codec::BlobCodec;
pub use error::{Error, Result};

// Re-export codec layers
pub use objkit_core::format;
pub use objkit_core::{BlobError, CodeId, ObjectHeader};
pub use objkit_wire::{
    decode_blob, decode_blob_with, encode_blob, encode_blob_into, encode_blob_with, encoded_len,
    encoded_len_with, BlobObject, CodecOptions, DelimiterPolicy,
};
