//! Wire encoding for objkit
//!
//! This crate implements the binary wire format for blob objects: a fixed
//! metadata header followed by an opaque payload.
//!
//! ## Wire Layout
//!
//! | Offset | Size | Field | Encoding |
//! |--------|------|-------|----------|
//! | 0 | 1 | is_native_language | 0/1 |
//! | 1 | 4 | language_id | u32 BE |
//! | 5 | 4 | language_version_id | u32 BE |
//! | 9 | 4 | language_type_id | u32 BE |
//! | 13 | 4 | code_type_id | u32 BE |
//! | 17 | 2 | code_id length L | u16 BE |
//! | 19 | L | code_id | base64, standard, padded |
//! | 19+L | 1 | delimiter | `0x00` |
//! | 20+L | rest | payload | raw |
//!
//! There is no magic number, checksum or payload length: the payload runs to
//! the end of the buffer.
//!
//! ## Examples
//!
//! ```
//! use objkit_core::ObjectHeader;
//! use objkit_wire::{decode_blob, encode_blob};
//!
//! let header = ObjectHeader::new(true, 1, 2, 3, 4, "abc");
//! let bytes = encode_blob(&header, &[0xAA, 0xBB]).unwrap();
//! assert_eq!(&bytes[19..23], b"YWJj");
//!
//! let (decoded, payload) = decode_blob(&bytes).unwrap();
//! assert_eq!(decoded, header);
//! assert_eq!(payload, &[0xAA, 0xBB]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod blob;

// Re-export main types
pub use blob::{
    decode_blob, decode_blob_with, encode_blob, encode_blob_into, encode_blob_with, encoded_len,
    encoded_len_with, BlobObject, CodecOptions, DelimiterPolicy,
};
