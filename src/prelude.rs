//! Convenient imports for objkit.
//!
//! ```
//! use objkit::prelude::*;
//!
//! let codec = BlobCodec::with_options(CodecOptions::strict());
//! let blob = BlobObject::new(ObjectHeader::default(), vec![1, 2, 3]);
//! let bytes = codec.serialize_object(&blob).unwrap();
//! assert_eq!(codec.deserialize_object(&bytes).unwrap(), blob);
//! ```

// Main entry point
pub use crate::codec::BlobCodec;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::{BlobError, CodeId, ObjectHeader};

// Wire types
pub use crate::{BlobObject, CodecOptions, DelimiterPolicy};
