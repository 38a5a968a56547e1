//! Core types for objkit
//!
//! This crate defines the shared vocabulary of the blob codec:
//! - [`ObjectHeader`] and [`CodeId`]: the header record
//! - [`BlobError`]: every failure the codec reports
//! - [`format`]: byte offsets and widths of the wire layout

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod format;
pub mod types;

pub use error::{BlobError, Result};
pub use types::{CodeId, ObjectHeader};
