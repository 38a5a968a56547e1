//! Unified error types for objkit.
//!
//! This module groups the codec's detailed [`BlobError`] variants into a few
//! categories callers usually branch on, while keeping the original error
//! available as the source.

use objkit_core::BlobError;
use thiserror::Error;

/// All objkit errors.
///
/// None of them are retryable: each describes input that will fail the
/// same way every time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The header cannot be encoded (missing, or code id too long)
    #[error("invalid argument: {0}")]
    InvalidArgument(#[source] BlobError),

    /// Input ended before a complete header
    #[error("truncated blob: {0}")]
    Truncated(#[source] BlobError),

    /// Input is structurally malformed
    #[error("corrupt blob: {0}")]
    Corrupt(#[source] BlobError),
}

/// Result type for objkit operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Always false; retrying a codec error yields the same error.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Check if the input was cut short.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Error::Truncated(_))
    }

    /// Check if the input is malformed.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Error::Corrupt(_))
    }

    /// The underlying codec error.
    pub fn blob_error(&self) -> &BlobError {
        match self {
            Error::InvalidArgument(e) | Error::Truncated(e) | Error::Corrupt(e) => e,
        }
    }

    /// Canonical code of the underlying codec error.
    pub fn error_code(&self) -> &'static str {
        self.blob_error().error_code()
    }
}

// Convert from codec errors
impl From<BlobError> for Error {
    fn from(e: BlobError) -> Self {
        if e.is_encode_error() {
            Error::InvalidArgument(e)
        } else if e.is_truncation() {
            Error::Truncated(e)
        } else {
            Error::Corrupt(e)
        }
    }
}
