//! Error types for blob encoding and decoding
//!
//! Every failure is terminal: it describes malformed or truncated input (or
//! an identifier that cannot be framed), never a transient condition. No
//! partial header is ever returned alongside an error.
//!
//! ## Error Codes (Canonical)
//!
//! | Code | Description |
//! |------|-------------|
//! | NilHeader | No header supplied to the encoder |
//! | CodeIdTooLong | Encoded code id does not fit the length prefix |
//! | InputTooShort | Empty input |
//! | DelimiterNotFound | No delimiter byte terminates the header |
//! | HeaderRegionTooShort | Fixed fields are cut off |
//! | LengthReadFailure | Length prefix is cut off |
//! | CodeIdOutOfBounds | Encoded code id runs past the input |
//! | CodeIdDecodeFailure | Encoded code id is not valid base64 |
//! | DelimiterMismatch | Byte after the code id is not the delimiter |

use thiserror::Error;

/// Blob codec error
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlobError {
    /// No header was supplied to the encoder
    #[error("header is nil")]
    NilHeader,

    /// Encoded code id exceeds the length prefix range
    #[error("encoded code id is {encoded_len} bytes, maximum is {max}")]
    CodeIdTooLong {
        /// Length of the base64 form
        encoded_len: usize,
        /// Largest accepted length
        max: usize,
    },

    /// Input is empty
    #[error("data is too short to contain an object header: {len} bytes")]
    InputTooShort {
        /// Input length
        len: usize,
    },

    /// Delimiter byte missing
    #[error("null packet delimiter not found")]
    DelimiterNotFound,

    /// Input ends inside the fixed header fields
    #[error("data is too short to contain a complete object header: {available} of {required} bytes")]
    HeaderRegionTooShort {
        /// Bytes available before the boundary
        available: usize,
        /// Bytes required
        required: usize,
    },

    /// Input ends inside the code id length prefix
    #[error("failed to read code id length: only {available} bytes")]
    LengthReadFailure {
        /// Input length
        available: usize,
    },

    /// Encoded code id runs past the end of the input
    #[error("code id of {len} bytes at offset {offset} exceeds input of {available} bytes")]
    CodeIdOutOfBounds {
        /// Offset of the encoded code id
        offset: usize,
        /// Declared encoded length
        len: usize,
        /// Input length
        available: usize,
    },

    /// Encoded code id is not valid base64
    #[error("failed to decode code id: {0}")]
    CodeIdDecodeFailure(String),

    /// Byte following the code id is not the delimiter
    #[error("expected null delimiter at offset {offset}, found 0x{found:02x}")]
    DelimiterMismatch {
        /// Expected delimiter offset
        offset: usize,
        /// Byte found there
        found: u8,
    },
}

/// Result type for blob codec operations
pub type Result<T> = std::result::Result<T, BlobError>;

impl BlobError {
    /// Canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            BlobError::NilHeader => "NilHeader",
            BlobError::CodeIdTooLong { .. } => "CodeIdTooLong",
            BlobError::InputTooShort { .. } => "InputTooShort",
            BlobError::DelimiterNotFound => "DelimiterNotFound",
            BlobError::HeaderRegionTooShort { .. } => "HeaderRegionTooShort",
            BlobError::LengthReadFailure { .. } => "LengthReadFailure",
            BlobError::CodeIdOutOfBounds { .. } => "CodeIdOutOfBounds",
            BlobError::CodeIdDecodeFailure(_) => "CodeIdDecodeFailure",
            BlobError::DelimiterMismatch { .. } => "DelimiterMismatch",
        }
    }

    /// Codec errors never succeed on retry.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Whether the input was cut off before a complete header
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            BlobError::InputTooShort { .. }
                | BlobError::HeaderRegionTooShort { .. }
                | BlobError::LengthReadFailure { .. }
                | BlobError::CodeIdOutOfBounds { .. }
        )
    }

    /// Whether the error was raised while encoding
    pub fn is_encode_error(&self) -> bool {
        matches!(self, BlobError::NilHeader | BlobError::CodeIdTooLong { .. })
    }
}
