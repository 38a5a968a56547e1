//! Codec options
//!
//! Controls how the decoder locates the end of the header and how long an
//! encoded code id may be.

use objkit_core::format::MAX_ENCODED_CODE_ID_LEN;
use serde::{Deserialize, Serialize};

/// How the decoder finds the delimiter that ends the header section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DelimiterPolicy {
    /// Delimiter offset is computed from the length prefix and the byte
    /// there must be `0x00`. Zero bytes inside integer fields or the payload
    /// are harmless.
    #[default]
    Computed,
    /// Delimiter is the first `0x00` after the length prefix and the
    /// payload starts right after it, whatever the length prefix says.
    ///
    /// The scan starts at offset 19, not at the start of the buffer. A scan
    /// from offset 0 would stop at any zero byte in the fixed fields or the
    /// length prefix, so this policy does not reproduce such a decoder byte
    /// for byte.
    Scan,
}

/// Options for encoding and decoding blobs.
///
/// ```
/// use objkit_wire::{CodecOptions, DelimiterPolicy};
///
/// let opts = CodecOptions::new().max_encoded_code_id_len(1024);
/// assert_eq!(opts.delimiter_policy, DelimiterPolicy::Computed);
/// assert_eq!(opts.max_encoded_code_id_len, 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecOptions {
    /// Delimiter lookup used by the decoder
    pub delimiter_policy: DelimiterPolicy,
    /// Largest base64 code id accepted by the encoder, at most 65535
    pub max_encoded_code_id_len: usize,
}

impl CodecOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Computed delimiter, full length range
    pub fn strict() -> Self {
        CodecOptions {
            delimiter_policy: DelimiterPolicy::Computed,
            max_encoded_code_id_len: MAX_ENCODED_CODE_ID_LEN,
        }
    }

    /// Delimiter located by scanning from the end of the length prefix
    pub fn legacy() -> Self {
        CodecOptions {
            delimiter_policy: DelimiterPolicy::Scan,
            max_encoded_code_id_len: MAX_ENCODED_CODE_ID_LEN,
        }
    }

    /// Set the delimiter policy
    pub fn delimiter_policy(mut self, policy: DelimiterPolicy) -> Self {
        self.delimiter_policy = policy;
        self
    }

    /// Set the encoded code id limit, clamped to what the prefix can hold
    pub fn max_encoded_code_id_len(mut self, max: usize) -> Self {
        self.max_encoded_code_id_len = max.min(MAX_ENCODED_CODE_ID_LEN);
        self
    }

    /// Effective encoded code id limit
    pub(crate) fn code_id_limit(&self) -> usize {
        self.max_encoded_code_id_len.min(MAX_ENCODED_CODE_ID_LEN)
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::strict()
    }
}
