//! Byte layout of a serialized blob object.
//!
//! Every offset and width used by the encoder and decoder lives here so the
//! two sides cannot drift apart.
//!
//! ```text
//! offset  size  field
//! 0       1     is_native_language
//! 1       4     language_id          (u32 BE)
//! 5       4     language_version_id  (u32 BE)
//! 9       4     language_type_id     (u32 BE)
//! 13      4     code_type_id         (u32 BE)
//! 17      2     code_id length L     (u16 BE)
//! 19      L     code_id              (base64, standard alphabet, padded)
//! 19+L    1     delimiter            (0x00)
//! 20+L    ..    payload
//! ```

/// Byte terminating the header section.
pub const PACKET_NULL_BYTE: u8 = 0x00;

/// Width of the fixed fields: one flag byte followed by four u32s.
pub const FIXED_HEADER_SIZE: usize = 17;

/// Width of the encoded code id length prefix.
pub const LENGTH_PREFIX_SIZE: usize = 2;

/// Offset of the first encoded code id byte.
pub const CODE_ID_OFFSET: usize = FIXED_HEADER_SIZE + LENGTH_PREFIX_SIZE;

/// Largest encoded code id the length prefix can describe.
pub const MAX_ENCODED_CODE_ID_LEN: usize = u16::MAX as usize;

/// Field offsets within the fixed header.
pub mod offsets {
    /// `is_native_language` flag byte
    pub const IS_NATIVE_LANGUAGE: usize = 0;
    /// `language_id`
    pub const LANGUAGE_ID: usize = 1;
    /// `language_version_id`
    pub const LANGUAGE_VERSION_ID: usize = 5;
    /// `language_type_id`
    pub const LANGUAGE_TYPE_ID: usize = 9;
    /// `code_type_id`
    pub const CODE_TYPE_ID: usize = 13;
    /// Encoded code id length prefix
    pub const CODE_ID_LEN: usize = 17;
}

/// Offset of the delimiter for an encoded code id of `encoded_len` bytes.
#[inline]
pub const fn delimiter_offset(encoded_len: usize) -> usize {
    CODE_ID_OFFSET + encoded_len
}

/// Smallest possible blob: empty code id, delimiter, no payload.
pub const MIN_BLOB_SIZE: usize = delimiter_offset(0) + 1;
