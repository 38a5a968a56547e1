//! Blob decoding
//!
//! Parses the fixed header and the base64 code id, then hands back the
//! payload as a slice of the input. The input is never copied or mutated.

use super::options::{CodecOptions, DelimiterPolicy};
use base64::Engine;
use byteorder::{BigEndian, ByteOrder};
use objkit_core::format::{
    delimiter_offset, offsets, CODE_ID_OFFSET, FIXED_HEADER_SIZE, PACKET_NULL_BYTE,
};
use objkit_core::{BlobError, CodeId, ObjectHeader, Result};

/// Decode a blob with default options
///
/// Returns the header and the payload, which borrows from `data`.
pub fn decode_blob(data: &[u8]) -> Result<(ObjectHeader, &[u8])> {
    decode_computed(data)
}

/// Decode a blob using the delimiter policy in `options`
pub fn decode_blob_with<'a>(
    options: &CodecOptions,
    data: &'a [u8],
) -> Result<(ObjectHeader, &'a [u8])> {
    match options.delimiter_policy {
        DelimiterPolicy::Computed => decode_computed(data),
        DelimiterPolicy::Scan => decode_scan(data),
    }
}

/// Delimiter offset derived from the length prefix, then verified.
fn decode_computed(data: &[u8]) -> Result<(ObjectHeader, &[u8])> {
    check_prefix(data)?;

    let encoded = code_id_slice(data)?;
    let delimiter = delimiter_offset(encoded.len());
    match data.get(delimiter) {
        None => return Err(BlobError::DelimiterNotFound),
        Some(&found) if found != PACKET_NULL_BYTE => {
            return Err(BlobError::DelimiterMismatch {
                offset: delimiter,
                found,
            })
        }
        Some(_) => {}
    }

    let header = read_header(data, decode_code_id(encoded)?);
    Ok((header, &data[delimiter + 1..]))
}

/// Delimiter is the first null byte after the length prefix.
///
/// The code id is still bounded by the length prefix; only the payload
/// start comes from the scan.
fn decode_scan(data: &[u8]) -> Result<(ObjectHeader, &[u8])> {
    check_prefix(data)?;

    let delimiter = data[CODE_ID_OFFSET..]
        .iter()
        .position(|&b| b == PACKET_NULL_BYTE)
        .map(|pos| CODE_ID_OFFSET + pos)
        .ok_or(BlobError::DelimiterNotFound)?;

    let encoded = code_id_slice(data)?;
    let header = read_header(data, decode_code_id(encoded)?);
    Ok((header, &data[delimiter + 1..]))
}

/// Input must hold the fixed fields and the length prefix.
fn check_prefix(data: &[u8]) -> Result<()> {
    if data.is_empty() {
        return Err(BlobError::InputTooShort { len: 0 });
    }
    if data.len() < FIXED_HEADER_SIZE {
        return Err(BlobError::HeaderRegionTooShort {
            available: data.len(),
            required: FIXED_HEADER_SIZE,
        });
    }
    if data.len() < CODE_ID_OFFSET {
        return Err(BlobError::LengthReadFailure {
            available: data.len(),
        });
    }
    Ok(())
}

/// Encoded code id named by the length prefix.
///
/// Caller guarantees `data` holds at least `CODE_ID_OFFSET` bytes.
fn code_id_slice(data: &[u8]) -> Result<&[u8]> {
    let len = BigEndian::read_u16(&data[offsets::CODE_ID_LEN..CODE_ID_OFFSET]) as usize;
    data.get(CODE_ID_OFFSET..CODE_ID_OFFSET + len)
        .ok_or(BlobError::CodeIdOutOfBounds {
            offset: CODE_ID_OFFSET,
            len,
            available: data.len(),
        })
}

fn decode_code_id(encoded: &[u8]) -> Result<CodeId> {
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map(CodeId::from)
        .map_err(|e| BlobError::CodeIdDecodeFailure(e.to_string()))
}

/// Fixed fields. Caller guarantees `data` holds at least `FIXED_HEADER_SIZE` bytes.
fn read_header(data: &[u8], code_id: CodeId) -> ObjectHeader {
    ObjectHeader {
        is_native_language: data[offsets::IS_NATIVE_LANGUAGE] != 0,
        language_id: BigEndian::read_u32(&data[offsets::LANGUAGE_ID..offsets::LANGUAGE_VERSION_ID]),
        language_version_id: BigEndian::read_u32(
            &data[offsets::LANGUAGE_VERSION_ID..offsets::LANGUAGE_TYPE_ID],
        ),
        language_type_id: BigEndian::read_u32(
            &data[offsets::LANGUAGE_TYPE_ID..offsets::CODE_TYPE_ID],
        ),
        code_type_id: BigEndian::read_u32(&data[offsets::CODE_TYPE_ID..offsets::CODE_ID_LEN]),
        code_id,
    }
}
