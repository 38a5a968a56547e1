//! Blob encoding
//!
//! Writes the fixed header, the base64 code id with its length prefix, the
//! delimiter and finally the payload, verbatim.

use super::options::CodecOptions;
use base64::Engine;
use byteorder::{BigEndian, ByteOrder};
use objkit_core::format::{offsets, CODE_ID_OFFSET, PACKET_NULL_BYTE};
use objkit_core::{BlobError, CodeId, ObjectHeader, Result};

/// Encode a header and payload with default options
///
/// Fails with [`BlobError::CodeIdTooLong`] if the base64 form of the code id
/// does not fit the 16-bit length prefix.
pub fn encode_blob(header: &ObjectHeader, payload: &[u8]) -> Result<Vec<u8>> {
    encode_blob_with(&CodecOptions::default(), header, payload)
}

/// Encode a header and payload
pub fn encode_blob_with(
    options: &CodecOptions,
    header: &ObjectHeader,
    payload: &[u8],
) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_into(options, header, payload, &mut out)?;
    Ok(out)
}

/// Append an encoded blob to `out`, returning the number of bytes written
///
/// On error `out` is left untouched.
pub fn encode_blob_into(header: &ObjectHeader, payload: &[u8], out: &mut Vec<u8>) -> Result<usize> {
    encode_into(&CodecOptions::default(), header, payload, out)
}

/// Exact size of the encoded blob with default options, without encoding it
pub fn encoded_len(header: &ObjectHeader, payload_len: usize) -> Result<usize> {
    encoded_len_with(&CodecOptions::default(), header, payload_len)
}

/// Exact size of the blob [`encode_blob_with`] would produce
///
/// Applies the same code id limit, so it fails exactly when the encoder does.
pub fn encoded_len_with(
    options: &CodecOptions,
    header: &ObjectHeader,
    payload_len: usize,
) -> Result<usize> {
    let code_id_len = checked_code_id_len(&header.code_id, options.code_id_limit())?;
    Ok(CODE_ID_OFFSET + usize::from(code_id_len) + 1 + payload_len)
}

fn encode_into(
    options: &CodecOptions,
    header: &ObjectHeader,
    payload: &[u8],
    out: &mut Vec<u8>,
) -> Result<usize> {
    let prefix = checked_code_id_len(&header.code_id, options.code_id_limit())?;
    let code_id_len = usize::from(prefix);

    let total = CODE_ID_OFFSET + code_id_len + 1 + payload.len();
    out.reserve(total);

    let encoded = base64::engine::general_purpose::STANDARD.encode(header.code_id.as_bytes());
    debug_assert_eq!(encoded.len(), code_id_len);

    out.extend_from_slice(&fixed_header(header, prefix));
    out.extend_from_slice(encoded.as_bytes());
    out.push(PACKET_NULL_BYTE);
    out.extend_from_slice(payload);

    Ok(total)
}

/// Base64 length of the code id as its u16 prefix, checked against `limit`
///
/// `limit` never exceeds `u16::MAX`, so the narrowing cannot truncate.
fn checked_code_id_len(code_id: &CodeId, limit: usize) -> Result<u16> {
    let encoded_len = base64::encoded_len(code_id.len(), true).unwrap_or(usize::MAX);
    if encoded_len > limit {
        return Err(BlobError::CodeIdTooLong {
            encoded_len,
            max: limit,
        });
    }
    Ok(encoded_len as u16)
}

/// Fixed fields followed by the code id length prefix
fn fixed_header(header: &ObjectHeader, code_id_len: u16) -> [u8; CODE_ID_OFFSET] {
    let mut buf = [0u8; CODE_ID_OFFSET];
    buf[offsets::IS_NATIVE_LANGUAGE] = u8::from(header.is_native_language);
    BigEndian::write_u32(
        &mut buf[offsets::LANGUAGE_ID..offsets::LANGUAGE_VERSION_ID],
        header.language_id,
    );
    BigEndian::write_u32(
        &mut buf[offsets::LANGUAGE_VERSION_ID..offsets::LANGUAGE_TYPE_ID],
        header.language_version_id,
    );
    BigEndian::write_u32(
        &mut buf[offsets::LANGUAGE_TYPE_ID..offsets::CODE_TYPE_ID],
        header.language_type_id,
    );
    BigEndian::write_u32(
        &mut buf[offsets::CODE_TYPE_ID..offsets::CODE_ID_LEN],
        header.code_type_id,
    );
    BigEndian::write_u16(&mut buf[offsets::CODE_ID_LEN..CODE_ID_OFFSET], code_id_len);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use objkit_core::format::MAX_ENCODED_CODE_ID_LEN;

    fn sample_header() -> ObjectHeader {
        ObjectHeader::new(true, 1, 2, 3, 4, "abc")
    }

    #[test]
    fn test_encode_concrete_layout() {
        let bytes = encode_blob(&sample_header(), &[0xAA, 0xBB]).unwrap();

        let parts: [&[u8]; 9] = [
            &[0x01],
            &[0, 0, 0, 1],
            &[0, 0, 0, 2],
            &[0, 0, 0, 3],
            &[0, 0, 0, 4],
            &[0x00, 0x04],
            b"YWJj",
            &[0x00],
            &[0xAA, 0xBB],
        ];
        assert_eq!(bytes, parts.concat());
    }

    #[test]
    fn test_encode_false_flag_is_zero_byte() {
        let mut header = sample_header();
        header.is_native_language = false;
        let bytes = encode_blob(&header, &[]).unwrap();
        assert_eq!(bytes[0], 0x00);
    }

    #[test]
    fn test_encode_integers_big_endian() {
        let header = ObjectHeader::new(false, 0x0102_0304, u32::MAX, 0, 0xA0B0_C0D0, "");
        let bytes = encode_blob(&header, &[]).unwrap();
        assert_eq!(&bytes[1..5], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&bytes[5..9], &[0xFF; 4]);
        assert_eq!(&bytes[9..13], &[0x00; 4]);
        assert_eq!(&bytes[13..17], &[0xA0, 0xB0, 0xC0, 0xD0]);
    }

    #[test]
    fn test_encode_empty_payload_ends_at_delimiter() {
        let bytes = encode_blob(&sample_header(), &[]).unwrap();
        assert_eq!(bytes.len(), CODE_ID_OFFSET + 4 + 1);
        assert_eq!(bytes.last(), Some(&PACKET_NULL_BYTE));
    }

    #[test]
    fn test_encode_empty_code_id() {
        let header = ObjectHeader::new(true, 1, 1, 1, 1, "");
        let bytes = encode_blob(&header, b"xyz").unwrap();
        assert_eq!(&bytes[17..19], &[0, 0]);
        assert_eq!(bytes[19], PACKET_NULL_BYTE);
        assert_eq!(&bytes[20..], b"xyz");
    }

    #[test]
    fn test_encode_payload_copied_verbatim() {
        let payload: Vec<u8> = (0..=255).collect();
        let bytes = encode_blob(&sample_header(), &payload).unwrap();
        assert_eq!(&bytes[bytes.len() - 256..], payload.as_slice());
    }

    #[test]
    fn test_encoded_code_id_has_no_delimiter() {
        let header = ObjectHeader::new(true, 1, 2, 3, 4, vec![0u8; 33]);
        let bytes = encode_blob(&header, &[]).unwrap();
        let len = BigEndian::read_u16(&bytes[17..19]) as usize;
        assert!(!bytes[19..19 + len].contains(&PACKET_NULL_BYTE));
    }

    #[test]
    fn test_encode_largest_code_id() {
        // 49149 raw bytes -> 65532 base64 bytes, the largest padded length <= 65535
        let header = ObjectHeader::new(true, 1, 2, 3, 4, vec![b'x'; 49_149]);
        let bytes = encode_blob(&header, &[]).unwrap();
        assert_eq!(BigEndian::read_u16(&bytes[17..19]), 65_532);
        assert_eq!(bytes.len(), CODE_ID_OFFSET + 65_532 + 1);
    }

    #[test]
    fn test_encode_code_id_too_long() {
        // 49150 raw bytes -> 65536 base64 bytes
        let header = ObjectHeader::new(true, 1, 2, 3, 4, vec![b'x'; 49_150]);
        let err = encode_blob(&header, &[]).unwrap_err();
        assert_eq!(
            err,
            BlobError::CodeIdTooLong {
                encoded_len: 65_536,
                max: MAX_ENCODED_CODE_ID_LEN,
            }
        );
    }

    #[test]
    fn test_encode_with_custom_limit() {
        let opts = CodecOptions::new().max_encoded_code_id_len(8);
        let fits = ObjectHeader::new(true, 1, 2, 3, 4, "abcdef");
        assert!(encode_blob_with(&opts, &fits, &[]).is_ok());

        let too_long = ObjectHeader::new(true, 1, 2, 3, 4, "abcdefg");
        let err = encode_blob_with(&opts, &too_long, &[]).unwrap_err();
        assert!(matches!(
            err,
            BlobError::CodeIdTooLong {
                encoded_len: 12,
                max: 8
            }
        ));
    }

    #[test]
    fn test_encode_into_appends() {
        let mut out = vec![0xEE];
        let written = encode_blob_into(&sample_header(), &[0xAA], &mut out).unwrap();
        assert_eq!(written, out.len() - 1);
        assert_eq!(out[0], 0xEE);
        assert_eq!(&out[1..], encode_blob(&sample_header(), &[0xAA]).unwrap().as_slice());
    }

    #[test]
    fn test_encode_into_leaves_buffer_on_error() {
        let header = ObjectHeader::new(true, 1, 2, 3, 4, vec![0u8; 60_000]);
        let mut out = vec![1, 2, 3];
        assert!(encode_blob_into(&header, &[], &mut out).is_err());
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_encoded_len_with_honours_custom_limit() {
        let opts = CodecOptions::new().max_encoded_code_id_len(4);
        let header = ObjectHeader::new(true, 1, 2, 3, 4, "abcd");

        let expected = BlobError::CodeIdTooLong {
            encoded_len: 8,
            max: 4,
        };
        assert_eq!(encode_blob_with(&opts, &header, &[]).unwrap_err(), expected);
        assert_eq!(encoded_len_with(&opts, &header, 0).unwrap_err(), expected);
        assert_eq!(encoded_len(&header, 0).unwrap(), CODE_ID_OFFSET + 8 + 1);

        let fits = ObjectHeader::new(true, 1, 2, 3, 4, "abc");
        let bytes = encode_blob_with(&opts, &fits, &[0xAA]).unwrap();
        assert_eq!(encoded_len_with(&opts, &fits, 1).unwrap(), bytes.len());
    }

    #[test]
    fn test_prefix_at_limit_is_exact() {
        // Largest length that fits the limit is written unchanged as the prefix
        let opts = CodecOptions::new().max_encoded_code_id_len(12);
        let header = ObjectHeader::new(true, 1, 2, 3, 4, vec![b'z'; 9]);
        let bytes = encode_blob_with(&opts, &header, &[]).unwrap();
        assert_eq!(BigEndian::read_u16(&bytes[17..19]), 12);
        assert_eq!(
            checked_code_id_len(&CodeId::new(vec![0u8; 49_149]), MAX_ENCODED_CODE_ID_LEN),
            Ok(65_532)
        );
    }

    #[test]
    fn test_encoded_len_matches_output() {
        for payload_len in [0usize, 1, 17, 4096] {
            let payload = vec![7u8; payload_len];
            let bytes = encode_blob(&sample_header(), &payload).unwrap();
            assert_eq!(encoded_len(&sample_header(), payload_len).unwrap(), bytes.len());
        }
    }
}
