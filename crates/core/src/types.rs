//! Core types for blob objects
//!
//! This module defines the header carried in front of every blob payload:
//! - [`CodeId`]: Opaque identifier of the code stored in the blob
//! - [`ObjectHeader`]: Fixed metadata record preceding the payload

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Identifier of the code stored in a blob
///
/// Treated as raw bytes: the wire format base64-encodes it, so any byte
/// sequence (including NUL and invalid UTF-8) survives a round trip.
///
/// # Examples
///
/// ```
/// use objkit_core::types::CodeId;
///
/// let id = CodeId::from("policy-42");
/// assert_eq!(id.as_str(), Some("policy-42"));
/// assert_eq!(id.len(), 9);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CodeId(Vec<u8>);

impl CodeId {
    /// Create a code id from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        CodeId(bytes.into())
    }

    /// Raw bytes of the identifier
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The identifier as text, if it is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Lossy text rendering, replacing invalid UTF-8 sequences
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Number of raw bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the identifier is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the identifier, returning its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<&str> for CodeId {
    fn from(s: &str) -> Self {
        CodeId(s.as_bytes().to_vec())
    }
}

impl From<String> for CodeId {
    fn from(s: String) -> Self {
        CodeId(s.into_bytes())
    }
}

impl From<&[u8]> for CodeId {
    fn from(bytes: &[u8]) -> Self {
        CodeId(bytes.to_vec())
    }
}

impl From<Vec<u8>> for CodeId {
    fn from(bytes: Vec<u8>) -> Self {
        CodeId(bytes)
    }
}

impl AsRef<[u8]> for CodeId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for CodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

/// Metadata record preceding a blob payload
///
/// The four integers are opaque to the codec; callers assign their meaning.
///
/// # Examples
///
/// ```
/// use objkit_core::types::ObjectHeader;
///
/// let header = ObjectHeader::new(true, 1, 2, 3, 4, "abc");
/// assert!(header.is_native_language);
/// assert_eq!(header.code_type_id, 4);
/// assert_eq!(header.code_id.as_str(), Some("abc"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectHeader {
    /// Whether the code is written in the platform's native language
    pub is_native_language: bool,
    /// Language identifier
    pub language_id: u32,
    /// Language version identifier
    pub language_version_id: u32,
    /// Language type identifier
    pub language_type_id: u32,
    /// Code type identifier
    pub code_type_id: u32,
    /// Identifier of the stored code
    pub code_id: CodeId,
}

impl ObjectHeader {
    /// Create a new header
    pub fn new(
        is_native_language: bool,
        language_id: u32,
        language_version_id: u32,
        language_type_id: u32,
        code_type_id: u32,
        code_id: impl Into<CodeId>,
    ) -> Self {
        ObjectHeader {
            is_native_language,
            language_id,
            language_version_id,
            language_type_id,
            code_type_id,
            code_id: code_id.into(),
        }
    }
}
