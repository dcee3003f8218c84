/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error types for the FixDecode FIX message decoder.
//!
//! This module provides a unified error hierarchy using `thiserror`. Note that
//! the decode pipeline itself is infallible: a malformed token becomes a
//! failure marker carrying a [`DecodeError`], and length/checksum mismatches are
//! reported as data on the decoded message rather than as errors.

use thiserror::Error;

/// Result type alias using [`FixDecodeError`] as the error type.
pub type Result<T> = std::result::Result<T, FixDecodeError>;

/// Top-level error type for all FixDecode operations.
#[derive(Debug, Error)]
pub enum FixDecodeError {
    /// Error while decoding a message.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error while building or loading a field dictionary.
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),
}

/// Errors that occur while decoding a FIX message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A `tag=value` candidate failed re-validation.
    #[error("invalid token at offset {offset} ({length} bytes)")]
    InvalidToken {
        /// Byte offset of the candidate within the raw message.
        offset: usize,
        /// Length of the candidate in bytes.
        length: usize,
    },

    /// Tag is not a valid tag number.
    #[error("invalid tag format: {0}")]
    InvalidTag(String),

    /// Message exceeds maximum allowed size.
    #[error("message too large: {size} bytes exceeds maximum {max_size}")]
    MessageTooLarge {
        /// Actual message size in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        max_size: usize,
    },
}

/// Errors that occur while building or loading a field dictionary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The dictionary document could not be parsed.
    #[error("failed to parse dictionary: {0}")]
    Parse(String),

    /// A field key is not a valid tag number.
    #[error("invalid tag key in dictionary: {0:?}")]
    InvalidTag(String),

    /// A field entry declares a tag different from its key.
    #[error("tag mismatch for key {key}: entry declares tag {declared}")]
    TagMismatch {
        /// Tag the entry is keyed under.
        key: u32,
        /// Tag declared inside the entry.
        declared: u32,
    },

    /// The dictionary could not be serialized.
    #[error("failed to serialize dictionary: {0}")]
    Serialize(String),
}
