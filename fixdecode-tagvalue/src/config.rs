/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Decoder configuration.

use fixdecode_core::DEFAULT_BEGIN_STRING_PREFIX;
use serde::{Deserialize, Serialize};

/// Configuration for a [`Decoder`](crate::Decoder).
///
/// Missing keys take their default when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Whether to check BodyLength (9).
    pub validate_body_length: bool,
    /// Whether to check CheckSum (10).
    pub validate_checksum: bool,
    /// Prefix stripped from BeginString to obtain the protocol version.
    pub begin_string_prefix: String,
    /// Maximum raw message size accepted by [`Decoder::try_decode`](crate::Decoder::try_decode).
    pub max_message_size: usize,
}

impl DecoderConfig {
    /// Creates a configuration with both validators enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validate_body_length: true,
            validate_checksum: true,
            begin_string_prefix: DEFAULT_BEGIN_STRING_PREFIX.to_string(),
            max_message_size: 1024 * 1024, // 1MB
        }
    }

    /// Sets whether to check BodyLength.
    #[must_use]
    pub const fn with_body_length_validation(mut self, validate: bool) -> Self {
        self.validate_body_length = validate;
        self
    }

    /// Sets whether to check CheckSum.
    #[must_use]
    pub const fn with_checksum_validation(mut self, validate: bool) -> Self {
        self.validate_checksum = validate;
        self
    }

    /// Sets the BeginString prefix.
    #[must_use]
    pub fn with_begin_string_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.begin_string_prefix = prefix.into();
        self
    }

    /// Sets the maximum message size.
    #[must_use]
    pub const fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_message_size = size;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}
