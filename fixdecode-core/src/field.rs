/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Field tags and wire-level constants.
//!
//! This module provides:
//! - [`FieldTag`]: Type-safe wrapper for FIX field tag numbers
//! - [`tags`]: The distinguished tags the decoder treats specially
//! - [`SOH`]: The field delimiter

use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SOH (Start of Header) delimiter used in FIX messages.
pub const SOH: u8 = 0x01;

/// SOH as a `char`.
pub const SOH_CHAR: char = '\u{0001}';

/// Equals sign delimiter between tag and value.
pub const EQUALS: u8 = b'=';

/// Longest tag, in digits, that can fit a `u32`.
const MAX_TAG_DIGITS: usize = 10;

/// Distinguished tags.
pub mod tags {
    use super::FieldTag;

    /// BeginString (8). Always first, identifies the protocol version.
    pub const BEGIN_STRING: FieldTag = FieldTag::new(8);
    /// BodyLength (9). Always second.
    pub const BODY_LENGTH: FieldTag = FieldTag::new(9);
    /// CheckSum (10). Always last, exactly three digits.
    pub const CHECK_SUM: FieldTag = FieldTag::new(10);
    /// MsgType (35). First field of the body.
    pub const MSG_TYPE: FieldTag = FieldTag::new(35);
}

/// FIX field tag number.
///
/// Tags are positive integers that identify fields within a FIX message.
/// Standard tags are defined in the FIX specification (1-5000 range),
/// while user-defined tags use the 5001+ range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FieldTag(u32);

impl FieldTag {
    /// Creates a new field tag.
    #[inline]
    #[must_use]
    pub const fn new(tag: u32) -> Self {
        Self(tag)
    }

    /// Returns the raw tag number.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Parses a tag number from ASCII digits.
    ///
    /// Returns `None` if the bytes are empty, contain a non-digit, or
    /// overflow a `u32`.
    #[inline]
    #[must_use]
    pub fn parse_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() || bytes.len() > MAX_TAG_DIGITS {
            return None;
        }

        let mut result: u32 = 0;
        for &b in bytes {
            if !b.is_ascii_digit() {
                return None;
            }
            result = result.checked_mul(10)?.checked_add((b - b'0') as u32)?;
        }

        Some(Self(result))
    }
}

impl FromStr for FieldTag {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_bytes(s.as_bytes()).ok_or_else(|| DecodeError::InvalidTag(s.to_string()))
    }
}

impl From<u32> for FieldTag {
    fn from(tag: u32) -> Self {
        Self(tag)
    }
}

impl From<FieldTag> for u32 {
    fn from(tag: FieldTag) -> Self {
        tag.0
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
