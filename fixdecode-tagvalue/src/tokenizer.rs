/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Tag=value tokenizer.
//!
//! The tokenizer scans a raw message for every non-overlapping
//! `digits=value` candidate, left to right, then re-validates each candidate on
//! its own. Text between candidates is skipped. A candidate that fails
//! re-validation yields one [`DecodeError::InvalidToken`] at its position, so a
//! single bad field never hides the rest of the message.
//!
//! A value runs until SOH, `|`, `;` or the end of input; the trailing SOH is
//! optional.

use fixdecode_core::{DecodeError, FieldTag, SOH_CHAR};
use memchr::memmem;
use regex::{Match, Matches, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::{trace, warn};

/// Candidate scan over the whole message.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)=([^|;\x01]*)").expect("token pattern is a valid regex")
});

/// Anchored re-validation of a single candidate.
static EXACT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)=([^|;\x01]*)$").expect("token pattern is a valid regex")
});

/// A `tag=value` pair borrowed from the raw message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPair<'a> {
    /// The parsed tag number.
    pub tag: FieldTag,
    /// The tag digits exactly as they appear on the wire.
    pub tag_text: &'a str,
    /// The raw value (without delimiters).
    pub value: &'a str,
}

/// Lazy iterator over the tokens of a raw message.
///
/// Created by [`tokenize`].
#[derive(Debug)]
pub struct Tokenizer<'a> {
    candidates: Matches<'static, 'a>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over the given message.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            candidates: TOKEN.find_iter(input),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<RawPair<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.candidates.next()?;
        let token = revalidate(candidate);
        match &token {
            Ok(pair) => trace!(tag = %pair.tag, value = pair.value, "token"),
            Err(err) => warn!(%err, token = candidate.as_str(), "rejected token candidate"),
        }
        Some(token)
    }
}

/// Tokenizes a raw FIX message.
///
/// # Example
/// ```
/// use fixdecode_tagvalue::tokenize;
///
/// let tags: Vec<u32> = tokenize("8=FIX.4.4\x019=5\x0135=0\x01")
///     .filter_map(Result::ok)
///     .map(|pair| pair.tag.value())
///     .collect();
/// assert_eq!(tags, vec![8, 9, 35]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Tokenizer<'_> {
    Tokenizer::new(input)
}

/// Checks a single candidate against the grammar and parses its tag.
fn revalidate(candidate: Match<'_>) -> Result<RawPair<'_>, DecodeError> {
    let text = candidate.as_str();
    let invalid = || DecodeError::InvalidToken {
        offset: candidate.start(),
        length: text.len(),
    };

    let captures = EXACT_TOKEN.captures(text).ok_or_else(invalid)?;
    let (tag_text, value) = match (captures.get(1), captures.get(2)) {
        (Some(tag), Some(value)) => (tag.as_str(), value.as_str()),
        _ => return Err(invalid()),
    };
    let tag = FieldTag::parse_bytes(tag_text.as_bytes()).ok_or_else(invalid)?;

    Ok(RawPair {
        tag,
        tag_text,
        value,
    })
}

/// Replaces a visible field delimiter (such as `|` or `^A`) with SOH.
///
/// Returns the input unchanged, without allocating, when the delimiter does
/// not occur or is empty.
#[must_use]
pub fn normalize_delimiter<'a>(input: &'a str, delimiter: &str) -> Cow<'a, str> {
    if delimiter.is_empty() || memmem::find(input.as_bytes(), delimiter.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }

    let mut normalized = String::with_capacity(input.len());
    let mut last = 0;
    for start in memmem::find_iter(input.as_bytes(), delimiter.as_bytes()) {
        if start < last {
            continue;
        }
        normalized.push_str(&input[last..start]);
        normalized.push(SOH_CHAR);
        last = start + delimiter.len();
    }
    normalized.push_str(&input[last..]);
    Cow::Owned(normalized)
}
