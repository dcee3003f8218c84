/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! JSON-lines rendering of decoded messages.
//!
//! Each decoded field renders as one JSON object per line with the keys
//! `FieldID`, `Value`, `FieldName`, `FieldType`, followed by either
//! `DecodedValue` (enumeration label or validation annotation) or `Classes`
//! (comma-separated classifications).
//!
//! A message containing any failure marker is undecodable as a whole and
//! renders as [`DECODING_FAILED`].

use fixdecode_tagvalue::{DecodedMessage, ResolvedField};
use serde::Serialize;
use std::borrow::Cow;

/// Rendering of a message with at least one failure marker.
pub const DECODING_FAILED: &str = "Decoding failed";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct FieldLine<'a> {
    #[serde(rename = "FieldID")]
    field_id: &'a str,
    value: &'a str,
    field_name: &'a str,
    field_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    decoded_value: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    classes: Option<String>,
}

impl<'a> From<&ResolvedField<'a>> for FieldLine<'a> {
    fn from(field: &ResolvedField<'a>) -> Self {
        let decoded_value = field.decoded_value();
        let classes = decoded_value
            .is_none()
            .then(|| field.classes.to_string());
        Self {
            field_id: field.tag_text,
            value: field.value,
            field_name: field.name(),
            field_type: field.type_name(),
            decoded_value,
            classes,
        }
    }
}

/// Renders one resolved field as a single JSON object.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_field(field: &ResolvedField<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string(&FieldLine::from(field))
}

/// Renders a decoded message as JSON lines.
///
/// An empty message renders as an empty string.
///
/// # Errors
/// Returns an error if serialization fails.
///
/// # Example
/// ```
/// use fixdecode::dictionary::Dictionary;
/// use fixdecode::render::render;
/// use fixdecode::tagvalue::Decoder;
///
/// let dictionary = Dictionary::fix44();
/// let message = Decoder::new(&dictionary).decode("35=0\x01");
/// assert_eq!(
///     render(&message).unwrap(),
///     r#"{"FieldID":"35","Value":"0","FieldName":"MsgType","FieldType":"STRING","DecodedValue":"Heartbeat"}"#
/// );
/// ```
pub fn render(message: &DecodedMessage<'_>) -> Result<String, serde_json::Error> {
    if !message.is_decoded() {
        return Ok(DECODING_FAILED.to_string());
    }

    let lines = message
        .resolved()
        .map(render_field)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}
