/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Decoded message types.
//!
//! This module provides:
//! - [`ResolvedField`]: A field enriched with its dictionary definition
//! - [`DecodedField`]: A resolved field or an opaque failure marker
//! - [`DecodedMessage`]: The ordered fields of one message plus its validation report
//!
//! Decoded messages borrow both the raw input and the dictionary.

use crate::checksum::field_byte_sum;
use fixdecode_core::{Classes, DecodeError, FieldTag, Validation, tags};
use fixdecode_dictionary::FieldDef;
use smallvec::SmallVec;
use std::borrow::Cow;

/// A field resolved against the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField<'a> {
    /// The parsed tag number.
    pub tag: FieldTag,
    /// The tag digits exactly as they appeared on the wire.
    pub tag_text: &'a str,
    /// The raw value.
    pub value: &'a str,
    /// Dictionary definition, absent for unknown tags.
    pub definition: Option<&'a FieldDef>,
    /// Label of the enumerated value, if the dictionary defines one.
    pub label: Option<&'a str>,
    /// Classifications of this field.
    pub classes: Classes,
    /// Annotation left by a structural validator.
    pub validation: Option<Validation>,
}

impl<'a> ResolvedField<'a> {
    /// Returns the field name, or `""` for unknown tags.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.definition.map_or("", |def| def.name.as_str())
    }

    /// Returns the field type name, or `""` for unknown tags.
    #[must_use]
    pub fn type_name(&self) -> &'a str {
        self.definition.map_or("", |def| def.field_type.as_str())
    }

    /// Returns true if this is an occurrence of `tag`.
    #[inline]
    #[must_use]
    pub fn is(&self, tag: FieldTag) -> bool {
        self.tag == tag
    }

    /// Length in bytes of the field's wire form, `tag=value<SOH>`.
    #[inline]
    #[must_use]
    pub fn wire_len(&self) -> usize {
        self.tag_text.len() + self.value.len() + 2
    }

    /// Sum of the bytes of the field's wire form.
    #[inline]
    #[must_use]
    pub fn byte_sum(&self) -> u32 {
        field_byte_sum(self.tag_text, self.value)
    }

    /// Returns the decoded value shown to readers: the enumerated label,
    /// or else the validation annotation.
    #[must_use]
    pub fn decoded_value(&self) -> Option<Cow<'a, str>> {
        match (&self.validation, self.label) {
            (Some(validation), _) => Some(Cow::Owned(validation.to_string())),
            (None, Some(label)) => Some(Cow::Borrowed(label)),
            (None, None) => None,
        }
    }

    /// Records a validator's annotation and its matching classification.
    pub(crate) fn annotate(&mut self, validation: Validation) {
        self.classes.insert(validation.classification());
        self.validation = Some(validation);
    }
}

/// One element of a decoded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedField<'a> {
    /// The token was decoded and resolved.
    Decoded(ResolvedField<'a>),
    /// The token failed re-validation. Carries no tag, value or metadata.
    Failed(DecodeError),
}

impl<'a> DecodedField<'a> {
    /// Returns true if the token was decoded.
    #[inline]
    #[must_use]
    pub const fn is_decoded(&self) -> bool {
        matches!(self, Self::Decoded(_))
    }

    /// Returns the resolved field, if decoded.
    #[inline]
    #[must_use]
    pub const fn as_resolved(&self) -> Option<&ResolvedField<'a>> {
        match self {
            Self::Decoded(field) => Some(field),
            Self::Failed(_) => None,
        }
    }

    #[inline]
    pub(crate) fn as_resolved_mut(&mut self) -> Option<&mut ResolvedField<'a>> {
        match self {
            Self::Decoded(field) => Some(field),
            Self::Failed(_) => None,
        }
    }

    /// Returns the tag, if decoded.
    #[inline]
    #[must_use]
    pub fn tag(&self) -> Option<FieldTag> {
        self.as_resolved().map(|field| field.tag)
    }
}

/// Outcome of the structural validators for one message.
///
/// A validator with no field to check, or one that is disabled, passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    /// BodyLength (9) matched the computed body length.
    pub body_length: bool,
    /// CheckSum (10) matched the computed checksum.
    pub checksum: bool,
}

impl ValidationReport {
    /// Returns true if both validators passed.
    #[inline]
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.body_length && self.checksum
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self {
            body_length: true,
            checksum: true,
        }
    }
}

/// Ordered fields of one decoded message.
///
/// Field order is the order of appearance in the raw message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage<'a> {
    fields: SmallVec<[DecodedField<'a>; 16]>,
    report: ValidationReport,
}

impl<'a> DecodedMessage<'a> {
    /// Creates a decoded message from its fields and validation report.
    #[must_use]
    pub fn new(fields: SmallVec<[DecodedField<'a>; 16]>, report: ValidationReport) -> Self {
        Self { fields, report }
    }

    /// Returns all fields, in order.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[DecodedField<'a>] {
        &self.fields
    }

    /// Returns an iterator over the fields.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, DecodedField<'a>> {
        self.fields.iter()
    }

    /// Returns the field at `index`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DecodedField<'a>> {
        self.fields.get(index)
    }

    /// Returns the number of fields, failure markers included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the message has no fields.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the first resolved occurrence of `tag`.
    ///
    /// Validators annotate the last occurrence of a repeated BodyLength or
    /// CheckSum; use [`last_field`](Self::last_field) to read that one.
    #[must_use]
    pub fn field(&self, tag: FieldTag) -> Option<&ResolvedField<'a>> {
        self.resolved().find(|field| field.is(tag))
    }

    /// Returns the last resolved occurrence of `tag`.
    #[must_use]
    pub fn last_field(&self, tag: FieldTag) -> Option<&ResolvedField<'a>> {
        self.fields
            .iter()
            .rev()
            .filter_map(DecodedField::as_resolved)
            .find(|field| field.is(tag))
    }

    /// Returns an iterator over the resolved fields, skipping failure markers.
    pub fn resolved(&self) -> impl Iterator<Item = &ResolvedField<'a>> {
        self.fields.iter().filter_map(DecodedField::as_resolved)
    }

    /// Returns the number of failure markers.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.fields.iter().filter(|field| !field.is_decoded()).count()
    }

    /// Returns true if every token was decoded.
    ///
    /// Presentation layers treat a message with any failure marker as
    /// undecodable as a whole.
    #[must_use]
    pub fn is_decoded(&self) -> bool {
        self.failures() == 0
    }

    /// Returns the MsgType (35) label, e.g. "ResendRequest".
    #[must_use]
    pub fn msg_type_label(&self) -> Option<&'a str> {
        self.field(tags::MSG_TYPE).and_then(|field| field.label)
    }

    /// Returns the validation report.
    #[inline]
    #[must_use]
    pub const fn report(&self) -> ValidationReport {
        self.report
    }
}

impl<'m, 'a> IntoIterator for &'m DecodedMessage<'a> {
    type Item = &'m DecodedField<'a>;
    type IntoIter = std::slice::Iter<'m, DecodedField<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
