/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Field resolution against a dictionary.
//!
//! Resolution is a single left-to-right pass. The protocol version is carried
//! as fold state: it starts [`ProtocolVersion::Unknown`] and is set when
//! BeginString (8) is reached, before BeginString itself is classified. Fields
//! seen earlier are never classified as deprecated.

use crate::message::{DecodedField, ResolvedField};
use crate::tokenizer::RawPair;
use fixdecode_core::{Classes, Classification, DecodeError, ProtocolVersion, tags};
use fixdecode_dictionary::FieldDictionary;

/// Resolves raw pairs into decoded fields.
#[derive(Debug)]
pub struct FieldResolver<'a, D: FieldDictionary + ?Sized> {
    dictionary: &'a D,
}

impl<D: FieldDictionary + ?Sized> Clone for FieldResolver<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: FieldDictionary + ?Sized> Copy for FieldResolver<'_, D> {}

impl<'a, D: FieldDictionary + ?Sized> FieldResolver<'a, D> {
    /// Creates a resolver over the given dictionary.
    #[inline]
    #[must_use]
    pub const fn new(dictionary: &'a D) -> Self {
        Self { dictionary }
    }

    /// Resolves one pair under the given protocol version.
    ///
    /// Unknown tags resolve without a definition rather than failing.
    #[must_use]
    pub fn resolve(&self, pair: RawPair<'a>, version: &ProtocolVersion) -> ResolvedField<'a> {
        let dictionary: &'a D = self.dictionary;
        let definition = dictionary.lookup(pair.tag);

        let mut classes = Classes::new();
        if dictionary.is_system_field(pair.tag) {
            classes.insert(Classification::SystemField);
        }
        if let Some(def) = definition {
            if def.required {
                classes.insert(Classification::RequiredField);
            }
            if def.header {
                classes.insert(Classification::HeaderField);
            }
            if def
                .deprecated_since
                .as_deref()
                .is_some_and(|since| version.is_deprecated(since))
            {
                classes.insert(Classification::DeprecatedField);
            }
        }

        ResolvedField {
            tag: pair.tag,
            tag_text: pair.tag_text,
            value: pair.value,
            definition,
            label: definition.and_then(|def| def.label_for(pair.value)),
            classes,
            validation: None,
        }
    }

    /// Resolves a token stream in order, preserving failure markers.
    ///
    /// # Arguments
    /// * `tokens` - Tokens as produced by the tokenizer
    /// * `begin_string_prefix` - Prefix stripped from BeginString to obtain the version
    pub fn resolve_all<I>(
        self,
        tokens: I,
        begin_string_prefix: &str,
    ) -> impl Iterator<Item = DecodedField<'a>>
    where
        I: IntoIterator<Item = Result<RawPair<'a>, DecodeError>>,
    {
        tokens
            .into_iter()
            .scan(ProtocolVersion::Unknown, move |version, token| {
                Some(match token {
                    Ok(pair) => {
                        if pair.tag == tags::BEGIN_STRING {
                            *version =
                                ProtocolVersion::from_begin_string(pair.value, begin_string_prefix);
                        }
                        DecodedField::Decoded(self.resolve(pair, version))
                    }
                    Err(err) => DecodedField::Failed(err),
                })
            })
    }
}
