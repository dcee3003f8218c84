/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! FIX message decoder.
//!
//! The decoder runs a linear pipeline over one raw message: tokenize, resolve
//! each token against the dictionary in a single left-to-right pass, then run
//! the BodyLength and CheckSum validators over the complete field sequence and
//! apply their verdicts. Structural mismatches are reported in the returned
//! message, never as errors.
//!
//! A decoder holds no per-message state. One decoder, or many decoders sharing
//! one dictionary, may be used from several threads at once.

use crate::config::DecoderConfig;
use crate::message::{DecodedField, DecodedMessage, ValidationReport};
use crate::resolver::FieldResolver;
use crate::tokenizer::tokenize;
use crate::validator::{BodyLengthValidator, CheckSumValidator, Validator, Verdict};
use fixdecode_core::DecodeError;
use fixdecode_dictionary::FieldDictionary;
use smallvec::SmallVec;
use tracing::debug;

/// Decodes raw FIX messages against a field dictionary.
#[derive(Debug)]
pub struct Decoder<'d, D: FieldDictionary + ?Sized> {
    dictionary: &'d D,
    config: DecoderConfig,
}

impl<'d, D: FieldDictionary + ?Sized> Decoder<'d, D> {
    /// Creates a decoder with the default configuration.
    ///
    /// # Arguments
    /// * `dictionary` - Dictionary used to resolve fields
    #[must_use]
    pub fn new(dictionary: &'d D) -> Self {
        Self::with_config(dictionary, DecoderConfig::default())
    }

    /// Creates a decoder with the given configuration.
    #[must_use]
    pub fn with_config(dictionary: &'d D, config: DecoderConfig) -> Self {
        Self { dictionary, config }
    }

    /// Sets whether to validate checksums during decoding.
    #[must_use]
    pub fn with_checksum_validation(mut self, validate: bool) -> Self {
        self.config.validate_checksum = validate;
        self
    }

    /// Sets whether to validate the body length during decoding.
    #[must_use]
    pub fn with_body_length_validation(mut self, validate: bool) -> Self {
        self.config.validate_body_length = validate;
        self
    }

    /// Returns the decoder configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes a raw message.
    ///
    /// Never fails: malformed tokens become failure markers and structural
    /// mismatches are recorded as annotations and in the
    /// [`ValidationReport`].
    ///
    /// # Example
    /// ```
    /// use fixdecode_dictionary::Dictionary;
    /// use fixdecode_tagvalue::Decoder;
    ///
    /// let dictionary = Dictionary::fix44();
    /// let message = Decoder::new(&dictionary).decode("8=FIX.4.4\x019=5\x0135=0\x0110=163\x01");
    /// assert_eq!(message.len(), 4);
    /// assert!(message.report().passed());
    /// assert_eq!(message.msg_type_label(), Some("Heartbeat"));
    /// ```
    pub fn decode<'a>(&self, raw: &'a str) -> DecodedMessage<'a>
    where
        'd: 'a,
    {
        let dictionary: &'a D = self.dictionary;
        let mut fields: SmallVec<[DecodedField<'a>; 16]> = FieldResolver::new(dictionary)
            .resolve_all(tokenize(raw), &self.config.begin_string_prefix)
            .collect();

        let body_length = self
            .config
            .validate_body_length
            .then(|| run(&BodyLengthValidator, &fields))
            .flatten();
        let checksum = self
            .config
            .validate_checksum
            .then(|| run(&CheckSumValidator, &fields))
            .flatten();

        let report = ValidationReport {
            body_length: body_length.as_ref().is_none_or(Verdict::passed),
            checksum: checksum.as_ref().is_none_or(Verdict::passed),
        };

        for verdict in body_length.into_iter().chain(checksum) {
            if let Some(field) = fields
                .get_mut(verdict.target)
                .and_then(DecodedField::as_resolved_mut)
            {
                field.annotate(verdict.validation);
            }
        }

        let message = DecodedMessage::new(fields, report);
        debug!(
            fields = message.len(),
            failures = message.failures(),
            body_length = report.body_length,
            checksum = report.checksum,
            "decoded message"
        );
        message
    }

    /// Decodes a raw message, rejecting input over the configured size limit.
    ///
    /// # Errors
    /// Returns `DecodeError::MessageTooLarge` if `raw` exceeds
    /// `max_message_size` bytes.
    pub fn try_decode<'a>(&self, raw: &'a str) -> Result<DecodedMessage<'a>, DecodeError>
    where
        'd: 'a,
    {
        if raw.len() > self.config.max_message_size {
            return Err(DecodeError::MessageTooLarge {
                size: raw.len(),
                max_size: self.config.max_message_size,
            });
        }
        Ok(self.decode(raw))
    }
}

fn run(validator: &dyn Validator, fields: &[DecodedField<'_>]) -> Option<Verdict> {
    let verdict = validator.validate(fields);
    match &verdict {
        Some(verdict) => debug!(
            validator = validator.name(),
            target = verdict.target,
            validation = %verdict.validation,
            "validated"
        ),
        None => debug!(validator = validator.name(), "nothing to validate"),
    }
    verdict
}
