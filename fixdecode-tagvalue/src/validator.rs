/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Structural validators.
//!
//! Validators are pure: they read the decoded fields and return a [`Verdict`]
//! naming the one field to annotate. The decoder applies verdicts. A validator
//! whose target field is absent returns `None`, which counts as a pass.
//!
//! Failure markers have no wire form and are ignored by both validators.

use crate::checksum::format_checksum;
use crate::message::{DecodedField, ResolvedField};
use fixdecode_core::{Validation, tags};

/// Result of a validator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Index of the field to annotate.
    pub target: usize,
    /// Annotation for the target field.
    pub validation: Validation,
}

impl Verdict {
    /// Returns true if validation passed.
    #[inline]
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.validation.is_valid()
    }
}

/// Whole-message structural validator.
pub trait Validator {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Validates the fields, returning `None` when there is nothing to check.
    fn validate(&self, fields: &[DecodedField<'_>]) -> Option<Verdict>;
}

/// Checks BodyLength (9) against the byte count of the body.
///
/// The body is every field except BeginString (8), BodyLength (9) and
/// CheckSum (10), each counted as `tag=value<SOH>`. If BodyLength repeats,
/// the last occurrence is checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyLengthValidator;

impl Validator for BodyLengthValidator {
    fn name(&self) -> &'static str {
        "body-length"
    }

    fn validate(&self, fields: &[DecodedField<'_>]) -> Option<Verdict> {
        let mut target = None;
        let mut length = 0usize;
        for (index, field) in resolved(fields) {
            match field.tag {
                tags::BODY_LENGTH => target = Some((index, field.value)),
                tags::BEGIN_STRING | tags::CHECK_SUM => {}
                _ => length += field.wire_len(),
            }
        }

        let (target, declared) = target?;
        let validation = if parse_length(declared) == Some(length) {
            Validation::Valid
        } else {
            Validation::Invalid {
                expected: itoa::Buffer::new().format(length).to_string(),
            }
        };

        Some(Verdict { target, validation })
    }
}

/// Checks CheckSum (10) against the byte sum of every other field.
///
/// If CheckSum repeats, the last occurrence is checked and none are summed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckSumValidator;

impl Validator for CheckSumValidator {
    fn name(&self) -> &'static str {
        "checksum"
    }

    fn validate(&self, fields: &[DecodedField<'_>]) -> Option<Verdict> {
        let mut target = None;
        let mut sum = 0u32;
        for (index, field) in resolved(fields) {
            if field.is(tags::CHECK_SUM) {
                target = Some((index, field.value));
            } else {
                sum = sum.wrapping_add(field.byte_sum());
            }
        }

        let (target, declared) = target?;
        let expected = format_checksum((sum % 256) as u8);
        let validation = if declared.as_bytes() == expected {
            Validation::Valid
        } else {
            Validation::Invalid {
                expected: expected.iter().map(|&digit| digit as char).collect(),
            }
        };

        Some(Verdict { target, validation })
    }
}

fn resolved<'f, 'a>(
    fields: &'f [DecodedField<'a>],
) -> impl Iterator<Item = (usize, &'f ResolvedField<'a>)> {
    fields
        .iter()
        .enumerate()
        .filter_map(|(index, field)| field.as_resolved().map(|field| (index, field)))
}

/// Parses a declared length; anything other than plain ASCII digits fails.
fn parse_length(value: &str) -> Option<usize> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::calculate_checksum;
    use crate::resolver::FieldResolver;
    use crate::tokenizer::tokenize;
    use fixdecode_core::{DEFAULT_BEGIN_STRING_PREFIX, SOH};
    use fixdecode_dictionary::Dictionary;

    const RESEND_REQUEST: &str = "8=FIX.4.4\x019=74\x0135=2\x0149=CNX\x0134=8263336\x01\
        52=20180126-07:39:59.683\x0156=imdstream\x0116=0\x017=12812\x0110=036\x01";

    fn decode<'a>(dict: &'a Dictionary, raw: &'a str) -> Vec<DecodedField<'a>> {
        FieldResolver::new(dict)
            .resolve_all(tokenize(raw), DEFAULT_BEGIN_STRING_PREFIX)
            .collect()
    }

    #[test]
    fn test_body_length_valid() {
        let dict = Dictionary::fix44();
        let fields = decode(&dict, RESEND_REQUEST);
        let verdict = BodyLengthValidator.validate(&fields).unwrap();

        assert_eq!(verdict.target, 1);
        assert_eq!(verdict.validation, Validation::Valid);
        assert!(verdict.passed());
    }

    #[test]
    fn test_body_length_mismatch() {
        let dict = Dictionary::fix44();
        let raw = RESEND_REQUEST.replace("9=74", "9=88");
        let fields = decode(&dict, &raw);
        let verdict = BodyLengthValidator.validate(&fields).unwrap();

        assert!(!verdict.passed());
        assert_eq!(verdict.validation.to_string(), "Invalid (expected 74)");
    }

    #[test]
    fn test_body_length_excludes_begin_string_body_length_and_checksum() {
        let dict = Dictionary::fix44();
        // Only 35=0<SOH> (5 bytes) counts, whatever the other three hold.
        let short = "8=FIX.4.4\x019=5\x0135=0\x0110=000\x01";
        let long = "8=FIXT.1.1.EXTENDED\x019=5\x0135=0\x0110=999\x01";

        for raw in [short, long] {
            let fields = decode(&dict, raw);
            let verdict = BodyLengthValidator.validate(&fields).unwrap();
            assert_eq!(verdict.validation, Validation::Valid, "{raw:?}");
        }
    }

    #[test]
    fn test_body_length_excludes_zero_padded_tags() {
        let dict = Dictionary::fix44();
        let fields = decode(&dict, "8=FIX.4.4\x010009=5\x0135=0\x01");
        let verdict = BodyLengthValidator.validate(&fields).unwrap();
        assert_eq!(verdict.target, 1);
        assert_eq!(verdict.validation, Validation::Valid);

        let fields = decode(&dict, "8=FIX.4.4\x019=5\x0135=0\x010010=163\x01");
        assert!(BodyLengthValidator.validate(&fields).unwrap().passed());
        assert!(CheckSumValidator.validate(&fields).unwrap().passed());
    }

    #[test]
    fn test_body_length_counts_tag_text_as_written() {
        let dict = Dictionary::fix44();
        let fields = decode(&dict, "8=FIX.4.4\x019=6\x01035=0\x01");
        assert_eq!(
            BodyLengthValidator.validate(&fields).unwrap().validation,
            Validation::Valid
        );
    }

    #[test]
    fn test_body_length_non_numeric_is_mismatch() {
        let dict = Dictionary::fix44();
        for declared in ["abc", "", "+5", "-5", "5 "] {
            let raw = format!("8=FIX.4.4\x019={declared}\x0135=0\x01");
            let fields = decode(&dict, &raw);
            let verdict = BodyLengthValidator.validate(&fields).unwrap();
            assert_eq!(
                verdict.validation,
                Validation::Invalid {
                    expected: "5".to_string()
                },
                "declared {declared:?}"
            );
        }
    }

    #[test]
    fn test_body_length_absent_is_vacuous() {
        let dict = Dictionary::fix44();
        let fields = decode(&dict, "8=FIX.4.4\x0135=0\x01");
        assert!(BodyLengthValidator.validate(&fields).is_none());
        assert!(BodyLengthValidator.validate(&[]).is_none());
    }

    #[test]
    fn test_checksum_valid() {
        let dict = Dictionary::fix44();
        let fields = decode(&dict, RESEND_REQUEST);
        let verdict = CheckSumValidator.validate(&fields).unwrap();

        assert_eq!(verdict.target, 9);
        assert!(verdict.passed());
    }

    #[test]
    fn test_checksum_follows_body_length_change() {
        let dict = Dictionary::fix44();
        let raw = RESEND_REQUEST.replace("9=74", "9=88");
        let fields = decode(&dict, &raw);
        let verdict = CheckSumValidator.validate(&fields).unwrap();

        assert_eq!(verdict.validation.to_string(), "Invalid (expected 041)");
    }

    #[test]
    fn test_checksum_single_byte_mutation() {
        let dict = Dictionary::fix44();
        let raw = RESEND_REQUEST.replace("49=CNX", "49=CNY");
        let fields = decode(&dict, &raw);
        let verdict = CheckSumValidator.validate(&fields).unwrap();

        assert_eq!(
            verdict.validation,
            Validation::Invalid {
                expected: "037".to_string()
            }
        );
    }

    #[test]
    fn test_checksum_detects_every_value_byte_mutation() {
        let dict = Dictionary::fix44();
        let checksum_start = RESEND_REQUEST.rfind("\x0110=").unwrap() + 1;
        let original = RESEND_REQUEST.as_bytes();

        let mut in_value = false;
        let mut mutations = 0;
        for (index, &byte) in original[..checksum_start].iter().enumerate() {
            match byte {
                SOH => in_value = false,
                b'=' if !in_value => in_value = true,
                _ if in_value => {
                    let bumped = byte + 1;
                    if matches!(bumped, b'|' | b';' | SOH) {
                        continue;
                    }
                    let mut mutated = original.to_vec();
                    mutated[index] = bumped;
                    let mutated = String::from_utf8(mutated).unwrap();
                    let expected = format!(
                        "{:03}",
                        calculate_checksum(&mutated.as_bytes()[..checksum_start])
                    );

                    let fields = decode(&dict, &mutated);
                    let verdict = CheckSumValidator.validate(&fields).unwrap();
                    assert_eq!(verdict.target, 9, "byte {index}");
                    assert_eq!(
                        verdict.validation,
                        Validation::Invalid { expected },
                        "byte {index} of {RESEND_REQUEST:?}"
                    );
                    mutations += 1;
                }
                _ => {}
            }
        }
        assert!(mutations > 50);
    }

    #[test]
    fn test_checksum_declared_must_be_three_digits() {
        let dict = Dictionary::fix44();
        let fields = decode(&dict, "8=FIX.4.4\x019=5\x0135=0\x0110=63\x01");
        let verdict = CheckSumValidator.validate(&fields).unwrap();
        assert_eq!(verdict.validation.to_string(), "Invalid (expected 163)");
    }

    #[test]
    fn test_checksum_absent_is_vacuous() {
        let dict = Dictionary::fix44();
        let fields = decode(&dict, "8=FIX.4.4\x019=5\x0135=0\x01");
        assert!(CheckSumValidator.validate(&fields).is_none());
    }

    #[test]
    fn test_validators_ignore_failure_markers() {
        let dict = Dictionary::fix44();
        let clean = decode(&dict, "8=FIX.4.4\x019=5\x0135=0\x0110=163\x01");
        let noisy = decode(&dict, "8=FIX.4.4\x019=5\x0135=0\x0199999999999=x\x0110=163\x01");

        assert!(BodyLengthValidator.validate(&clean).unwrap().passed());
        assert!(CheckSumValidator.validate(&clean).unwrap().passed());
        assert!(BodyLengthValidator.validate(&noisy).unwrap().passed());
        assert_eq!(CheckSumValidator.validate(&noisy).unwrap().target, 4);
        assert!(CheckSumValidator.validate(&noisy).unwrap().passed());
    }
}
