/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # FixDecode
//!
//! A FIX message decoder for Rust.
//!
//! FixDecode turns a raw FIX tag=value message into an ordered, human-inspectable
//! sequence of fields resolved against a field dictionary, and checks the
//! message's BodyLength (9) and CheckSum (10).
//!
//! ## Features
//!
//! - **Zero-copy decoding**: Decoded fields borrow the raw message and the dictionary
//! - **Tolerant**: A malformed token never hides the rest of the message
//! - **Classified**: Fields are marked as system, required, header or deprecated
//! - **Pluggable dictionaries**: Embedded FIX 4.4 dictionary, JSON documents, or
//!   any `FieldDictionary` implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use fixdecode::prelude::*;
//!
//! let dictionary = Dictionary::fix44();
//! let raw = normalize_delimiter("8=FIX.4.4|9=5|35=0|10=163|", "|");
//! let message = Decoder::new(&dictionary).decode(&raw);
//!
//! assert!(message.report().passed());
//! assert_eq!(message.msg_type_label(), Some("Heartbeat"));
//! println!("{}", render(&message).unwrap());
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Fundamental types and error definitions
//! - [`dictionary`]: Field dictionaries and lookup
//! - [`tagvalue`]: Tag=value decoding and structural validation
//! - [`render`]: JSON-lines rendering of decoded messages

pub mod render;

pub mod core {
    //! Fundamental types and error definitions.
    pub use fixdecode_core::*;
}

pub mod dictionary {
    //! Field dictionaries and lookup.
    pub use fixdecode_dictionary::*;
}

pub mod tagvalue {
    //! Tag=value decoding and structural validation.
    pub use fixdecode_tagvalue::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fixdecode_core::{
        Classes, Classification, DecodeError, DictionaryError, FieldTag, FixDecodeError,
        ProtocolVersion, Result, Validation, tags,
    };

    // Dictionary
    pub use fixdecode_dictionary::{Dictionary, FieldDef, FieldDictionary, FieldType};

    // Tag-value decoding
    pub use fixdecode_tagvalue::{
        DecodedField, DecodedMessage, Decoder, DecoderConfig, ResolvedField, ValidationReport,
        calculate_checksum, normalize_delimiter,
    };

    // Rendering
    pub use crate::render::{DECODING_FAILED, render};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use std::sync::Arc;

    const RESEND_REQUEST: &str = "8=FIX.4.4|9=74|35=2|49=CNX|34=8263336|\
        52=20180126-07:39:59.683|56=imdstream|16=0|7=12812|10=036|";

    #[test]
    fn test_prelude_imports() {
        let dictionary = Dictionary::fix44();
        let decoder = Decoder::with_config(&dictionary, DecoderConfig::default());
        assert!(decoder.config().validate_checksum);
        assert_eq!(FieldTag::new(35), tags::MSG_TYPE);
    }

    #[test]
    fn test_end_to_end_pipe_delimited() {
        let dictionary = Dictionary::fix44();
        let raw = normalize_delimiter(RESEND_REQUEST, "|");
        let message = Decoder::new(&dictionary).decode(&raw);

        assert_eq!(message.len(), 10);
        assert!(message.report().passed());
        assert_eq!(message.msg_type_label(), Some("ResendRequest"));
    }

    #[test]
    fn test_end_to_end_pipe_is_a_value_terminator() {
        // Pipes end values even without normalization.
        let dictionary = Dictionary::fix44();
        let message = Decoder::new(&dictionary).decode(RESEND_REQUEST);

        assert_eq!(message.len(), 10);
        assert!(message.is_decoded());
    }

    #[test]
    fn test_end_to_end_json_dictionary() {
        let json = r#"{
            "beginString": "FIX.4.4",
            "systemFields": [8, 9, 10, 35],
            "fields": {
                "8": { "name": "BeginString", "type": "STRING", "isRequired": true, "isHeaderField": true },
                "9": { "name": "BodyLength", "type": "LENGTH", "isRequired": true, "isHeaderField": true },
                "35": { "name": "MsgType", "type": "STRING", "isRequired": true, "isHeaderField": true,
                        "values": { "0": "Heartbeat" } },
                "10": { "name": "CheckSum", "type": "STRING", "isRequired": true },
                "47": { "name": "Rule80A", "type": "CHAR", "deprecatedSince": "4.3" }
            }
        }"#;
        let dictionary = Arc::new(Dictionary::from_json(json).unwrap());
        let message = Decoder::new(&dictionary).decode("8=FIX.4.4\x019=10\x0135=0\x0147=A\x0110=099\x01");

        assert!(message.report().body_length);
        let rule = message.field(FieldTag::new(47)).unwrap();
        assert!(rule.classes.contains(Classification::DeprecatedField));
        assert!(!rule.classes.contains(Classification::SystemField));
        assert_eq!(message.msg_type_label(), Some("Heartbeat"));
    }

    #[test]
    fn test_end_to_end_render_failure() {
        let dictionary = Dictionary::fix44();
        let message = Decoder::new(&dictionary).decode("8=FIX.4.4\x0112345678901=x\x01");
        assert_eq!(render(&message).unwrap(), DECODING_FAILED);
    }

    #[test]
    fn test_try_decode_error_converts() {
        let dictionary = Dictionary::fix44();
        let config = DecoderConfig::new().with_max_message_size(4);
        let decoder = Decoder::with_config(&dictionary, config);

        let result: Result<usize> = decoder
            .try_decode(RESEND_REQUEST)
            .map(|message| message.len())
            .map_err(FixDecodeError::from);
        assert!(matches!(
            result,
            Err(FixDecodeError::Decode(DecodeError::MessageTooLarge { max_size: 4, .. }))
        ));
    }
}
