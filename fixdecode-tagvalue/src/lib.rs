/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # FixDecode Tag-Value
//!
//! Decoding of FIX tag=value messages for FixDecode.
//!
//! This crate turns a raw message into an ordered sequence of fields resolved
//! against a field dictionary, then checks its BodyLength and CheckSum.
//!
//! ## Features
//!
//! - **Zero-copy decoding**: Tags and values borrow the raw message, metadata
//!   borrows the dictionary
//! - **Per-token failures**: A malformed token becomes one failure marker and
//!   never hides the rest of the message
//! - **Non-fatal validation**: BodyLength and CheckSum mismatches are reported
//!   as field annotations, not errors

pub mod checksum;
pub mod config;
pub mod decoder;
pub mod message;
pub mod resolver;
pub mod tokenizer;
pub mod validator;

pub use checksum::{calculate_checksum, format_checksum};
pub use config::DecoderConfig;
pub use decoder::Decoder;
pub use message::{DecodedField, DecodedMessage, ResolvedField, ValidationReport};
pub use resolver::FieldResolver;
pub use tokenizer::{RawPair, Tokenizer, normalize_delimiter, tokenize};
pub use validator::{BodyLengthValidator, CheckSumValidator, Validator, Verdict};
