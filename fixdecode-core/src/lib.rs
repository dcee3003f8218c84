/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # FixDecode Core
//!
//! Core types and error definitions for the FixDecode FIX message decoder.
//!
//! This crate provides the fundamental building blocks used across all FixDecode crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field tags**: `FieldTag` and the distinguished BeginString, BodyLength,
//!   CheckSum and MsgType tags
//! - **Core types**: `Classification`, `Classes`, `Validation`, `ProtocolVersion`

pub mod error;
pub mod field;
pub mod types;

pub use error::{DecodeError, DictionaryError, FixDecodeError, Result};
pub use field::{EQUALS, FieldTag, SOH, SOH_CHAR, tags};
pub use types::{
    Classes, Classification, DEFAULT_BEGIN_STRING_PREFIX, ProtocolVersion, Validation,
    compare_versions,
};
