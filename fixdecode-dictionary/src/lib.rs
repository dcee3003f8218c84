/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # FixDecode Dictionary
//!
//! FIX field dictionaries for the FixDecode decoder.
//!
//! This crate provides:
//! - **Schema definitions**: Field definitions with type, flags and enumerated values
//! - **Lookup contract**: The read-only [`FieldDictionary`] trait the decoder queries
//! - **JSON documents**: Loading and saving dictionaries with `serde_json`
//! - **Embedded dictionary**: FIX 4.4 header, trailer and session-level fields

pub mod fix44;
pub mod json;
pub mod lookup;
pub mod schema;

pub use lookup::FieldDictionary;
pub use schema::{Dictionary, FieldDef, FieldType};
