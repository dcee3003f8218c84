/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! JSON dictionary documents.
//!
//! A document keys field entries by tag:
//!
//! ```json
//! {
//!   "beginString": "FIX.4.4",
//!   "systemFields": [8, 9, 10, 35],
//!   "fields": {
//!     "35": {
//!       "name": "MsgType",
//!       "type": "STRING",
//!       "isRequired": true,
//!       "isHeaderField": true,
//!       "values": { "0": "Heartbeat", "2": "ResendRequest" }
//!     },
//!     "47": { "name": "Rule80A", "type": "CHAR", "deprecatedSince": "4.3" }
//!   }
//! }
//! ```

use crate::schema::{Dictionary, FieldDef, FieldType};
use fixdecode_core::{DictionaryError, FieldTag};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Serialized form of a [`Dictionary`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DictionaryDocument {
    #[serde(default)]
    begin_string: String,
    #[serde(default)]
    system_fields: Vec<u32>,
    #[serde(default)]
    fields: BTreeMap<String, FieldEntry>,
}

/// Serialized form of a [`FieldDef`]; the tag is the document key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tag: Option<u32>,
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    field_type: FieldType,
    #[serde(default, skip_serializing_if = "is_false")]
    is_required: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    is_header_field: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deprecated_since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    values: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl FieldEntry {
    fn into_field(self, key: &str) -> Result<FieldDef, DictionaryError> {
        let tag = FieldTag::parse_bytes(key.as_bytes())
            .ok_or_else(|| DictionaryError::InvalidTag(key.to_string()))?;
        if let Some(declared) = self.tag.filter(|&declared| declared != tag.value()) {
            return Err(DictionaryError::TagMismatch {
                key: tag.value(),
                declared,
            });
        }

        Ok(FieldDef {
            tag,
            name: self.name,
            field_type: self.field_type,
            required: self.is_required,
            header: self.is_header_field,
            deprecated_since: self.deprecated_since,
            values: self.values,
            description: self.description,
        })
    }
}

impl From<&FieldDef> for FieldEntry {
    fn from(field: &FieldDef) -> Self {
        Self {
            tag: None,
            name: field.name.clone(),
            field_type: field.field_type.clone(),
            is_required: field.required,
            is_header_field: field.header,
            deprecated_since: field.deprecated_since.clone(),
            values: field.values.clone(),
            description: field.description.clone(),
        }
    }
}

impl Dictionary {
    /// Builds a dictionary from a JSON document.
    ///
    /// # Errors
    /// Returns `DictionaryError` if the document is not valid JSON, a field key
    /// is not a tag number, or an entry declares a tag different from its key.
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let document: DictionaryDocument =
            serde_json::from_str(json).map_err(|e| DictionaryError::Parse(e.to_string()))?;

        let mut dictionary = Self::new(document.begin_string);
        for (key, entry) in document.fields {
            dictionary.add_field(entry.into_field(&key)?);
        }
        for tag in document.system_fields {
            dictionary.add_system_field(FieldTag::new(tag));
        }

        Ok(dictionary)
    }

    /// Serializes the dictionary to a pretty-printed JSON document.
    ///
    /// # Errors
    /// Returns `DictionaryError::Serialize` if serialization fails.
    pub fn to_json(&self) -> Result<String, DictionaryError> {
        let mut system_fields: Vec<u32> = self.system_fields().map(FieldTag::value).collect();
        system_fields.sort_unstable();

        let mut fields: Vec<&FieldDef> = self.fields().collect();
        fields.sort_unstable_by_key(|field| field.tag);

        let document = DictionaryDocument {
            begin_string: self.begin_string.clone(),
            system_fields,
            fields: fields
                .into_iter()
                .map(|field| (field.tag.to_string(), FieldEntry::from(field)))
                .collect(),
        };

        serde_json::to_string_pretty(&document).map_err(|e| DictionaryError::Serialize(e.to_string()))
    }
}
