/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Schema definitions for FIX field dictionaries.
//!
//! This module defines the structures the decoder resolves tags against:
//! - [`FieldType`]: FIX data types
//! - [`FieldDef`]: Field definitions with name, type, flags and enumerated values
//! - [`Dictionary`]: In-memory dictionary indexed by tag and by name

use fixdecode_core::FieldTag;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// FIX field data type.
///
/// Type names outside the standard set are kept verbatim in
/// [`Other`](Self::Other), so a dictionary round-trips the names it was given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// Integer value.
    Int,
    /// Length field (for data fields and BodyLength).
    Length,
    /// Sequence number.
    SeqNum,
    /// Number of entries in a repeating group.
    NumInGroup,
    /// Tag number reference.
    TagNum,
    /// Day of month (1-31).
    DayOfMonth,
    /// Floating point number.
    Float,
    /// Quantity.
    Qty,
    /// Price.
    Price,
    /// Price offset.
    PriceOffset,
    /// Amount (price * quantity).
    Amt,
    /// Percentage.
    Percentage,
    /// Single character.
    Char,
    /// Boolean (Y/N).
    Boolean,
    /// String.
    String,
    /// Multiple character value (space-separated).
    MultipleCharValue,
    /// Multiple string value (space-separated).
    MultipleStringValue,
    /// Country code (ISO 3166).
    Country,
    /// Currency code (ISO 4217).
    Currency,
    /// Exchange code (ISO 10383 MIC).
    Exchange,
    /// Month-year.
    MonthYear,
    /// UTC timestamp.
    UtcTimestamp,
    /// UTC time only.
    UtcTimeOnly,
    /// UTC date only.
    UtcDateOnly,
    /// Local market date.
    LocalMktDate,
    /// Local market time.
    LocalMktTime,
    /// Timezone time only.
    TzTimeOnly,
    /// Timezone timestamp.
    TzTimestamp,
    /// Raw data (binary).
    Data,
    /// XML data.
    XmlData,
    /// Language code (ISO 639-1).
    Language,
    /// Pattern (regex).
    Pattern,
    /// Tenor (e.g., "1M", "3M").
    Tenor,
    /// Any other type name, as written in the dictionary. Empty when the
    /// dictionary gives no type.
    Other(String),
}

impl FieldType {
    /// Returns the dictionary name of this type (e.g., "UTCTIMESTAMP").
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Int => "INT",
            Self::Length => "LENGTH",
            Self::SeqNum => "SEQNUM",
            Self::NumInGroup => "NUMINGROUP",
            Self::TagNum => "TAGNUM",
            Self::DayOfMonth => "DAYOFMONTH",
            Self::Float => "FLOAT",
            Self::Qty => "QTY",
            Self::Price => "PRICE",
            Self::PriceOffset => "PRICEOFFSET",
            Self::Amt => "AMT",
            Self::Percentage => "PERCENTAGE",
            Self::Char => "CHAR",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::MultipleCharValue => "MULTIPLECHARVALUE",
            Self::MultipleStringValue => "MULTIPLESTRINGVALUE",
            Self::Country => "COUNTRY",
            Self::Currency => "CURRENCY",
            Self::Exchange => "EXCHANGE",
            Self::MonthYear => "MONTHYEAR",
            Self::UtcTimestamp => "UTCTIMESTAMP",
            Self::UtcTimeOnly => "UTCTIMEONLY",
            Self::UtcDateOnly => "UTCDATEONLY",
            Self::LocalMktDate => "LOCALMKTDATE",
            Self::LocalMktTime => "LOCALMKTTIME",
            Self::TzTimeOnly => "TZTIMEONLY",
            Self::TzTimestamp => "TZTIMESTAMP",
            Self::Data => "DATA",
            Self::XmlData => "XMLDATA",
            Self::Language => "LANGUAGE",
            Self::Pattern => "PATTERN",
            Self::Tenor => "TENOR",
            Self::Other(name) => name,
        }
    }
}

impl Default for FieldType {
    /// The unnamed type, rendered as `""`.
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl std::str::FromStr for FieldType {
    type Err = std::convert::Infallible;

    /// Creates a FieldType from a dictionary type name.
    ///
    /// Standard names match case-insensitively. Any other name, including
    /// the empty one, becomes [`FieldType::Other`] unchanged.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_uppercase().as_str() {
            "INT" => Self::Int,
            "LENGTH" => Self::Length,
            "SEQNUM" => Self::SeqNum,
            "NUMINGROUP" => Self::NumInGroup,
            "TAGNUM" => Self::TagNum,
            "DAYOFMONTH" => Self::DayOfMonth,
            "FLOAT" => Self::Float,
            "QTY" | "QUANTITY" => Self::Qty,
            "PRICE" => Self::Price,
            "PRICEOFFSET" => Self::PriceOffset,
            "AMT" | "AMOUNT" => Self::Amt,
            "PERCENTAGE" => Self::Percentage,
            "CHAR" => Self::Char,
            "BOOLEAN" => Self::Boolean,
            "MULTIPLECHARVALUE" => Self::MultipleCharValue,
            "MULTIPLESTRINGVALUE" | "MULTIPLEVALUESTRING" => Self::MultipleStringValue,
            "COUNTRY" => Self::Country,
            "CURRENCY" => Self::Currency,
            "EXCHANGE" => Self::Exchange,
            "MONTHYEAR" => Self::MonthYear,
            "UTCTIMESTAMP" => Self::UtcTimestamp,
            "UTCTIMEONLY" => Self::UtcTimeOnly,
            "UTCDATEONLY" | "UTCDATE" => Self::UtcDateOnly,
            "LOCALMKTDATE" => Self::LocalMktDate,
            "LOCALMKTTIME" => Self::LocalMktTime,
            "TZTIMEONLY" => Self::TzTimeOnly,
            "TZTIMESTAMP" => Self::TzTimestamp,
            "DATA" => Self::Data,
            "XMLDATA" => Self::XmlData,
            "LANGUAGE" => Self::Language,
            "PATTERN" => Self::Pattern,
            "TENOR" => Self::Tenor,
            "STRING" => Self::String,
            _ => Self::Other(s.to_string()),
        })
    }
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(field_type) => field_type,
            Err(never) => match never {},
        }
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definition of a FIX field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field tag number.
    pub tag: FieldTag,
    /// Field name.
    pub name: String,
    /// Field data type.
    pub field_type: FieldType,
    /// Whether the field is required.
    pub required: bool,
    /// Whether the field belongs to the standard header.
    pub header: bool,
    /// Protocol version the field was deprecated in (e.g., "4.3").
    pub deprecated_since: Option<String>,
    /// Labels for enumerated values, keyed by raw value.
    pub values: Option<HashMap<String, String>>,
    /// Field description.
    pub description: Option<String>,
}

impl FieldDef {
    /// Creates a new field definition.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `name` - The field name
    /// * `field_type` - The field data type
    #[must_use]
    pub fn new(tag: u32, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            tag: FieldTag::new(tag),
            name: name.into(),
            field_type,
            required: false,
            header: false,
            deprecated_since: None,
            values: None,
            description: None,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub const fn as_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as a header field.
    #[must_use]
    pub const fn as_header(mut self) -> Self {
        self.header = true;
        self
    }

    /// Marks the field as deprecated since the given version.
    #[must_use]
    pub fn with_deprecated_since(mut self, version: impl Into<String>) -> Self {
        self.deprecated_since = Some(version.into());
        self
    }

    /// Adds labels for an enumerated field.
    #[must_use]
    pub fn with_values(mut self, values: HashMap<String, String>) -> Self {
        self.values = Some(values);
        self
    }

    /// Adds labels for an enumerated field from `(value, label)` pairs.
    #[must_use]
    pub fn with_value_labels<I, V, L>(self, labels: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        let values = labels
            .into_iter()
            .map(|(value, label)| (value.into(), label.into()))
            .collect();
        self.with_values(values)
    }

    /// Adds a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the label for an enumerated raw value, if defined.
    #[must_use]
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.values
            .as_ref()
            .and_then(|values| values.get(value))
            .map(String::as_str)
    }
}

/// In-memory FIX field dictionary.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// BeginString of the version this dictionary describes (e.g., "FIX.4.4").
    pub begin_string: String,
    /// Field definitions indexed by tag.
    fields: HashMap<FieldTag, FieldDef>,
    /// Field tags indexed by name.
    fields_by_name: HashMap<String, FieldTag>,
    /// Administrative / session-level tags.
    system_fields: HashSet<FieldTag>,
}

impl Dictionary {
    /// Creates a new empty dictionary.
    ///
    /// # Arguments
    /// * `begin_string` - The BeginString of the described version
    #[must_use]
    pub fn new(begin_string: impl Into<String>) -> Self {
        Self {
            begin_string: begin_string.into(),
            ..Self::default()
        }
    }

    /// Adds a field definition, replacing any previous one for the tag.
    pub fn add_field(&mut self, field: FieldDef) {
        if let Some(previous) = self.fields.get(&field.tag) {
            if self.fields_by_name.get(&previous.name) == Some(&field.tag) {
                self.fields_by_name.remove(&previous.name);
            }
        }
        self.fields_by_name.insert(field.name.clone(), field.tag);
        self.fields.insert(field.tag, field);
    }

    /// Marks a tag as a system field.
    pub fn add_system_field(&mut self, tag: FieldTag) {
        self.system_fields.insert(tag);
    }

    /// Adds a field definition (builder form).
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.add_field(field);
        self
    }

    /// Marks tags as system fields (builder form).
    #[must_use]
    pub fn with_system_fields<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        for tag in tags {
            self.add_system_field(FieldTag::new(tag));
        }
        self
    }

    /// Gets a field definition by tag.
    #[must_use]
    pub fn get_field(&self, tag: FieldTag) -> Option<&FieldDef> {
        self.fields.get(&tag)
    }

    /// Gets a field definition by name.
    #[must_use]
    pub fn get_field_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.fields_by_name
            .get(name)
            .and_then(|tag| self.fields.get(tag))
    }

    /// Returns true if the tag is a system field.
    #[must_use]
    pub fn contains_system_field(&self, tag: FieldTag) -> bool {
        self.system_fields.contains(&tag)
    }

    /// Returns an iterator over all field definitions.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.values()
    }

    /// Returns an iterator over the system-field tags.
    pub fn system_fields(&self) -> impl Iterator<Item = FieldTag> + '_ {
        self.system_fields.iter().copied()
    }

    /// Returns the number of field definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the dictionary defines no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_from_str() {
        assert_eq!("LENGTH".parse::<FieldType>().unwrap(), FieldType::Length);
        assert_eq!("seqnum".parse::<FieldType>().unwrap(), FieldType::SeqNum);
        assert_eq!(
            "UTCTIMESTAMP".parse::<FieldType>().unwrap(),
            FieldType::UtcTimestamp
        );
        assert_eq!("TENOR".parse::<FieldType>().unwrap(), FieldType::Tenor);
        assert_eq!(
            "LocalMktTime".parse::<FieldType>().unwrap(),
            FieldType::LocalMktTime
        );
    }

    #[test]
    fn test_field_type_keeps_unknown_names() {
        let reserved = FieldType::from("RESERVED100PLUS".to_string());
        assert_eq!(reserved, FieldType::Other("RESERVED100PLUS".to_string()));
        assert_eq!(reserved.as_str(), "RESERVED100PLUS");
        assert_eq!(String::from(reserved), "RESERVED100PLUS");

        assert_eq!(FieldType::from(String::new()), FieldType::default());
        assert_eq!(FieldType::default().as_str(), "");
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::SeqNum.to_string(), "SEQNUM");
        assert_eq!(String::from(FieldType::UtcTimestamp), "UTCTIMESTAMP");
        assert_eq!(FieldType::Pattern.as_str(), "PATTERN");
    }

    #[test]
    fn test_field_def_builder() {
        let field = FieldDef::new(35, "MsgType", FieldType::String)
            .as_required()
            .as_header()
            .with_value_labels([("0", "Heartbeat"), ("2", "ResendRequest")]);

        assert!(field.required);
        assert!(field.header);
        assert_eq!(field.deprecated_since, None);
        assert_eq!(field.label_for("2"), Some("ResendRequest"));
        assert_eq!(field.label_for("Z"), None);
    }

    #[test]
    fn test_dictionary_field_operations() {
        let mut dict = Dictionary::new("FIX.4.4");
        dict.add_field(FieldDef::new(35, "MsgType", FieldType::String));
        dict.add_system_field(FieldTag::new(35));

        assert!(dict.get_field(FieldTag::new(35)).is_some());
        assert!(dict.get_field_by_name("MsgType").is_some());
        assert!(dict.get_field(FieldTag::new(999)).is_none());
        assert!(dict.contains_system_field(FieldTag::new(35)));
        assert!(!dict.contains_system_field(FieldTag::new(55)));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_dictionary_replace_field() {
        let dict = Dictionary::new("FIX.4.4")
            .with_field(FieldDef::new(22, "IDSource", FieldType::String))
            .with_field(FieldDef::new(22, "SecurityIDSource", FieldType::String));

        assert_eq!(dict.len(), 1);
        assert!(dict.get_field_by_name("IDSource").is_none());
        assert_eq!(
            dict.get_field(FieldTag::new(22)).map(|f| f.name.as_str()),
            Some("SecurityIDSource")
        );
    }
}
