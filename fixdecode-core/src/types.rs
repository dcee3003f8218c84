/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Core types attached to decoded fields.
//!
//! This module provides:
//! - [`Classification`]: The closed set of field classifications
//! - [`Classes`]: A compact set of classifications
//! - [`Validation`]: The annotation a structural validator leaves on a field
//! - [`ProtocolVersion`]: The FIX version resolved from BeginString

use serde::ser::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Default prefix stripped from BeginString to obtain the protocol version.
pub const DEFAULT_BEGIN_STRING_PREFIX: &str = "FIX.";

/// Classification of a decoded field.
///
/// The four dictionary classifications combine freely. [`Valid`](Self::Valid)
/// and [`Invalid`](Self::Invalid) are set only by structural validators and
/// exclude each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    /// Administrative or session-level tag.
    SystemField,
    /// Field marked required by the dictionary.
    RequiredField,
    /// Field belonging to the standard header.
    HeaderField,
    /// Field deprecated at or before the message's protocol version.
    DeprecatedField,
    /// Field passed structural validation.
    Valid,
    /// Field failed structural validation.
    Invalid,
}

impl Classification {
    /// All classifications in canonical order.
    pub const ALL: [Self; 6] = [
        Self::SystemField,
        Self::RequiredField,
        Self::HeaderField,
        Self::DeprecatedField,
        Self::Valid,
        Self::Invalid,
    ];

    /// Returns the display name of this classification.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SystemField => "system-field",
            Self::RequiredField => "required-field",
            Self::HeaderField => "header-field",
            Self::DeprecatedField => "deprecated-field",
            Self::Valid => "Valid",
            Self::Invalid => "Invalid",
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Set of [`Classification`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Classes(u8);

impl Classes {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Adds a classification.
    ///
    /// Adding `Valid` removes `Invalid` and vice versa.
    pub fn insert(&mut self, class: Classification) {
        match class {
            Classification::Valid => self.remove(Classification::Invalid),
            Classification::Invalid => self.remove(Classification::Valid),
            _ => {}
        }
        self.0 |= class.bit();
    }

    /// Removes a classification.
    #[inline]
    pub fn remove(&mut self, class: Classification) {
        self.0 &= !class.bit();
    }

    /// Returns true if the set contains the classification.
    #[inline]
    #[must_use]
    pub const fn contains(&self, class: Classification) -> bool {
        self.0 & class.bit() != 0
    }

    /// Returns true if the set is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the number of classifications in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the classifications in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Classification> + '_ {
        Classification::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<Classification> for Classes {
    fn from_iter<I: IntoIterator<Item = Classification>>(iter: I) -> Self {
        let mut classes = Self::new();
        for class in iter {
            classes.insert(class);
        }
        classes
    }
}

impl fmt::Display for Classes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(class.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for Classes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Annotation left on a field by a structural validator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Validation {
    /// Declared value matches the computed one.
    Valid,
    /// Declared value differs from the computed one.
    Invalid {
        /// The computed value, as it should have appeared on the wire.
        expected: String,
    },
}

impl Validation {
    /// Returns true for [`Validation::Valid`].
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the classification matching this annotation.
    #[must_use]
    pub const fn classification(&self) -> Classification {
        match self {
            Self::Valid => Classification::Valid,
            Self::Invalid { .. } => Classification::Invalid,
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("Valid"),
            Self::Invalid { expected } => write!(f, "Invalid (expected {expected})"),
        }
    }
}

impl Serialize for Validation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// FIX protocol version resolved from the BeginString (8) field.
///
/// Until BeginString has been seen the version is [`Unknown`](Self::Unknown),
/// which never satisfies a deprecation check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ProtocolVersion {
    /// No BeginString seen yet, or one without the expected prefix.
    #[default]
    Unknown,
    /// Version text following the prefix, e.g. `4.4`.
    Known(String),
}

impl ProtocolVersion {
    /// Resolves the version from a BeginString value by stripping `prefix`.
    ///
    /// # Arguments
    /// * `begin_string` - The BeginString value (e.g., "FIX.4.4")
    /// * `prefix` - The literal prefix to strip (e.g., "FIX.")
    #[must_use]
    pub fn from_begin_string(begin_string: &str, prefix: &str) -> Self {
        match begin_string.strip_prefix(prefix) {
            Some(version) => Self::Known(version.to_string()),
            None => Self::Unknown,
        }
    }

    /// Returns the version text, or `"unknown"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => "unknown",
            Self::Known(version) => version,
        }
    }

    /// Returns true if a field deprecated since `since` is deprecated in
    /// this version.
    #[must_use]
    pub fn is_deprecated(&self, since: &str) -> bool {
        match self {
            Self::Unknown => false,
            Self::Known(version) => compare_versions(since, version) != Ordering::Greater,
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compares two dotted version strings component by component.
///
/// Components compare numerically when both are integers and
/// lexicographically otherwise. A version that is a prefix of another
/// orders first (`4` < `4.4`).
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ordering = match (l.parse::<u64>(), r.parse::<u64>()) {
                    (Ok(l), Ok(r)) => l.cmp(&r),
                    _ => l.cmp(r),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_insert_and_display() {
        let mut classes = Classes::new();
        assert!(classes.is_empty());

        classes.insert(Classification::HeaderField);
        classes.insert(Classification::SystemField);
        classes.insert(Classification::RequiredField);
        assert_eq!(classes.len(), 3);
        assert_eq!(
            classes.to_string(),
            "system-field,required-field,header-field"
        );
    }

    #[test]
    fn test_classes_valid_invalid_exclusive() {
        let mut classes = Classes::new();
        classes.insert(Classification::Valid);
        classes.insert(Classification::Invalid);
        assert!(classes.contains(Classification::Invalid));
        assert!(!classes.contains(Classification::Valid));

        classes.insert(Classification::Valid);
        assert!(!classes.contains(Classification::Invalid));
        assert_eq!(classes.len(), 1);
    }

    #[test]
    fn test_classes_from_iter() {
        let classes: Classes = [Classification::DeprecatedField, Classification::SystemField]
            .into_iter()
            .collect();
        assert_eq!(
            classes.iter().collect::<Vec<_>>(),
            vec![Classification::SystemField, Classification::DeprecatedField]
        );
    }

    #[test]
    fn test_validation_display() {
        assert_eq!(Validation::Valid.to_string(), "Valid");
        assert_eq!(
            Validation::Invalid {
                expected: "74".to_string()
            }
            .to_string(),
            "Invalid (expected 74)"
        );
    }

    #[test]
    fn test_version_from_begin_string() {
        let version = ProtocolVersion::from_begin_string("FIX.4.4", DEFAULT_BEGIN_STRING_PREFIX);
        assert_eq!(version, ProtocolVersion::Known("4.4".to_string()));
        assert_eq!(version.as_str(), "4.4");

        let fixt = ProtocolVersion::from_begin_string("FIXT.1.1", DEFAULT_BEGIN_STRING_PREFIX);
        assert_eq!(fixt, ProtocolVersion::Unknown);
        assert_eq!(fixt.to_string(), "unknown");
    }

    #[test]
    fn test_unknown_version_never_deprecated() {
        let version = ProtocolVersion::Unknown;
        assert!(!version.is_deprecated("4.0"));
        assert!(!version.is_deprecated(""));
    }

    #[test]
    fn test_deprecation_gating() {
        let version = ProtocolVersion::Known("4.4".to_string());
        assert!(version.is_deprecated("4.3"));
        assert!(version.is_deprecated("4.4"));
        assert!(!version.is_deprecated("5.0"));
        assert!(!version.is_deprecated("4.10"));
    }

    #[test]
    fn test_compare_versions() {
        assert_eq!(compare_versions("4.4", "4.4"), Ordering::Equal);
        assert_eq!(compare_versions("4.2", "4.4"), Ordering::Less);
        assert_eq!(compare_versions("4.10", "4.9"), Ordering::Greater);
        assert_eq!(compare_versions("4", "4.4"), Ordering::Less);
        assert_eq!(compare_versions("5.0SP2", "5.0SP1"), Ordering::Greater);
    }
}
