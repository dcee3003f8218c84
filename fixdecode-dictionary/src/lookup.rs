/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Read-only lookup contract between the decoder and a field dictionary.

use crate::schema::{Dictionary, FieldDef};
use fixdecode_core::FieldTag;
use std::sync::Arc;

/// Read-only field dictionary queried by the decoder.
///
/// Implementations must be safe to share between threads so one dictionary
/// can back concurrent decode calls.
pub trait FieldDictionary: Send + Sync {
    /// Looks up the definition of a tag.
    fn lookup(&self, tag: FieldTag) -> Option<&FieldDef>;

    /// Returns true if the tag is an administrative / session-level field.
    fn is_system_field(&self, tag: FieldTag) -> bool;
}

impl FieldDictionary for Dictionary {
    #[inline]
    fn lookup(&self, tag: FieldTag) -> Option<&FieldDef> {
        self.get_field(tag)
    }

    #[inline]
    fn is_system_field(&self, tag: FieldTag) -> bool {
        self.contains_system_field(tag)
    }
}

impl<D: FieldDictionary + ?Sized> FieldDictionary for &D {
    #[inline]
    fn lookup(&self, tag: FieldTag) -> Option<&FieldDef> {
        (**self).lookup(tag)
    }

    #[inline]
    fn is_system_field(&self, tag: FieldTag) -> bool {
        (**self).is_system_field(tag)
    }
}

impl<D: FieldDictionary + ?Sized> FieldDictionary for Arc<D> {
    #[inline]
    fn lookup(&self, tag: FieldTag) -> Option<&FieldDef> {
        (**self).lookup(tag)
    }

    #[inline]
    fn is_system_field(&self, tag: FieldTag) -> bool {
        (**self).is_system_field(tag)
    }
}
