//! Metadata accessor for question records.
//!
//! A tag may be set several times; each call appends to the tag's values.
//! Reading a tag tells single-valued and multi-valued tags apart through
//! [`MetaValue`].

use super::nodes::Question;

/// The value(s) stored under a metadata tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaValue<'a> {
    /// Exactly one value, or the empty string when the tag is absent
    Single(&'a str),
    /// Any other number of values, in insertion order
    Multiple(&'a [String]),
}

impl<'a> MetaValue<'a> {
    /// Flatten into the individual values, in order.
    pub fn values(&self) -> Vec<&'a str> {
        match self {
            MetaValue::Single(value) => vec![*value],
            MetaValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl Question {
    /// Read a metadata tag.
    ///
    /// Absent tags read as `Single("")`.
    pub fn get_meta(&self, key: &str) -> MetaValue<'_> {
        match self.metadata.get(key).map(Vec::as_slice) {
            None => MetaValue::Single(""),
            Some([value]) => MetaValue::Single(value),
            Some(values) => MetaValue::Multiple(values),
        }
    }

    /// Append `value` to the values of `key`, creating the tag if needed.
    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata
            .entry(key.into())
            .or_default()
            .push(value.into());
    }
}
