//! Directory-format documents.

use super::{Attribute, Dialect};
use crate::rfc::directory::{build, parse};

/// An ordered sequence of attributes parsed from, or destined for,
/// directory-format text.
///
/// Ownership is a strict tree: the document owns its attributes, each
/// attribute owns its parameters and values. There is no sharing and no
/// identity beyond the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    attributes: Vec<Attribute>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses directory-format text.
    ///
    /// Never fails; see [`parse::parse`] for the forgiveness rules.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        parse::parse(input)
    }

    /// Parses a raw byte buffer, truncating at the first invalid UTF-8 byte.
    #[must_use]
    pub fn parse_bytes(input: &[u8]) -> Self {
        parse::parse_bytes(input)
    }

    /// Returns the attributes in document order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Appends an attribute.
    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Returns the first attribute with the given name (case-insensitive).
    #[must_use]
    pub fn find_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
    }

    /// Removes and returns the attribute at `index`, if present.
    pub fn remove_attribute(&mut self, index: usize) -> Option<Attribute> {
        if index < self.attributes.len() {
            Some(self.attributes.remove(index))
        } else {
            None
        }
    }

    /// Removes every attribute matching the filter.
    ///
    /// A `None` group matches attributes in any group; `Some(group)` matches
    /// only that group. Names and groups compare case-insensitively.
    pub fn remove_attributes(&mut self, group: Option<&str>, name: &str) {
        self.attributes.retain(|attr| {
            let group_matches = group.is_none_or(|g| {
                attr.group
                    .as_deref()
                    .is_some_and(|ag| ag.eq_ignore_ascii_case(g))
            });
            !(group_matches && attr.name.eq_ignore_ascii_case(name))
        });
    }

    /// Serializes the document for the requested dialect.
    #[must_use]
    pub fn to_text(&self, dialect: Dialect) -> String {
        build::serialize(self, dialect)
    }
}
