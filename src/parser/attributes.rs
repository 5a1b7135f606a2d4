//! Typed access to an element's attribute set.
//!
//! Lookups never fail: an absent attribute resolves to the caller's default
//! and malformed text resolves to a best-effort value.

use std::collections::BTreeMap;

use crate::types::Colour;

/// Attributes of a single XML element, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Raw value of an attribute, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// String attribute, or `default` when absent.
    pub fn string(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or(default).to_string()
    }

    /// Unsigned integer attribute, or `default` when absent.
    ///
    /// Present values that do not parse resolve to 0.
    pub fn uint(&self, name: &str, default: u32) -> u32 {
        match self.get(name) {
            Some(value) => value.trim().parse().unwrap_or(0),
            None => default,
        }
    }

    /// `#RRGGBBAA` colour attribute, or `default` when absent.
    pub fn colour(&self, name: &str, default: Colour) -> Colour {
        self.optional_colour(name).unwrap_or(default)
    }

    /// `#RRGGBBAA` colour attribute, `None` when absent.
    pub fn optional_colour(&self, name: &str) -> Option<Colour> {
        self.get(name).map(Colour::from_attribute)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}
