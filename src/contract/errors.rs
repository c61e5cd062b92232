//! Error types for configuration contracts
//!
//! Validation problems are collected, not raised. Every finding is stored
//! together with the location string of the entity that produced it.

use serde::ser::{Serialize, SerializeSeq, SerializeStruct, Serializer};
use std::fmt;
use thiserror::Error;

/// A single validation finding on a contract entity
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContractError {
    /// Required field is absent or blank
    #[error("Missing field '{field}'.")]
    MissingField {
        /// Label of the missing field.
        field: String,
    },

    /// Neither the plain nor the encrypted value is set
    #[error("Environment variable value not set")]
    MissingValue,

    /// Both the plain and the encrypted value are set
    #[error("Environment variable value and encrypted_value is set. Only one field can be assigned.")]
    ConflictingValueFields,

    /// Name collides with an earlier sibling
    #[error("Environment variable {name} defined more than once")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// Free-form message added by a caller
    #[error("{0}")]
    Custom(String),
}

impl From<String> for ContractError {
    fn from(message: String) -> Self {
        Self::Custom(message)
    }
}

impl From<&str> for ContractError {
    fn from(message: &str) -> Self {
        Self::Custom(message.to_string())
    }
}

/// Returns true if the value is absent, empty or whitespace only.
#[must_use]
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Append-only sink of validation findings keyed by location.
///
/// Locations keep the order in which they were first reported, so
/// [`errors_as_text`](Self::errors_as_text) is stable for a given pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorCollection {
    entries: Vec<(String, Vec<ContractError>)>,
}

impl ErrorCollection {
    /// Creates an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a typed error at `location`.
    pub fn add(&mut self, location: impl Into<String>, error: ContractError) {
        let location = location.into();
        match self.entries.iter_mut().find(|(l, _)| *l == location) {
            Some((_, errors)) => errors.push(error),
            None => self.entries.push((location, vec![error])),
        }
    }

    /// Records a free-form message at `location`.
    pub fn add_error(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.add(location, ContractError::Custom(message.into()));
    }

    /// Records a [`ContractError::MissingField`] when `value` is blank.
    pub fn check_missing(&mut self, location: &str, field: &str, value: Option<&str>) {
        if is_blank(value) {
            self.add(
                location,
                ContractError::MissingField {
                    field: field.to_string(),
                },
            );
        }
    }

    /// Moves every finding of `other` into this collection.
    pub fn add_errors(&mut self, other: ErrorCollection) {
        for (location, errors) in other.entries {
            for error in errors {
                self.add(location.clone(), error);
            }
        }
    }

    /// Returns true if nothing was reported
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of findings over all locations
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.entries.iter().map(|(_, errors)| errors.len()).sum()
    }

    /// Findings reported at exactly `location`
    #[must_use]
    pub fn errors_at(&self, location: &str) -> &[ContractError] {
        self.entries
            .iter()
            .find(|(l, _)| l == location)
            .map(|(_, errors)| errors.as_slice())
            .unwrap_or_default()
    }

    /// Iterates `(location, error)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContractError)> {
        self.entries
            .iter()
            .flat_map(|(l, errors)| errors.iter().map(move |e| (l.as_str(), e)))
    }

    /// Distinct locations in report order
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// Renders the human-readable report.
    ///
    /// Each location is printed followed by `:`, then one tab-indented line
    /// per message.
    #[must_use]
    pub fn errors_as_text(&self) -> String {
        let mut text = String::new();
        for (location, errors) in &self.entries {
            text.push_str(location);
            text.push_str(":\n");
            for error in errors {
                text.push('\t');
                text.push_str(&error.to_string());
                text.push('\n');
            }
        }
        text
    }
}

impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.errors_as_text())
    }
}

/// Serializes as a flat list of `{ "location": .., "message": .. }` objects.
impl Serialize for ErrorCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Entry<'a>(&'a str, &'a ContractError);

        impl Serialize for Entry<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut entry = serializer.serialize_struct("Error", 2)?;
                entry.serialize_field("location", self.0)?;
                entry.serialize_field("message", &self.1.to_string())?;
                entry.end()
            }
        }

        let mut seq = serializer.serialize_seq(Some(self.error_count()))?;
        for (location, error) in self.iter() {
            seq.serialize_element(&Entry(location, error))?;
        }
        seq.end()
    }
}
