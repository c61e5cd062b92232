//! Environment variable declaration
//!
//! One variable declared on a pipeline, job or environment. It carries either
//! a plain value or an encrypted value, never both.

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use super::errors::{ContractError, ErrorCollection, is_blank};
use super::location::{Contract, resolve_location};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

const UNKNOWN_NAME: &str = "unknown name";

/// A declared environment variable.
///
/// Equality and hashing consider `name`, `value` and `encrypted_value` only;
/// the location override is presentation metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    encrypted_value: Option<String>,

    #[serde(skip)]
    location: Option<String>,
}

impl EnvironmentVariable {
    /// Creates a variable with a name and no value
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Creates a variable holding a clear-text value
    pub fn plain(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Creates a variable holding an encrypted value
    pub fn encrypted(name: impl Into<String>, encrypted_value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            encrypted_value: Some(encrypted_value.into()),
            ..Self::default()
        }
    }

    /// Creates a variable with every field given explicitly.
    ///
    /// Used by tree builders that forward whatever the source document held,
    /// including invalid combinations.
    pub fn with_values(
        name: Option<String>,
        value: Option<String>,
        encrypted_value: Option<String>,
    ) -> Self {
        Self {
            name,
            value,
            encrypted_value,
            location: None,
        }
    }

    /// Attaches the location where this variable was declared
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Variable name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Clear-text value
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Encrypted value
    pub fn encrypted_value(&self) -> Option<&str> {
        self.encrypted_value.as_deref()
    }

    /// Returns true if a non-blank clear-text value is set
    pub fn has_value(&self) -> bool {
        !is_blank(self.value())
    }

    /// Returns true if a non-blank encrypted value is set
    pub fn has_encrypted_value(&self) -> bool {
        !is_blank(self.encrypted_value())
    }

    /// Registers this name in `seen`, the names of earlier siblings.
    ///
    /// A name already present is reported as [`ContractError::DuplicateName`]
    /// and `seen` is left untouched. An absent name is registered as `""`, so
    /// a second nameless sibling is reported as well.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::DuplicateName`] if an earlier sibling used the name.
    pub fn check_name_uniqueness(&self, seen: &mut HashSet<String>) -> Result<(), ContractError> {
        let name = self.name().unwrap_or_default();

        if seen.contains(name) {
            tracing::debug!(name, "duplicate environment variable");
            return Err(ContractError::DuplicateName {
                name: name.to_string(),
            });
        }

        seen.insert(name.to_string());
        Ok(())
    }

    fn validate_value(&self, errors: &mut ErrorCollection, location: &str) {
        match (self.has_value(), self.has_encrypted_value()) {
            (false, false) => errors.add(location, ContractError::MissingValue),
            (true, true) => errors.add(location, ContractError::ConflictingValueFields),
            _ => {}
        }
    }
}

impl Contract for EnvironmentVariable {
    fn location_override(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn location(&self, parent_location: &str) -> String {
        let base = resolve_location(self.location_override(), parent_location);
        let name = self
            .name()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(UNKNOWN_NAME);
        format!("{base}; Environment variable ({name})")
    }

    fn validate(&self, errors: &mut ErrorCollection, parent_location: &str) {
        let location = self.location(parent_location);
        tracing::trace!(%location, "validating environment variable");

        let before = errors.error_count();
        errors.check_missing(&location, "name", self.name());
        self.validate_value(errors, &location);

        let found = errors.error_count() - before;
        if found > 0 {
            tracing::debug!(%location, found, "environment variable is invalid");
        }
    }
}

impl PartialEq for EnvironmentVariable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.value == other.value
            && self.encrypted_value == other.encrypted_value
    }
}

impl Eq for EnvironmentVariable {}

impl Hash for EnvironmentVariable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.value.hash(state);
        self.encrypted_value.hash(state);
    }
}

impl fmt::Display for EnvironmentVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn field(value: Option<&str>) -> &str {
            value.unwrap_or("<null>")
        }

        writeln!(f, "EnvironmentVariable[")?;
        writeln!(f, "  name={}", field(self.name()))?;
        writeln!(f, "  value={}", field(self.value()))?;
        writeln!(f, "  encrypted_value={}", field(self.encrypted_value()))?;
        write!(f, "]")
    }
}
