//! Sibling group of environment variables
//!
//! The variables declared on one pipeline, job or environment. Names must be
//! unique within the group.

use super::environment_variable::EnvironmentVariable;
use super::errors::ErrorCollection;
use super::location::Contract;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Environment variables of one enclosing scope.
///
/// Equality considers the variables only, not the location override.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct EnvironmentVariables {
    vars: Vec<EnvironmentVariable>,

    #[serde(skip)]
    location: Option<String>,
}

impl EnvironmentVariables {
    /// Creates a new empty group
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a group from a list
    #[must_use]
    pub fn from_vec(vars: Vec<EnvironmentVariable>) -> Self {
        Self {
            vars,
            location: None,
        }
    }

    /// Attaches the location where this group was declared
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Adds a variable
    pub fn push(&mut self, var: EnvironmentVariable) {
        self.vars.push(var);
    }

    /// Gets the first variable with the given name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EnvironmentVariable> {
        self.vars.iter().find(|v| v.name() == Some(name))
    }

    /// Returns an iterator over all variables
    pub fn iter(&self) -> impl Iterator<Item = &EnvironmentVariable> {
        self.vars.iter()
    }

    /// Returns the number of variables
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if the group is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Reports every repeated name at the location of its later occurrence.
    pub fn validate_uniqueness(&self, errors: &mut ErrorCollection, parent_location: &str) {
        let location = self.location(parent_location);
        let mut seen = HashSet::with_capacity(self.vars.len());
        for var in &self.vars {
            if let Err(error) = var.check_name_uniqueness(&mut seen) {
                errors.add(var.location(&location), error);
            }
        }
    }
}

impl Contract for EnvironmentVariables {
    fn location_override(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn validate(&self, errors: &mut ErrorCollection, parent_location: &str) {
        let location = self.location(parent_location);
        tracing::trace!(%location, count = self.vars.len(), "validating environment variables");
        for var in &self.vars {
            var.validate(errors, &location);
        }
        self.validate_uniqueness(errors, parent_location);
    }
}

impl PartialEq for EnvironmentVariables {
    fn eq(&self, other: &Self) -> bool {
        self.vars == other.vars
    }
}

impl Eq for EnvironmentVariables {}

impl FromIterator<EnvironmentVariable> for EnvironmentVariables {
    fn from_iter<I: IntoIterator<Item = EnvironmentVariable>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl IntoIterator for EnvironmentVariables {
    type Item = EnvironmentVariable;
    type IntoIter = std::vec::IntoIter<EnvironmentVariable>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

impl<'a> IntoIterator for &'a EnvironmentVariables {
    type Item = &'a EnvironmentVariable;
    type IntoIter = std::slice::Iter<'a, EnvironmentVariable>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::ContractError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_group_is_valid() {
        assert!(EnvironmentVariables::new().check("pipeline").is_ok());
    }

    #[test]
    fn test_get_and_len() {
        let vars: EnvironmentVariables = [
            EnvironmentVariable::plain("A", "1"),
            EnvironmentVariable::encrypted("B", "AES:2"),
        ]
        .into_iter()
        .collect();

        assert_eq!(vars.len(), 2);
        assert!(!vars.is_empty());
        assert_eq!(vars.get("B").and_then(EnvironmentVariable::encrypted_value), Some("AES:2"));
        assert!(vars.get("C").is_none());
    }

    #[test]
    fn test_duplicate_attributed_to_later_occurrence() {
        let vars = EnvironmentVariables::from_vec(vec![
            EnvironmentVariable::plain("a", "1"),
            EnvironmentVariable::plain("b", "2"),
            EnvironmentVariable::plain("a", "3").with_location("third"),
        ]);

        let errors = vars.errors("pipeline");
        assert_eq!(errors.error_count(), 1);
        assert_eq!(
            errors.errors_at("third; Environment variable (a)"),
            &[ContractError::DuplicateName {
                name: "a".to_string()
            }]
        );
    }

    #[test]
    fn test_field_errors_and_duplicates_together() {
        let vars = EnvironmentVariables::from_vec(vec![
            EnvironmentVariable::new("KEY"),
            EnvironmentVariable::plain("KEY", "x"),
            EnvironmentVariable::plain("", "y"),
        ]);

        let errors = vars.errors("pipeline");
        let location = "pipeline; Environment variable (KEY)";
        assert_eq!(
            errors.errors_at(location),
            &[
                ContractError::MissingValue,
                ContractError::DuplicateName {
                    name: "KEY".to_string()
                }
            ]
        );
        assert_eq!(errors.error_count(), 3);
    }

    #[test]
    fn test_repeated_blank_names_are_duplicates() {
        let vars = EnvironmentVariables::from_vec(vec![
            EnvironmentVariable::plain("", "1"),
            EnvironmentVariable::plain("", "2"),
        ]);

        let errors = vars.errors("pipeline");
        let location = "pipeline; Environment variable (unknown name)";
        assert_eq!(
            errors.errors_at(location),
            &[
                ContractError::MissingField {
                    field: "name".to_string()
                },
                ContractError::MissingField {
                    field: "name".to_string()
                },
                ContractError::DuplicateName {
                    name: String::new()
                }
            ]
        );
    }

    #[test]
    fn test_group_location_override_reaches_children() {
        let vars = EnvironmentVariables::from_vec(vec![
            EnvironmentVariable::new("A"),
            EnvironmentVariable::plain("A", "x"),
        ])
        .with_location("ci.gocd.yaml; Job (test)");

        let errors = vars.errors("pipeline");
        assert_eq!(
            errors.locations().collect::<Vec<_>>(),
            vec!["ci.gocd.yaml; Job (test); Environment variable (A)"]
        );
        assert_eq!(errors.error_count(), 2);
    }

    #[test]
    fn test_equality_ignores_group_location() {
        let vars = vec![EnvironmentVariable::plain("A", "1")];
        assert_eq!(
            EnvironmentVariables::from_vec(vars.clone()),
            EnvironmentVariables::from_vec(vars).with_location("elsewhere")
        );
    }

    #[test]
    fn test_serde_is_a_plain_list() {
        let json = r#"[{"name":"A","value":"1"},{"name":"B","encrypted_value":"AES:2"}]"#;
        let vars: EnvironmentVariables = serde_json::from_str(json).unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(serde_json::to_string(&vars).unwrap(), json);
    }
}
