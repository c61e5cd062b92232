//! Location resolution and the contract validation protocol
//!
//! A location is a human-readable path string telling a user where in the
//! configuration tree a finding originates. Entities may carry an override
//! location attached while the tree is built; otherwise they inherit the
//! location handed down by their parent.

use super::errors::ErrorCollection;

/// Picks the override location when one is set, the parent location otherwise.
#[must_use]
pub fn resolve_location<'a>(
    location_override: Option<&'a str>,
    parent_location: &'a str,
) -> &'a str {
    location_override.unwrap_or(parent_location)
}

/// A configuration unit that can locate and validate itself.
///
/// Parents call [`validate`](Contract::validate) on each child, sharing one
/// [`ErrorCollection`] for the whole pass.
pub trait Contract {
    /// Location attached while building the tree, if any
    fn location_override(&self) -> Option<&str>;

    /// Location tag of this entity beneath `parent_location`.
    fn location(&self, parent_location: &str) -> String {
        resolve_location(self.location_override(), parent_location).to_string()
    }

    /// Appends every violation of this entity to `errors`.
    fn validate(&self, errors: &mut ErrorCollection, parent_location: &str);

    /// Runs [`validate`](Contract::validate) into a fresh collection.
    fn errors(&self, parent_location: &str) -> ErrorCollection {
        let mut errors = ErrorCollection::new();
        self.validate(&mut errors, parent_location);
        errors
    }

    /// Returns the collected findings as an error if there are any.
    ///
    /// # Errors
    ///
    /// Returns the non-empty [`ErrorCollection`] when validation found problems.
    fn check(&self, parent_location: &str) -> Result<(), ErrorCollection> {
        let errors = self.errors(parent_location);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
