//! # tally-types: Core record types for `Tally`
//!
//! This crate contains the plain value types shared across the workspace:
//! - Identifiers ([`UserId`])
//! - Records ordered by a key field ([`Person`])
//! - Records subject to save validation ([`User`])
//!
//! Every type here is an immutable value with structural equality: two
//! values with identical fields are equal and interchangeable.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

// ============================================================================
// Records
// ============================================================================

/// A named person with an age.
///
/// The age is the orderable field used when looking for the oldest person.
///
/// # Examples
///
/// ```
/// # use tally_types::Person;
/// let alice = Person::new("Alice", 29);
/// assert_eq!(alice.to_string(), "Person(name=Alice, age=29)");
/// assert_eq!(alice, Person::new("Alice", 29));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Returns a copy of this person with a different age.
    pub fn with_age(&self, age: u32) -> Self {
        Self {
            name: self.name.clone(),
            age,
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person(name={}, age={})", self.name, self.age)
    }
}

/// A user record as submitted for saving.
///
/// Fields are not validated on construction; see `tally::user::validate_for_save`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub address: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
        }
    }
}
