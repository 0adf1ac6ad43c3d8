//! Person model.
//!
//! This module defines the Person struct identifying a staff member
//! in the leave management system.

use serde::{Deserialize, Serialize};

/// Identifies a staff member by login name.
///
/// The calculation engine only uses the person as a lookup key when
/// querying applications and entitlement accounts; everything else about
/// a person (name, department, roles) lives outside the core.
///
/// # Example
///
/// ```
/// use leave_engine::models::Person;
///
/// let person = Person::new("horscht");
/// assert_eq!(person.login_name, "horscht");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    /// The unique login name of the person.
    pub login_name: String,
}

impl Person {
    /// Creates a person from a login name.
    pub fn new(login_name: impl Into<String>) -> Self {
        Self {
            login_name: login_name.into(),
        }
    }
}
