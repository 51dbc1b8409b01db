//! Student records

use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// Unique identifier for a student
///
/// Serialized as a plain number. Deserializing `0` fails, since assigned
/// IDs start at 1.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct StudentId(pub u64);

impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u64::deserialize(deserializer)? {
            0 => Err(de::Error::custom("student id must be positive, got 0")),
            id => Ok(StudentId(id)),
        }
    }
}

impl From<u64> for StudentId {
    fn from(id: u64) -> Self {
        StudentId(id)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored student record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    /// Assigned by the service on create, never changed afterwards
    pub id: StudentId,

    pub name: String,

    pub age: u32,
}

/// Caller-supplied fields for creating or updating a student
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentInput {
    pub name: String,
    pub age: u32,
}

impl StudentInput {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        StudentInput {
            name: name.into(),
            age,
        }
    }
}

impl Student {
    /// Create a student record with an explicit ID
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>, age: u32) -> Self {
        Student {
            id: id.into(),
            name: name.into(),
            age,
        }
    }

    /// Build a record from caller input and an assigned ID
    pub fn with_input(id: StudentId, input: StudentInput) -> Self {
        Student {
            id,
            name: input.name,
            age: input.age,
        }
    }

    /// Overwrite name and age from the input; the ID is left alone
    pub fn apply(&mut self, input: StudentInput) {
        self.name = input.name;
        self.age = input.age;
    }
}
