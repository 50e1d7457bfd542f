use serde::{Deserialize, Serialize};

use naming_core::{NamedEntity, ValueObject};

/// A person, identified by the full name they were given.
///
/// Immutable after construction; the name is owned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    full_name: String,
}

impl Person {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }
}

impl ValueObject for Person {}

impl NamedEntity for Person {
    fn full_name(&self) -> String {
        self.full_name.clone()
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.full_name)
    }
}
