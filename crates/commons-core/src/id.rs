//! Opaque identifiers and the id generation capability.
//!
//! Every entity that needs a fresh id (field definitions, responses,
//! persisted communities) draws it from an [`IdGenerator`] handed to its
//! owner, so tests can swap in [`SequentialIdGenerator`] and get stable ids.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of a field definition, stable for the definition's lifetime.
    FieldId
);
string_id!(
    /// Identifier of a submitted response.
    ResponseId
);
string_id!(
    /// Identifier assigned to a community by the persistence collaborator.
    CommunityId
);

/// Source of fresh opaque identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns an identifier that has not been returned before.
    fn next_id(&self) -> String;
}

/// Shared handle to an id generator.
pub type SharedIdGenerator = Arc<dyn IdGenerator>;

/// Random UUID v4 identifiers. The default for production use.
#[derive(Debug, Clone, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `{prefix}-{n}` identifiers, starting at 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

/// Returns the default generator handle.
pub fn default_id_generator() -> SharedIdGenerator {
    Arc::new(UuidIdGenerator)
}
