//! Unique identifiers for learnpath entities.
//!
//! Identifiers are opaque strings on the wire. Generated ones are ULIDs, but
//! anything non-empty loaded from a persisted record is accepted.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{ModelError, Result};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier, rejecting empty input.
            pub fn new(value: impl Into<String>) -> Result<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ModelError::EmptyId(stringify!($name)));
                }
                Ok(Self(value))
            }

            /// Build an identifier from ULID parts.
            ///
            /// Only the low 80 bits of `random` are used.
            pub fn from_parts(timestamp_ms: u64, random: u128) -> Self {
                Self(Ulid::from_parts(timestamp_ms, random).to_string())
            }

            /// Borrow the raw identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ModelError;

            fn try_from(value: String) -> Result<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }
    };
}

string_id! {
    /// Unique identifier for a Roadmap
    RoadmapId
}

string_id! {
    /// Unique identifier for a Module
    ModuleId
}

string_id! {
    /// Unique identifier for a Topic
    TopicId
}

string_id! {
    /// Unique identifier for a User
    UserId
}
