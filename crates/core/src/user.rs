//! User model.

use serde::{Deserialize, Serialize};

use crate::error::{require, ModelError, Result};
use crate::id::UserId;
use crate::Time;

/// The single learner (or mentor) using the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Advisory role; gates mentor views in the UI only
    pub role: Role,

    /// Avatar image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// When the user joined
    pub joined_at: Time,
}

impl User {
    /// Create a user, rejecting an empty name or a malformed email.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        joined_at: Time,
    ) -> Result<Self> {
        let user = Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            avatar: None,
            joined_at,
        };
        user.validate()?;
        Ok(user)
    }

    /// Check the name is present and the email looks like an address.
    pub fn validate(&self) -> Result<()> {
        require("user", "name", &self.name)?;
        if !self.email.contains('@') {
            return Err(ModelError::InvalidValue { kind: "email", value: self.email.clone() });
        }
        Ok(())
    }

    /// Set the avatar reference.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Whether mentor-only views should be offered.
    pub fn is_mentor(&self) -> bool {
        self.role == Role::Mentor
    }
}

/// User roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Learner
    #[default]
    Student,
    /// Reviewer of other learners
    Mentor,
}

impl Role {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Mentor => "mentor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "mentor" => Ok(Role::Mentor),
            _ => Err(ModelError::InvalidValue { kind: "role", value: s.to_string() }),
        }
    }
}
