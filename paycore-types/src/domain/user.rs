//! User domain model.
//!
//! Users are owned by an external collaborator; the payment core only ever
//! reads them, and only to decide whether a payment may be created.

use serde::{Deserialize, Serialize};

/// Unique identifier for a User.
///
/// User ids are assigned by the external user store, so unlike payment ids
/// there is no generating constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wraps an externally-assigned user id.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Activation status gating payment creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "ACTIVE"),
            UserStatus::Inactive => write!(f, "INACTIVE"),
        }
    }
}

/// An identity known to the external user store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Display name, used when composing payment messages
    pub name: String,
    /// Activation status
    pub status: UserStatus,
}

impl User {
    /// Creates a user record.
    pub fn new(id: UserId, name: impl Into<String>, status: UserStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }

    /// Returns true when payments may be created for this user.
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}
