//! User record and store error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Identifier assigned by the store. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw id, rejecting zero.
    pub fn new(raw: u64) -> Option<Self> {
        (raw >= 1).then_some(Self(raw))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub(crate) fn first() -> Self {
        Self(1)
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a string could not be turned into a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseUserIdError {
    #[error("not a base-10 integer: {0}")]
    NotAnInteger(#[from] ParseIntError),

    #[error("user id must be >= 1, got {0}")]
    OutOfRange(i64),
}

impl FromStr for UserId {
    type Err = ParseUserIdError;

    /// Accepts anything `i64` parses (including a leading sign) and rejects
    /// values below 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s.parse()?;
        u64::try_from(raw)
            .ok()
            .and_then(UserId::new)
            .ok_or(ParseUserIdError::OutOfRange(raw))
    }
}

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store on create; never changes afterwards.
    pub id: UserId,
    /// Client-supplied display name.
    pub name: String,
}

/// Errors returned by [`crate::store::UserStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No live record has this id.
    #[error("user {0} not found")]
    NotFound(UserId),
}
