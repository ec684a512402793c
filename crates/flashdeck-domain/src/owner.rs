//! The owner identity union: a real user or the administrative override.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// Sentinel owner string for the environment-configured administrator.
///
/// Fixed constant, distinct from every real user id (user ids are UUIDs and
/// this is not one).
pub const ADMIN_SENTINEL: &str = "env-admin";

/// Identity that can own a collection: a registered user, or the
/// administrator configured through the environment.
///
/// The administrator holds implicit ownership of every collection; see
/// [`OwnerId::can_access`]. Serializes as a plain string — the user's UUID or
/// [`ADMIN_SENTINEL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum OwnerId {
    Admin,
    User(UserId),
}

impl OwnerId {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Ownership rule applied by every protected collection operation:
    /// the administrator can access any record, everyone else only their own.
    pub fn can_access(&self, record_owner: &OwnerId) -> bool {
        self.is_admin() || self == record_owner
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str(ADMIN_SENTINEL),
            Self::User(id) => id.fmt(f),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid owner id: {0:?}")]
pub struct ParseOwnerIdError(String);

impl FromStr for OwnerId {
    type Err = ParseOwnerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ADMIN_SENTINEL {
            return Ok(Self::Admin);
        }
        s.parse::<UserId>()
            .map(Self::User)
            .map_err(|_| ParseOwnerIdError(s.to_owned()))
    }
}

impl From<OwnerId> for String {
    fn from(owner: OwnerId) -> Self {
        owner.to_string()
    }
}

impl TryFrom<String> for OwnerId {
    type Error = ParseOwnerIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<UserId> for OwnerId {
    fn from(id: UserId) -> Self {
        Self::User(id)
    }
}
