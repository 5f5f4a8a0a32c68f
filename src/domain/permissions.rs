use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::UserProfile;

/// Capability tags granted to a user, e.g. `patients.read` or `billing.write`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permissions(BTreeSet<String>);

impl Permissions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, permission: &str) -> bool {
        self.0.contains(permission)
    }

    pub fn insert(&mut self, permission: impl Into<String>) -> bool {
        self.0.insert(permission.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Comma separated form used by the users table.
    pub fn to_column(&self) -> String {
        self.0.iter().cloned().collect::<Vec<_>>().join(",")
    }

    pub fn from_column(column: &str) -> Self {
        column
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Permissions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Single capability predicate: super-admins pass every check.
pub fn can(permission: &str, user: &UserProfile) -> bool {
    user.is_super_admin || user.permissions.contains(permission)
}
