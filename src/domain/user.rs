use serde::{Deserialize, Serialize};

use super::{Password, Permissions, Username};

/// What the client keeps about the logged-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub permissions: Permissions,
    #[serde(default)]
    pub is_super_admin: bool,
}

impl UserProfile {
    pub fn can(&self, permission: &str) -> bool {
        super::can(permission, self)
    }
}

/// A stored account. The password hash never leaves the user store.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: Username,
    pub display_name: String,
    pub permissions: Permissions,
    pub is_super_admin: bool,
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.as_ref().to_owned(),
            display_name: self.display_name.clone(),
            permissions: self.permissions.clone(),
            is_super_admin: self.is_super_admin,
        }
    }
}

/// Input for creating an account.
#[derive(Clone, Debug, PartialEq)]
pub struct NewUser {
    pub username: Username,
    pub password: Password,
    pub display_name: String,
    pub permissions: Permissions,
    pub is_super_admin: bool,
}

impl NewUser {
    pub fn new(username: Username, password: Password, display_name: impl Into<String>) -> Self {
        NewUser {
            username,
            password,
            display_name: display_name.into(),
            permissions: Permissions::new(),
            is_super_admin: false,
        }
    }

    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn super_admin(mut self) -> Self {
        self.is_super_admin = true;
        self
    }
}
