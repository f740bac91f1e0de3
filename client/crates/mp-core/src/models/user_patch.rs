use crate::{User, UserRole};

use serde::{Deserialize, Serialize};

/// Partial user used by profile updates. Absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.email.is_none()
            && self.role.is_none()
            && self.name.is_none()
            && self.is_verified.is_none()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.is_verified = Some(verified);
        self
    }

    /// Merge this patch over `user`, returning the merged record.
    pub fn apply_to(&self, user: &User) -> User {
        User {
            id: self.id.clone().unwrap_or_else(|| user.id.clone()),
            email: self.email.clone().unwrap_or_else(|| user.email.clone()),
            role: self.role.unwrap_or(user.role),
            name: self.name.clone().unwrap_or_else(|| user.name.clone()),
            is_verified: self.is_verified.unwrap_or(user.is_verified),
        }
    }
}
