//! User entity - the single record persisted for a signed-in session.

use crate::UserRole;

use serde::{Deserialize, Serialize};

/// The currently authenticated marketplace user.
///
/// Serialized with camelCase field names (`isVerified`), which is the
/// representation stored under the `user` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque identifier
    pub id: String,
    pub email: String,
    pub role: UserRole,
    /// Display name
    pub name: String,
    pub is_verified: bool,
}

impl User {
    /// Create a user whose verification flag follows the role.
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role,
            name: name.into(),
            is_verified: role.is_auto_verified(),
        }
    }

    pub fn is_buyer(&self) -> bool {
        self.role == UserRole::Buyer
    }

    pub fn is_seller(&self) -> bool {
        self.role == UserRole::Seller
    }

    pub fn is_runner(&self) -> bool {
        self.role == UserRole::Runner
    }
}
