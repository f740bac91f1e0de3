use crate::NavigationTree;
use crate::navigation_tree::{AUTH, BUYER, RUNNER, SELLER};

use mp_core::{User, UserRole};

use serde::Serialize;

/// The four mutually exclusive navigation trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootRoute {
    Unauthenticated,
    Buyer,
    Seller,
    Runner,
}

impl RootRoute {
    pub const ALL: [RootRoute; 4] = [
        Self::Unauthenticated,
        Self::Buyer,
        Self::Seller,
        Self::Runner,
    ];

    pub fn from_role(role: UserRole) -> Self {
        match role {
            UserRole::Buyer => Self::Buyer,
            UserRole::Seller => Self::Seller,
            UserRole::Runner => Self::Runner,
        }
    }

    /// Signed out maps to `Unauthenticated`, otherwise the user's role.
    pub fn for_user(user: Option<&User>) -> Self {
        user.map_or(Self::Unauthenticated, |u| Self::from_role(u.role))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Buyer => "buyer",
            Self::Seller => "seller",
            Self::Runner => "runner",
        }
    }

    pub fn tree(&self) -> &'static NavigationTree {
        match self {
            Self::Unauthenticated => &AUTH,
            Self::Buyer => &BUYER,
            Self::Seller => &SELLER,
            Self::Runner => &RUNNER,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Unauthenticated)
    }
}

impl std::fmt::Display for RootRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
