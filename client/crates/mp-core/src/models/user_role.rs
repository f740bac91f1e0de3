use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Marketplace role, which decides the navigation tree a user lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Browses and orders products
    #[default]
    Buyer,
    /// Lists products and fulfils orders
    Seller,
    /// Delivery courier
    Runner,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [Self::Buyer, Self::Seller, Self::Runner];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
            Self::Runner => "runner",
        }
    }

    /// Only buyers are verified at sign-up; sellers and runners go through
    /// a separate verification flow.
    pub fn is_auto_verified(&self) -> bool {
        matches!(self, Self::Buyer)
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "buyer" => Ok(Self::Buyer),
            "seller" => Ok(Self::Seller),
            "runner" => Ok(Self::Runner),
            _ => Err(CoreError::InvalidUserRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
