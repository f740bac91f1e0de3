use crate::{CoreError, UserRole};

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::Buyer.as_str(), "buyer");
    assert_eq!(UserRole::Seller.as_str(), "seller");
    assert_eq!(UserRole::Runner.as_str(), "runner");
}

#[test]
fn test_user_role_from_str_roundtrips_every_role() {
    for role in UserRole::ALL {
        assert_eq!(UserRole::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_user_role_from_str_rejects_unknown() {
    let err = UserRole::from_str("courier").unwrap_err();
    assert!(matches!(err, CoreError::InvalidUserRole { ref value, .. } if value == "courier"));
}

#[test]
fn test_user_role_from_str_is_case_sensitive() {
    assert!(UserRole::from_str("Buyer").is_err());
}

#[test]
fn test_only_buyer_is_auto_verified() {
    assert!(UserRole::Buyer.is_auto_verified());
    assert!(!UserRole::Seller.is_auto_verified());
    assert!(!UserRole::Runner.is_auto_verified());
}

#[test]
fn test_user_role_default_is_buyer() {
    assert_eq!(UserRole::default(), UserRole::Buyer);
}
