use crate::{User, UserRole};

#[test]
fn test_user_new_sets_verification_from_role() {
    let buyer = User::new("u-1", "b@example.com", UserRole::Buyer, "Bea");
    let seller = User::new("u-2", "s@example.com", UserRole::Seller, "Sol");

    assert!(buyer.is_verified);
    assert!(!seller.is_verified);
    assert!(buyer.is_buyer());
    assert!(seller.is_seller());
    assert!(!seller.is_runner());
}

#[test]
fn test_user_serializes_with_camel_case_fields() {
    let user = User::new("u-1", "r@example.com", UserRole::Runner, "Rae");

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["id"], "u-1");
    assert_eq!(json["role"], "runner");
    assert_eq!(json["isVerified"], false);
    assert!(json.get("is_verified").is_none());
}

#[test]
fn test_user_deserializes_persisted_record() {
    let json = r#"{"id":"1","email":"a@b.com","role":"buyer","name":"Test User","isVerified":true}"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.id, "1");
    assert_eq!(user.name, "Test User");
    assert_eq!(user.role, UserRole::Buyer);
    assert!(user.is_verified);
}

#[test]
fn test_user_with_unknown_role_fails_to_deserialize() {
    let json = r#"{"id":"1","email":"a@b.com","role":"admin","name":"X","isVerified":true}"#;
    assert!(serde_json::from_str::<User>(json).is_err());
}
