use crate::{User, UserPatch, UserRole};

fn sample_user() -> User {
    User::new("u-1", "old@example.com", UserRole::Seller, "Old Name")
}

#[test]
fn test_empty_patch_is_empty_and_leaves_user_unchanged() {
    let patch = UserPatch::default();
    let user = sample_user();

    assert!(patch.is_empty());
    assert_eq!(patch.apply_to(&user), user);
}

#[test]
fn test_patch_overrides_only_present_fields() {
    let patch = UserPatch::default().with_name("New Name").with_verified(true);
    let user = sample_user();

    let merged = patch.apply_to(&user);

    assert!(!patch.is_empty());
    assert_eq!(merged.name, "New Name");
    assert!(merged.is_verified);
    assert_eq!(merged.email, user.email);
    assert_eq!(merged.role, user.role);
    assert_eq!(merged.id, user.id);
}

#[test]
fn test_patch_can_change_role() {
    let merged = UserPatch::default()
        .with_role(UserRole::Runner)
        .apply_to(&sample_user());

    assert_eq!(merged.role, UserRole::Runner);
}

#[test]
fn test_patch_deserializes_from_partial_json() {
    let patch: UserPatch = serde_json::from_str(r#"{"email":"new@example.com"}"#).unwrap();

    assert_eq!(patch, UserPatch::default().with_email("new@example.com"));
}
