// ==========================
// tests/unit/store_tests.rs
// ==========================
//! Unit tests for the credential store and capability registry
use backend_lib::auth::verify_password;
use backend_lib::error::AppError;
use backend_lib::store::{CapabilityRegistry, UserRecord, UserStore};
use capabilities_common::{CapabilityRecord, Role};
use std::collections::BTreeMap;

const TEST_LOG_N: u8 = 8;

fn consultant(email: &str) -> UserRecord {
    UserRecord {
        email: email.to_string(),
        password_hash: String::new(),
        role: Role::Consultant,
    }
}

fn approver(email: &str) -> UserRecord {
    UserRecord {
        email: email.to_string(),
        password_hash: String::new(),
        role: Role::Approver,
    }
}

fn registry_with(name: &str) -> CapabilityRegistry {
    let mut records = BTreeMap::new();
    records.insert(
        name.to_string(),
        CapabilityRecord {
            description: "desc".to_string(),
            practice_area: "Technology".to_string(),
            skill_levels: vec!["Emerging".to_string(), "Expert".to_string()],
            certifications: Default::default(),
            industry_verticals: Default::default(),
            capacity: 40,
            consultants: Default::default(),
        },
    );
    CapabilityRegistry::from_records(records)
}

#[test]
fn test_user_create_hashes_password() {
    let store = UserStore::new(TEST_LOG_N);

    let record = store
        .create("alice@example.com", "a strong password", Role::Consultant)
        .unwrap();

    // Plaintext never stored
    assert_ne!(record.password_hash, "a strong password");
    assert!(verify_password(&record.password_hash, "a strong password").unwrap());
    assert!(!verify_password(&record.password_hash, "something else").unwrap());
}

#[test]
fn test_user_create_enforces_uniqueness() {
    let store = UserStore::new(TEST_LOG_N);

    store
        .create("alice@example.com", "first password", Role::Consultant)
        .unwrap();
    let second = store.create("alice@example.com", "other password", Role::Admin);

    assert!(matches!(second, Err(AppError::UserExists)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_user_find() {
    let store = UserStore::new(TEST_LOG_N);
    assert!(store.find("ghost@example.com").is_none());

    store
        .create("alice@example.com", "a strong password", Role::Approver)
        .unwrap();

    let found = store.find("alice@example.com").unwrap();
    assert_eq!(found.email, "alice@example.com");
    assert_eq!(found.role, Role::Approver);
}

#[test]
fn test_register_and_snapshot() {
    let registry = registry_with("Cloud Architecture");
    let requester = approver("approver@example.com");

    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());

    registry
        .register("Cloud Architecture", "alice@example.com", &requester)
        .unwrap();

    let snapshot = registry.snapshot();
    assert!(snapshot["Cloud Architecture"]
        .consultants
        .contains("alice@example.com"));
}

#[test]
fn test_register_unknown_capability() {
    let registry = registry_with("Cloud Architecture");
    let requester = approver("approver@example.com");

    let result = registry.register("Quantum Computing", "alice@example.com", &requester);
    assert!(matches!(result, Err(AppError::CapabilityNotFound)));
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let registry = registry_with("Cloud Architecture");
    let requester = approver("approver@example.com");

    registry
        .register("Cloud Architecture", "alice@example.com", &requester)
        .unwrap();
    let second = registry.register("Cloud Architecture", "alice@example.com", &requester);

    // Rejection, not a no-op: the caller must see the conflict
    assert!(matches!(second, Err(AppError::AlreadyRegistered)));
}

#[test]
fn test_consultant_can_only_register_self() {
    let registry = registry_with("Cloud Architecture");
    let requester = consultant("me@example.com");

    let other = registry.register("Cloud Architecture", "other@example.com", &requester);
    assert!(matches!(other, Err(AppError::Forbidden(_))));

    registry
        .register("Cloud Architecture", "me@example.com", &requester)
        .unwrap();
    assert!(registry.snapshot()["Cloud Architecture"]
        .consultants
        .contains("me@example.com"));
}

#[test]
fn test_unregister_semantics() {
    let registry = registry_with("Cloud Architecture");
    let requester = approver("approver@example.com");

    // Absent email fails
    let missing = registry.unregister("Cloud Architecture", "alice@example.com");
    assert!(matches!(missing, Err(AppError::NotRegistered)));

    let unknown = registry.unregister("Quantum Computing", "alice@example.com");
    assert!(matches!(unknown, Err(AppError::CapabilityNotFound)));

    // Present email is removed and disappears from subsequent snapshots
    registry
        .register("Cloud Architecture", "alice@example.com", &requester)
        .unwrap();
    registry
        .unregister("Cloud Architecture", "alice@example.com")
        .unwrap();
    assert!(!registry.snapshot()["Cloud Architecture"]
        .consultants
        .contains("alice@example.com"));
}

#[test]
fn test_snapshot_is_a_copy() {
    let registry = registry_with("Cloud Architecture");
    let requester = approver("approver@example.com");

    let before = registry.snapshot();
    registry
        .register("Cloud Architecture", "alice@example.com", &requester)
        .unwrap();

    // The earlier snapshot does not observe the mutation
    assert!(!before["Cloud Architecture"]
        .consultants
        .contains("alice@example.com"));
}
