use super::*;

#[test]
fn hash_then_verify_accepts_original_password() {
    let stored = hash_password("correcthorse");
    assert!(verify_password("correcthorse", &stored));
}

#[test]
fn verify_rejects_wrong_password() {
    let stored = hash_password("correcthorse");
    assert!(!verify_password("correchtorse", &stored));
    assert!(!verify_password("", &stored));
}

#[test]
fn hashes_are_salted() {
    let a = hash_password("same-password");
    let b = hash_password("same-password");
    assert_ne!(a, b, "two hashes of the same password must differ by salt");
    assert!(verify_password("same-password", &a));
    assert!(verify_password("same-password", &b));
}

#[test]
fn stored_hash_has_salt_and_digest_parts() {
    let stored = hash_password("x");
    let (salt, digest) = stored.split_once('$').expect("salt$digest format");
    assert_eq!(salt.len(), SALT_LEN * 2);
    assert_eq!(digest.len(), 64);
}

#[test]
fn verify_rejects_malformed_stored_value() {
    assert!(!verify_password("anything", "not-a-hash"));
    assert!(!verify_password("anything", ""));
}
