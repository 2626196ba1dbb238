use super::*;

#[test]
fn matching_passwords_pass_validation() {
    assert_eq!(validate_password_change("old", "nuevo", "nuevo"), Ok(()));
}

#[test]
fn mismatched_confirmation_is_rejected() {
    assert_eq!(
        validate_password_change("old", "nuevo", "distinto"),
        Err("Las contraseñas nuevas no coinciden")
    );
}

#[test]
fn empty_fields_are_rejected() {
    assert!(validate_password_change("", "nuevo", "nuevo").is_err());
    assert!(validate_password_change("old", "", "").is_err());
}
