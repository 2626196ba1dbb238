use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  demo1  ", "secret"),
        Ok(("demo1".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Introduce usuario y contraseña"));
    assert_eq!(validate_login_input("demo1", ""), Err("Introduce usuario y contraseña"));
    assert_eq!(validate_login_input("   ", "secret"), Err("Introduce usuario y contraseña"));
}

#[test]
fn validate_login_input_keeps_password_untrimmed() {
    // Passwords may legitimately contain surrounding spaces.
    assert_eq!(
        validate_login_input("demo1", " p w "),
        Ok(("demo1".to_owned(), " p w ".to_owned()))
    );
}
