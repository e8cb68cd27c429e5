use super::*;

#[test]
fn validate_credentials_trims_email() {
    let creds = validate_credentials("  a@b.com ", "pw").unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, "pw");
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "pw").unwrap_err(), "Enter both email and password.");
    assert_eq!(validate_credentials("a@b.com", "").unwrap_err(), "Enter both email and password.");
}

#[test]
fn validate_registration_accepts_valid_form() {
    let reg = validate_registration(" Ada ", "ada@example.com", "secret1", "secret1").unwrap();
    assert_eq!(reg.name, "Ada");
    assert_eq!(reg.email, "ada@example.com");
}

#[test]
fn validate_registration_rules_in_order() {
    assert_eq!(
        validate_registration("", "a@b.com", "secret1", "secret1").unwrap_err(),
        "Fill in name, email, and password."
    );
    assert_eq!(
        validate_registration("Ada", "nope", "secret1", "secret1").unwrap_err(),
        "Enter a valid email address."
    );
    assert_eq!(
        validate_registration("Ada", "a@b.com", "short", "short").unwrap_err(),
        "Password must be at least 6 characters."
    );
    assert_eq!(
        validate_registration("Ada", "a@b.com", "secret1", "secret2").unwrap_err(),
        "Passwords do not match."
    );
}
