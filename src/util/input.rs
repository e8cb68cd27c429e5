//! Form input validation for the sign-in and sign-up pages.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::net::types::{Credentials, Registration};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Trim and require both sign-in fields.
///
/// # Errors
///
/// Returns a user-facing message when a field is blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Validate the sign-up form.
///
/// # Errors
///
/// Returns a user-facing message for the first failing rule.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email, and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(Registration {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}
