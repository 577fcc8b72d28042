//! Form field checks shared by the login and CRUD dialogs.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const PASSWORD_MIN_LEN: usize = 6;

/// Loose `local@domain.tld` shape check. The API remains the authority.
pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain
            .rsplit_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Error text for a required email field, or `None` when it is acceptable.
pub fn email_error(raw: &str) -> Option<&'static str> {
    if raw.trim().is_empty() {
        Some("Email is required")
    } else if !is_valid_email(raw) {
        Some("Email is invalid")
    } else {
        None
    }
}

/// Error text for a required password field.
pub fn password_error(raw: &str) -> Option<&'static str> {
    if raw.trim().is_empty() {
        Some("Password is required")
    } else if raw.chars().count() < PASSWORD_MIN_LEN {
        Some("Password must be at least 6 characters")
    } else {
        None
    }
}

pub fn required(raw: &str, message: &'static str) -> Option<&'static str> {
    raw.trim().is_empty().then_some(message)
}
