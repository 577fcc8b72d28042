use super::*;

#[test]
fn accepts_ordinary_addresses() {
    assert!(is_valid_email("employer@example.com"));
    assert!(is_valid_email("  jane.doe@mail.example.org "));
}

#[test]
fn rejects_malformed_addresses() {
    for bad in ["", "plain", "@example.com", "a@", "a@example", "a@.com", "a@example.", "a b@example.com"] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn email_error_distinguishes_missing_from_invalid() {
    assert_eq!(email_error("   "), Some("Email is required"));
    assert_eq!(email_error("nope"), Some("Email is invalid"));
    assert_eq!(email_error("a@b.co"), None);
}

#[test]
fn password_error_enforces_minimum_length() {
    assert_eq!(password_error(""), Some("Password is required"));
    assert_eq!(password_error("12345"), Some("Password must be at least 6 characters"));
    assert_eq!(password_error("password123"), None);
}

#[test]
fn required_flags_blank_input() {
    assert_eq!(required(" ", "Name is required"), Some("Name is required"));
    assert_eq!(required("Acme", "Name is required"), None);
}
