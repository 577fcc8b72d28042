use super::*;

#[test]
fn valid_input_returns_trimmed_email() {
    assert_eq!(validate_login_input("  employer@example.com ", "password123"), Ok("employer@example.com".to_owned()));
}

#[test]
fn empty_form_flags_both_fields() {
    assert_eq!(
        validate_login_input("", ""),
        Err(LoginErrors { email: Some("Email is required"), password: Some("Password is required") })
    );
}

#[test]
fn malformed_email_and_short_password_are_rejected() {
    let errors = validate_login_input("employer", "12345").unwrap_err();
    assert_eq!(errors.email, Some("Email is invalid"));
    assert_eq!(errors.password, Some("Password must be at least 6 characters"));
}

#[test]
fn whitespace_password_counts_as_missing() {
    let errors = validate_login_input("a@b.co", "      ").unwrap_err();
    assert!(errors.email.is_none());
    assert_eq!(errors.password, Some("Password is required"));
}

#[test]
fn demo_accounts_pass_validation() {
    for (_, email, password) in DEMO_ACCOUNTS {
        assert!(validate_login_input(email, password).is_ok(), "{email}");
    }
}
