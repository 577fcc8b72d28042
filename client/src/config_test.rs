use super::*;

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url("https://crm.example.com/api/"), "https://crm.example.com/api");
    assert_eq!(normalize_base_url("https://crm.example.com/api//"), "https://crm.example.com/api");
}

#[test]
fn normalize_base_url_falls_back_on_blank_input() {
    assert_eq!(normalize_base_url("   "), DEFAULT_API_URL);
}

#[test]
fn api_base_url_never_ends_with_slash() {
    assert!(!api_base_url().ends_with('/'));
}
