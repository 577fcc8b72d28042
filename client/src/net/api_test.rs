use super::*;

// =============================================================
// Token injection
// =============================================================

#[test]
fn authorization_header_present_only_with_token() {
    let anonymous = ApiClient::new("http://api.test");
    assert_eq!(anonymous.authorization(), None);

    let authed = anonymous.clone().with_token(Some("abc.def.ghi".to_owned()));
    assert_eq!(authed.authorization().as_deref(), Some("Bearer abc.def.ghi"));
}

#[test]
fn empty_token_sends_no_header() {
    let client = ApiClient::new("http://api.test").with_token(Some(String::new()));
    assert_eq!(client.authorization(), None);
}

#[test]
fn with_token_none_strips_previous_token() {
    let client = ApiClient::new("http://api.test").with_token(Some("t".to_owned())).with_token(None);
    assert_eq!(client.token(), None);
}

// =============================================================
// URL building
// =============================================================

#[test]
fn url_joins_base_and_path_with_single_slash() {
    let client = ApiClient::new("http://localhost:5000/api");
    assert_eq!(client.url("/me"), "http://localhost:5000/api/me");
    assert_eq!(client.url("auth/login"), "http://localhost:5000/api/auth/login");
}

#[test]
fn resource_paths_encode_identifiers() {
    assert_eq!(manager_path("64f1a2"), "/employer/managers/64f1a2");
    assert_eq!(employer_lead_path("a b/c"), "/employer/leads/a%20b%2Fc");
    assert_eq!(assigned_lead_path("l-1"), "/manager/leads/l-1");
}

#[test]
fn encode_component_keeps_unreserved_and_escapes_the_rest() {
    assert_eq!(encode_component("A-z_0.9~"), "A-z_0.9~");
    assert_eq!(encode_component("a&b=c?d#e"), "a%26b%3Dc%3Fd%23e");
    assert_eq!(encode_component("/employer/leads?status=PENDING"), "%2Femployer%2Fleads%3Fstatus%3DPENDING");
    assert_eq!(encode_component("é"), "%C3%A9");
}

#[test]
fn employer_leads_query_combines_filters() {
    assert_eq!(employer_leads_query(None, None), "/employer/leads");
    assert_eq!(employer_leads_query(Some(LeadStatus::InProgress), None), "/employer/leads?status=IN_PROGRESS");
    assert_eq!(
        employer_leads_query(Some(LeadStatus::Pending), Some("m1")),
        "/employer/leads?status=PENDING&managerId=m1"
    );
    assert_eq!(employer_leads_query(None, Some("")), "/employer/leads");
}

#[test]
fn assigned_leads_query_adds_status_only_when_set() {
    assert_eq!(assigned_leads_query(None), "/manager/leads");
    assert_eq!(assigned_leads_query(Some(LeadStatus::Canceled)), "/manager/leads?status=CANCELED");
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_body_maps_errors_to_decode_variant() {
    let parsed: Result<LoginResponse, _> = decode_body(r#"{"token":"x"}"#);
    assert_eq!(parsed.unwrap().token, "x");
    let broken: Result<LoginResponse, _> = decode_body("not json");
    assert!(matches!(broken, Err(ApiError::Decode(_))));
}

#[test]
fn http_method_names() {
    assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
    assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_are_unavailable_outside_browser() {
    let client = ApiClient::new("http://api.test");
    let result = futures::executor::block_on(client.list_managers());
    assert_eq!(result, Err(ApiError::Unavailable));
    let login = futures::executor::block_on(AuthApi::login(&client, "a@b.co", "secret1"));
    assert_eq!(login, Err(ApiError::Unavailable));
}
