use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::util::clock::FixedClock;

fn encode(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

#[test]
fn decode_claims_reads_exp_and_sub() {
    let token = encode(&serde_json::json!({"sub": "u1", "exp": 2_000_000_000}));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.exp, 2_000_000_000);
    assert_eq!(claims.sub.as_deref(), Some("u1"));
}

#[test]
fn decode_claims_accepts_id_alias_and_float_exp() {
    let token = encode(&serde_json::json!({"id": "m7", "exp": 1_700_000_000.9}));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.exp, 1_700_000_000);
    assert_eq!(claims.sub.as_deref(), Some("m7"));
}

#[test]
fn decode_claims_tolerates_padded_payload() {
    let header = URL_SAFE_NO_PAD.encode(b"{}");
    let payload = URL_SAFE_NO_PAD.encode(br#"{"exp":10}"#);
    let token = format!("{header}.{payload}==.sig");
    assert_eq!(decode_claims(&token).unwrap().exp, 10);
}

#[test]
fn decode_claims_rejects_wrong_segment_count() {
    assert_eq!(decode_claims("abc"), Err(TokenError::Malformed));
    assert_eq!(decode_claims("a.b"), Err(TokenError::Malformed));
    assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Malformed));
    assert_eq!(decode_claims("a..c"), Err(TokenError::Malformed));
}

#[test]
fn decode_claims_rejects_non_base64_payload() {
    assert!(matches!(decode_claims("a.!!!.c"), Err(TokenError::Encoding(_))));
}

#[test]
fn decode_claims_requires_exp() {
    let token = encode(&serde_json::json!({"sub": "u1"}));
    assert!(matches!(decode_claims(&token), Err(TokenError::Claims(_))));
    let token = encode(&serde_json::json!({"exp": "tomorrow"}));
    assert!(matches!(decode_claims(&token), Err(TokenError::Claims(_))));
}

#[test]
fn expiry_boundary_counts_as_expired() {
    let claims = TokenClaims { exp: 100, sub: None };
    assert!(!claims.is_expired_at(99));
    assert!(claims.is_expired_at(100));
    assert!(claims.is_expired_at(101));
}

#[test]
fn live_expiry_rejects_past_tokens() {
    let clock = FixedClock::at(1_000);
    let past = encode(&serde_json::json!({"exp": 999}));
    let future = encode(&serde_json::json!({"exp": 5_000}));
    assert!(matches!(live_expiry(&past, &clock), Err(TokenError::Claims(_))));
    assert_eq!(live_expiry(&future, &clock), Ok(5_000));
}
