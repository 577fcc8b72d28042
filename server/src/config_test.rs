use super::*;

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_defaults_when_blank() {
    assert_eq!(parse_port(Some("   ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_trimmed_number() {
    assert_eq!(parse_port(Some(" 8080 ")).unwrap(), 8080);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT \"eighty\"");
}

#[test]
fn parse_port_rejects_zero_and_overflow() {
    assert!(parse_port(Some("0")).is_err());
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn load_applies_port_from_env() {
    unsafe {
        std::env::set_var("LEPTOS_OUTPUT_NAME", "crm");
        std::env::set_var("LEPTOS_SITE_ADDR", "127.0.0.1:3000");
        std::env::set_var("PORT", "4100");
    }

    let cfg = ServerConfig::load().unwrap();
    assert_eq!(cfg.addr.port(), 4100);
    assert_eq!(cfg.addr.ip().to_string(), "127.0.0.1");
    assert_eq!(cfg.leptos.output_name.as_ref(), "crm");

    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("LEPTOS_SITE_ADDR");
        std::env::remove_var("LEPTOS_OUTPUT_NAME");
    }
}
