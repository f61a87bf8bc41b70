use http_semantics::BasicCredentials;

#[test]
fn to_field_value() {
    // RFC 7617 section 2.
    let credentials = BasicCredentials::new("Aladdin", "open sesame");
    assert_eq!(credentials.to_field_value(), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");

    let credentials = BasicCredentials::new("", "");
    assert_eq!(credentials.to_field_value(), "Basic Og==");
}

#[test]
fn parse() {
    let tests = &[
        ("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==", "Aladdin", "open sesame"),
        ("basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==", "Aladdin", "open sesame"),
        ("BASIC  QWxhZGRpbjpvcGVuIHNlc2FtZQ== ", "Aladdin", "open sesame"),
        // Password with a colon: `user:pass:word`.
        ("Basic dXNlcjpwYXNzOndvcmQ=", "user", "pass:word"),
        // Empty user-id and password.
        ("Basic Og==", "", ""),
    ];
    for (input, user_id, password) in tests {
        let credentials = BasicCredentials::parse(input).unwrap();
        assert_eq!(credentials.user_id, *user_id, "input: {input}");
        assert_eq!(credentials.password, *password, "input: {input}");
    }
}

#[test]
fn parse_invalid() {
    crate::init_logger();
    let tests = &[
        "",
        "Basic",
        "Bearer QWxhZGRpbjpvcGVuIHNlc2FtZQ==",
        // Invalid base64.
        "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ",
        "Basic !!!!",
        // No colon: `Aladdin`.
        "Basic QWxhZGRpbg==",
        // Invalid UTF-8: `\xff:a`.
        "Basic /zph",
    ];
    for input in tests {
        assert!(BasicCredentials::parse(input).is_none(), "input: {input:?}");
    }
}

#[test]
fn round_trip() {
    let credentials = BasicCredentials::new("user", "pässwörd:1");
    let value = credentials.to_field_value();
    assert_eq!(BasicCredentials::parse(value.as_str()), Some(credentials));
}

#[test]
fn fmt_debug_hides_password() {
    let credentials = BasicCredentials::new("user", "secret");
    let dbg = format!("{credentials:?}");
    assert!(dbg.contains("user"), "{dbg}");
    assert!(!dbg.contains("secret"), "{dbg}");
}
