use std::time::SystemTime;

use http_semantics::{FieldValue, HeaderField, HeaderName, Headers};

fn field(name: &'static str, value: &'static str) -> HeaderField {
    HeaderField::new(HeaderName::from_static(name), FieldValue::from_static(value))
}

#[test]
fn new() {
    let headers = Headers::new();
    assert_eq!(headers.len(), 0);
    assert_eq!(headers.len_values(), 0);
    assert!(headers.is_empty());
    assert_eq!(headers.iter().count(), 0);
    assert!(headers.lookup(&HeaderName::ACCEPT).is_none());
}

#[test]
fn append_new_name() {
    let mut headers = Headers::new();
    headers.append(field("Accept", "text/html"));
    assert_eq!(headers.len(), 1);
    headers.append(field("Cache-Control", "no-cache"));
    assert_eq!(headers.len(), 2);
    assert_eq!(headers.len_values(), 2);
    assert!(!headers.is_empty());
}

#[test]
fn append_existing_name() {
    let mut headers = Headers::new();
    headers.append(field("Accept", "text/html"));
    headers.append(field("Cache-Control", "no-cache"));

    let len = headers.len();
    let values = headers.values(&HeaderName::ACCEPT).len();
    headers.append(field("accept", "application/json"));
    assert_eq!(headers.len(), len);
    assert_eq!(headers.values(&HeaderName::ACCEPT).len(), values + 1);
    assert_eq!(
        headers.values(&HeaderName::ACCEPT),
        [
            FieldValue::from_static("text/html"),
            FieldValue::from_static("application/json")
        ]
    );
}

#[test]
fn lookup_is_case_insensitive() {
    let headers = Headers::from(field("If-None-Match", "\"abc\""));
    for name in ["If-None-Match", "if-none-match", "IF-NONE-MATCH"] {
        let name = HeaderName::from_static(name);
        assert!(headers.contains(&name));
        assert_eq!(headers.first(&name).unwrap(), "\"abc\"");
        assert_eq!(headers.lookup(&name).unwrap().len(), 1);
    }
    assert!(!headers.contains(&HeaderName::IF_MATCH));
    assert!(headers.first(&HeaderName::IF_MATCH).is_none());
    assert!(headers.values(&HeaderName::IF_MATCH).is_empty());
}

#[test]
fn iteration_order() {
    let headers = Headers::from([
        field("Vary", "Accept"),
        field("Cache-Control", "no-cache"),
        field("vary", "Accept-Encoding"),
        field("Content-Type", "text/html"),
        field("Cache-Control", "no-store"),
    ]);
    let fields: Vec<(&str, &str)> = headers
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    // Names in first-seen order, keeping the casing of the first field.
    assert_eq!(
        fields,
        [
            ("Vary", "Accept"),
            ("Vary", "Accept-Encoding"),
            ("Cache-Control", "no-cache"),
            ("Cache-Control", "no-store"),
            ("Content-Type", "text/html"),
        ]
    );

    let names: Vec<&str> = headers.names().map(HeaderName::as_str).collect();
    assert_eq!(names, ["Vary", "Cache-Control", "Content-Type"]);
    assert_eq!(headers.names().len(), 3);

    let owned: Vec<HeaderField> = headers.clone().into_iter().collect();
    assert_eq!(owned.len(), 5);
    assert_eq!(owned[1], field("Vary", "Accept-Encoding"));
    assert_eq!(owned[4], field("Content-Type", "text/html"));

    let borrowed: Vec<HeaderField> = headers.fields().collect();
    assert_eq!(borrowed, owned);
    assert_eq!(borrowed[0].name().as_str(), "Vary");
}

#[test]
fn remove_all() {
    let mut headers = Headers::from([
        field("Vary", "Accept"),
        field("Cache-Control", "no-cache"),
        field("Vary", "Accept-Encoding"),
    ]);
    headers.remove_all(&HeaderName::from_static("VARY"));
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.len_values(), 1);
    assert!(!headers.contains(&HeaderName::VARY));
    let names: Vec<&str> = headers.names().map(HeaderName::as_str).collect();
    assert_eq!(names, ["Cache-Control"]);

    // No-op if not present.
    headers.remove_all(&HeaderName::VARY);
    assert_eq!(headers.len(), 1);

    // Appending again adds it as the last name.
    headers.append(field("Vary", "Accept"));
    let names: Vec<&str> = headers.names().map(HeaderName::as_str).collect();
    assert_eq!(names, ["Cache-Control", "Vary"]);
}

#[test]
fn insert() {
    let mut headers = Headers::from([
        field("Vary", "Accept"),
        field("Cache-Control", "no-cache"),
        field("Vary", "Accept-Encoding"),
    ]);
    headers.insert(field("vary", "*"));
    assert_eq!(headers.len(), 2);
    assert_eq!(headers.values(&HeaderName::VARY), [FieldValue::from_static("*")]);
    let names: Vec<&str> = headers.names().map(HeaderName::as_str).collect();
    assert_eq!(names, ["Vary", "Cache-Control"]);

    headers.insert(field("ETag", "\"1\""));
    assert_eq!(headers.len(), 3);
}

#[test]
fn clear() {
    let mut headers = Headers::from([field("Vary", "Accept"), field("Age", "1")]);
    headers.clear();
    assert!(headers.is_empty());
    assert_eq!(headers.len_values(), 0);
}

#[test]
fn mutating_a_clone_does_not_change_the_original() {
    let original = Headers::from(field("Vary", "Accept"));
    let mut copy = original.clone();
    copy.append(field("Vary", "Accept-Encoding"));
    copy.remove_all(&HeaderName::VARY);
    assert_eq!(original.len(), 1);
    assert_eq!(original.values(&HeaderName::VARY).len(), 1);
    assert!(copy.is_empty());
}

#[test]
fn equality() {
    let a = Headers::from([field("Vary", "Accept"), field("Age", "1")]);
    // Different name order and casing.
    let b = Headers::from([field("age", "1"), field("VARY", "Accept")]);
    assert_eq!(a, b);

    // Different value order.
    let c = Headers::from([field("Vary", "Accept"), field("Vary", "Accept-Encoding")]);
    let d = Headers::from([field("Vary", "Accept-Encoding"), field("Vary", "Accept")]);
    assert_ne!(c, d);

    // Additional value.
    let e = Headers::from([field("Vary", "Accept"), field("Age", "1"), field("Age", "2")]);
    assert_ne!(a, e);
}

#[test]
fn combined() {
    let headers = Headers::from([
        field("Cache-Control", "no-cache"),
        field("Accept", "text/html"),
        field("cache-control", "max-age=0"),
    ]);
    assert_eq!(
        headers.combined(&HeaderName::CACHE_CONTROL).unwrap(),
        "no-cache, max-age=0"
    );
    assert_eq!(headers.combined(&HeaderName::ACCEPT).unwrap(), "text/html");
    assert!(headers.combined(&HeaderName::VARY).is_none());
}

#[test]
fn get_value() {
    let headers = Headers::from([
        field("Age", "120"),
        field("Date", "Thu, 01 Jan 1970 00:00:00 GMT"),
        field("Content-Length", "abc"),
    ]);
    assert_eq!(headers.get_value::<u32>(&HeaderName::AGE).unwrap(), Some(120));
    assert_eq!(
        headers.get_value::<SystemTime>(&HeaderName::DATE).unwrap(),
        Some(SystemTime::UNIX_EPOCH)
    );
    assert_eq!(headers.get_value::<u64>(&HeaderName::EXPIRES).unwrap(), None);
    assert!(headers.get_value::<u64>(&HeaderName::CONTENT_LENGTH).is_err());
}

#[test]
fn extend_and_collect() {
    let mut headers: Headers = [field("Vary", "Accept")].into_iter().collect();
    headers.extend([field("vary", "Cookie"), field("Age", "1")]);
    assert_eq!(headers.len(), 2);
    assert_eq!(headers.len_values(), 3);
}

#[test]
fn fmt_debug() {
    let headers = Headers::from([field("Vary", "Accept"), field("Age", "1")]);
    assert_eq!(
        format!("{headers:?}"),
        r#"{Vary: "Accept", Age: "1"}"#
    );
}
